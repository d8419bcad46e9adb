//! Glob capability
//!
//! The resolver never lists directories itself. It asks a [`Glob`]
//! implementation, which keeps platform behaviour (case folding, native
//! separators) in one place and lets tests substitute their own view of the
//! filesystem.

use crate::{Error, NormalizedPath, Result};

/// Filesystem probes needed to resolve related files.
pub trait Glob {
    /// Expand `pattern` into the existing paths it matches.
    ///
    /// `*` is the only wildcard; it never crosses a `/`. Results are
    /// returned in lexical order of their normalized form.
    fn glob(&self, pattern: &str, case_insensitive: bool) -> Result<Vec<NormalizedPath>>;

    /// Whether `path` is an existing regular file.
    fn is_file(&self, path: &NormalizedPath) -> bool {
        path.is_file()
    }

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &NormalizedPath) -> bool {
        path.is_dir()
    }
}

/// [`Glob`] backed by the `glob` crate and the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeGlob;

impl NativeGlob {
    pub fn new() -> Self {
        Self
    }
}

impl Glob for NativeGlob {
    fn glob(&self, pattern: &str, case_insensitive: bool) -> Result<Vec<NormalizedPath>> {
        let escaped = if case_insensitive && !cfg!(windows) {
            fold_case_pattern(pattern)
        } else {
            escape_pattern(pattern)
        };
        let options = glob::MatchOptions {
            case_sensitive: !case_insensitive,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        let paths = glob::glob_with(&escaped, options).map_err(|e| Error::Glob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let mut matches = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| Error::Glob {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            matches.push(NormalizedPath::new(path));
        }
        matches.sort();

        tracing::trace!(pattern, count = matches.len(), "glob expanded");
        Ok(matches)
    }
}

/// Escape every glob metacharacter except `*`.
pub fn escape_pattern(pattern: &str) -> String {
    pattern
        .split('*')
        .map(glob::Pattern::escape)
        .collect::<Vec<_>>()
        .join("*")
}

/// Escape metacharacters and turn every cased letter into a `[xX]` class.
///
/// The `glob` crate probes literal components with a direct `stat`, which is
/// case-sensitive on most Unix filesystems regardless of `MatchOptions`, so
/// case folding has to be spelled out in the pattern itself.
pub fn fold_case_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for c in pattern.chars() {
        match c {
            '*' => out.push('*'),
            '?' | '[' | ']' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => match single_case_pair(c) {
                Some((lower, upper)) => {
                    out.push('[');
                    out.push(lower);
                    out.push(upper);
                    out.push(']');
                }
                None => out.push(c),
            },
        }
    }
    out
}

fn single_case_pair(c: char) -> Option<(char, char)> {
    let mut lower = c.to_lowercase();
    let mut upper = c.to_uppercase();
    match (lower.next(), lower.next(), upper.next(), upper.next()) {
        (Some(l), None, Some(u), None) if l != u => Some((l, u)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_keeps_star_only() {
        assert_eq!(escape_pattern("/a/[b]/c?/*.py"), "/a/[[]b[]]/c[?]/*.py");
    }

    #[test]
    fn fold_case_brackets_letters() {
        assert_eq!(fold_case_pattern("/v1/A*.py"), "/[vV]1/[aA]*.[pP][yY]");
    }

    #[test]
    fn fold_case_escapes_metacharacters() {
        assert_eq!(fold_case_pattern("[x]?"), "[[][xX][]][?]");
    }

    #[test]
    fn escape_plain_pattern_is_unchanged() {
        assert_eq!(escape_pattern("/root/views/foo/*"), "/root/views/foo/*");
    }
}
