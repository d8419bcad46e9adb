//! Segment patterns with the `{%}` module wildcard
//!
//! A [`PathPattern`] is a cleaned, `/`-separated path whose segments are
//! either literals or the module wildcard. Matching works on path segments,
//! so a literal can never match half a directory name and the wildcard can
//! never span a separator.

use related_fs::NormalizedPath;

/// Placeholder for "any one directory name" in `app_dir` and type paths.
pub const MODULE_WILDCARD: &str = "{%}";

/// One segment of a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Module,
}

/// Problems found while parsing a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("'{segment}' embeds {{%}}; the wildcard must be a whole segment")]
    EmbeddedWildcard { segment: String },
}

/// Where a pattern matched inside a path, and what the wildcard captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Index of the first matched segment.
    pub start: usize,
    /// Number of matched segments.
    pub len: usize,
    /// Value of the module wildcard, if the pattern has one.
    pub module: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a `/`-separated pattern.
    ///
    /// The input is lexically cleaned first, so `..` and `.` segments are
    /// resolved and an absolute pattern keeps its empty leading segment.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let cleaned = NormalizedPath::new(raw).clean();
        let mut segments = Vec::new();
        for segment in cleaned.segments() {
            if segment == MODULE_WILDCARD {
                segments.push(Segment::Module);
            } else if segment.contains(MODULE_WILDCARD) {
                return Err(PatternError::EmbeddedWildcard {
                    segment: segment.to_string(),
                });
            } else {
                segments.push(Segment::Literal(segment.to_string()));
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_module(&self) -> bool {
        self.module_count() > 0
    }

    pub fn module_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Module))
            .count()
    }

    /// Whether the pattern climbs above its base (`../x` after cleaning).
    pub fn escapes_base(&self) -> bool {
        matches!(self.segments.first(), Some(Segment::Literal(s)) if s == "..")
    }

    /// Find the leftmost occurrence of this pattern inside `path`.
    ///
    /// The occurrence must be bounded by separators: it cannot start at the
    /// first segment and at least one segment must follow it, so the path
    /// lies strictly inside the matched directory.
    pub fn find_in(&self, path: &[&str]) -> Option<PatternMatch> {
        let n = self.segments.len();
        if n == 0 || path.len() < n + 2 {
            return None;
        }
        (1..path.len() - n).find_map(|start| self.match_at(path, start))
    }

    /// Match this pattern against the leading segments of `path`.
    ///
    /// Succeeds only if `path` has more segments than the pattern, i.e. the
    /// pattern names a directory that contains `path`.
    pub fn match_prefix(&self, path: &[&str]) -> Option<PatternMatch> {
        if self.segments.is_empty() || path.len() <= self.segments.len() {
            return None;
        }
        self.match_at(path, 0)
    }

    fn match_at(&self, path: &[&str], start: usize) -> Option<PatternMatch> {
        let mut module: Option<&str> = None;
        for (offset, segment) in self.segments.iter().enumerate() {
            let actual = *path.get(start + offset)?;
            match segment {
                Segment::Literal(expected) => {
                    if expected != actual {
                        return None;
                    }
                }
                Segment::Module => {
                    if actual.is_empty() {
                        return None;
                    }
                    // Every wildcard in one pattern names the same module.
                    match module {
                        Some(captured) if captured != actual => return None,
                        _ => module = Some(actual),
                    }
                }
            }
        }
        Some(PatternMatch {
            start,
            len: self.segments.len(),
            module: module.map(str::to_string),
        })
    }

    /// Render the pattern back to a path string.
    ///
    /// Wildcards are replaced by `module` when given and kept as `{%}`
    /// otherwise.
    pub fn render(&self, module: Option<&str>) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(s) => s.as_str(),
                Segment::Module => module.unwrap_or(MODULE_WILDCARD),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Replace every whole-segment `{%}` in a raw path with `value`.
pub fn substitute_module(raw: &str, value: &str) -> String {
    raw.split('/')
        .map(|segment| if segment == MODULE_WILDCARD { value } else { segment })
        .collect::<Vec<_>>()
        .join("/")
}
