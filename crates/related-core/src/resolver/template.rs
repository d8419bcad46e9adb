//! `${name}` path templates
//!
//! Substitution is safe: an unknown placeholder is copied through verbatim
//! and a malformed `$` is kept as text, so expanding never fails.

use std::collections::HashMap;

/// Placeholder names the resolver provides values for.
pub const KNOWN_PLACEHOLDERS: &[&str] = &[
    "app_path",
    "type_path",
    "base_filename",
    "file_from_type_path",
    "file_from_app_path",
    "dir_from_type_path",
    "prefix",
    "suffix",
    "module",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text(String),
    Placeholder { name: String, raw: String },
}

/// A parsed template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: Vec<Part>,
}

impl Template {
    /// Parse `$name`, `${name}` and `$$` out of `raw`.
    pub fn parse(raw: &str) -> Self {
        let mut parts = Vec::new();
        let mut text = String::new();
        let mut rest = raw;

        while let Some(idx) = rest.find('$') {
            text.push_str(&rest[..idx]);
            let after = &rest[idx + 1..];

            if let Some(tail) = after.strip_prefix('$') {
                text.push('$');
                rest = tail;
                continue;
            }

            let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
                match braced.find('}') {
                    Some(end) if is_identifier(&braced[..end]) => (&braced[..end], end + 2),
                    _ => ("", 0),
                }
            } else {
                let len = identifier_len(after);
                (&after[..len], len)
            };

            if name.is_empty() {
                text.push('$');
                rest = after;
                continue;
            }

            if !text.is_empty() {
                parts.push(Part::Text(std::mem::take(&mut text)));
            }
            parts.push(Part::Placeholder {
                name: name.to_string(),
                raw: rest[idx..idx + 1 + consumed].to_string(),
            });
            rest = &after[consumed..];
        }

        text.push_str(rest);
        if !text.is_empty() {
            parts.push(Part::Text(text));
        }
        Self { parts }
    }

    /// Whether the template mentions placeholder `name`.
    pub fn references(&self, name: &str) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, Part::Placeholder { name: n, .. } if n == name))
    }

    /// Placeholder names that are not in [`KNOWN_PLACEHOLDERS`].
    pub fn unknown_placeholders(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Placeholder { name, .. } if !KNOWN_PLACEHOLDERS.contains(&name.as_str()) => {
                    Some(name.as_str())
                }
                _ => None,
            })
            .collect()
    }

    /// Expand the template.
    ///
    /// Known placeholders missing from `values` expand to the empty string;
    /// unknown ones are left exactly as written.
    pub fn render(&self, values: &HashMap<&str, String>) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(text),
                Part::Placeholder { name, raw } => match values.get(name.as_str()) {
                    Some(value) => out.push_str(value),
                    None if KNOWN_PLACEHOLDERS.contains(&name.as_str()) => {}
                    None => out.push_str(raw),
                },
            }
        }
        out
    }
}

fn identifier_len(s: &str) -> usize {
    let mut len = 0;
    for (i, c) in s.char_indices() {
        let ok = if i == 0 {
            c == '_' || c.is_ascii_alphabetic()
        } else {
            c == '_' || c.is_ascii_alphanumeric()
        };
        if !ok {
            break;
        }
        len = i + c.len_utf8();
    }
    len
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && identifier_len(s) == s.len()
}
