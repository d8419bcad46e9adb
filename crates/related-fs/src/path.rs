//! Forward-slash paths
//!
//! Configuration patterns, template variables and glob patterns are all
//! plain `/`-separated strings. [`NormalizedPath`] keeps paths in that form
//! and only turns them back into native paths for filesystem calls.

use std::path::{Path, PathBuf};

/// A path stored with `/` separators on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Wrap a path, turning `\\` into `/`.
    ///
    /// Nothing else is rewritten; see [`NormalizedPath::clean`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consume the path and return its string form.
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Native form for filesystem calls.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether the path is rooted (`/x`, `C:/x` or `//server/share`).
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || has_drive_prefix(&self.inner)
    }

    /// Append `segment`, which may itself contain separators.
    ///
    /// Joining onto an empty path yields `segment` unchanged.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let inner = match self.inner.as_str() {
            "" => segment,
            base if base.ends_with('/') => format!("{base}{segment}"),
            base => format!("{base}/{segment}"),
        };
        Self { inner }
    }

    /// Everything before the last segment; `/` for a top-level entry.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        let idx = trimmed.rfind('/')?;
        let inner = if idx == 0 { "/" } else { &trimmed[..idx] };
        Some(Self {
            inner: inner.to_string(),
        })
    }

    /// Last segment, ignoring trailing separators.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension of the last segment, without the dot.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| split_extension(name).1)
    }

    /// Split the path into its `/`-separated segments.
    ///
    /// An absolute path yields an empty leading segment, so that every
    /// non-empty segment is preceded by a separator in the original string.
    pub fn segments(&self) -> Vec<&str> {
        self.inner.split('/').collect()
    }

    /// Return the remainder of this path below `dir`, without surrounding
    /// separators, or `None` if `dir` is not a segment-wise prefix.
    pub fn strip_dir_prefix(&self, dir: &NormalizedPath) -> Option<&str> {
        let dir = dir.inner.trim_end_matches('/');
        let rest = self.inner.strip_prefix(dir)?;
        if !dir.is_empty() && !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        Some(rest.trim_matches('/'))
    }

    /// Lexically clean the path.
    ///
    /// Collapses repeated separators, drops `.` segments and resolves `..`
    /// against preceding segments. Leading `..` segments of a relative path
    /// are kept; `..` directly below the root is dropped. Does not touch the
    /// filesystem and does not resolve symlinks.
    pub fn clean(&self) -> Self {
        let (prefix, rest) = split_root(&self.inner);
        let mut stack: Vec<&str> = Vec::new();
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => match stack.last() {
                    Some(&last) if last != ".." => {
                        stack.pop();
                    }
                    _ if !prefix.is_empty() => {}
                    _ => stack.push(".."),
                },
                other => stack.push(other),
            }
        }

        let body = stack.join("/");
        let inner = if prefix.is_empty() && body.is_empty() {
            ".".to_string()
        } else {
            format!("{}{}", prefix, body)
        };
        Self { inner }
    }

    /// Make the path absolute against `base` (if relative) and clean it.
    pub fn absolutize(&self, base: &NormalizedPath) -> Self {
        if self.is_absolute() {
            self.clean()
        } else {
            base.join(&self.inner).clean()
        }
    }

    /// Make the path absolute against the process working directory.
    pub fn absolutize_from_cwd(&self) -> std::io::Result<Self> {
        if self.is_absolute() {
            return Ok(self.clean());
        }
        let cwd = std::env::current_dir()?;
        Ok(self.absolutize(&NormalizedPath::new(cwd)))
    }

    /// Canonicalize an existing path through the filesystem.
    ///
    /// Uses `dunce` so Windows results stay free of verbatim prefixes.
    pub fn canonicalize(&self) -> std::io::Result<Self> {
        dunce::canonicalize(self.to_native()).map(Self::new)
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

/// Split a file name into stem and extension.
///
/// A leading dot does not start an extension (`.env` has none).
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}

fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Split off the root marker that `clean` must preserve.
fn split_root(s: &str) -> (&str, &str) {
    if has_drive_prefix(s) {
        let end = if s[2..].starts_with('/') { 3 } else { 2 };
        return (&s[..end], &s[end..]);
    }
    if s.starts_with("//") && !s.starts_with("///") {
        return (&s[..2], &s[2..]);
    }
    if let Some(rest) = s.strip_prefix('/') {
        return ("/", rest);
    }
    ("", s)
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl serde::Serialize for NormalizedPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}
