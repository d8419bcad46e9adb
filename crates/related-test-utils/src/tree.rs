//! [`TestTree`] builder for related-file test scenarios.

use std::fs;
use std::path::Path;

use related_fs::NormalizedPath;
use tempfile::TempDir;

/// A temporary directory holding an application tree, with helpers for
/// creating files and asserting on what a query created.
///
/// # Example
///
/// ```rust,no_run
/// use related_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.file("application/views/foo/bar.py");
/// tree.dir("application/controllers");
/// let current = tree.path("application/views/foo/bar.py");
/// assert!(current.as_str().ends_with("/application/views/foo/bar.py"));
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the tree as a native path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root of the tree as a [`NormalizedPath`].
    pub fn root_path(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Absolute normalized path of `rel` inside the tree. Nothing is created.
    pub fn path(&self, rel: &str) -> NormalizedPath {
        self.root_path().join(rel)
    }

    /// Create an empty file (and its parent directories).
    pub fn file(&self, rel: &str) -> NormalizedPath {
        self.write(rel, "")
    }

    /// Create a file with `content` (and its parent directories).
    pub fn write(&self, rel: &str, content: &str) -> NormalizedPath {
        let full = self.root().join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        self.path(rel)
    }

    /// Create a directory (and its parents).
    pub fn dir(&self, rel: &str) -> NormalizedPath {
        fs::create_dir_all(self.root().join(rel)).unwrap();
        self.path(rel)
    }

    /// Assert that `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, rel: &str) {
        let full = self.root().join(rel);
        assert!(full.exists(), "Expected path to exist: {}", full.display());
    }

    /// Assert that `rel` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_missing(&self, rel: &str) {
        let full = self.root().join(rel);
        assert!(!full.exists(), "Expected path NOT to exist: {}", full.display());
    }
}
