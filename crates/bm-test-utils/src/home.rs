//! [`TestHome`] builder for tests that need a real home directory.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory standing in for `$HOME`.
///
/// # Example
///
/// ```rust,no_run
/// use bm_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.dir(".config/whatever");
/// home.file(".config/whatever/conf", "");
/// home.assert_file_contains(".config/whatever/conf", "");
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create an empty temporary home.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the home.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root path as a string, for building expected output.
    pub fn root_str(&self) -> String {
        self.root().to_string_lossy().into_owned()
    }

    /// Absolute path of `rel` inside the home.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create a directory (and parents) relative to the home.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a file relative to the home, creating parents.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file relative to the home.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    /// Assert that a file exists and contains `needle`.
    pub fn assert_file_contains(&self, rel: &str, needle: &str) {
        let content = self.read(rel);
        assert!(
            content.contains(needle),
            "{rel} should contain {needle:?}, got:\n{content}"
        );
    }
}
