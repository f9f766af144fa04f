//! The filesystem capability threaded through parsing and generation.

use std::fs;
use std::path::Path;

use crate::{Error, Result, io};

/// What a path refers to on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Trait for the filesystem operations Bookmarker needs.
///
/// Implementations must report a missing entry as [`Error::NotFound`].
pub trait Filesystem {
    /// Stat `path` once and classify it.
    fn entry_kind(&self, path: &Path) -> Result<EntryKind>;

    /// Read the whole file as raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the file's content, creating it if needed.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Read the whole file as UTF-8.
    ///
    /// # Errors
    /// Returns `Error::InvalidUtf8` if the file is not valid UTF-8.
    fn read_text(&self, path: &Path) -> Result<String> {
        String::from_utf8(self.read_bytes(path)?).map_err(|_| Error::InvalidUtf8 {
            path: path.to_path_buf(),
        })
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl OsFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for OsFilesystem {
    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;
        Ok(if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        io::read_bytes(path)
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<()> {
        io::write_atomic(path, content)
    }
}
