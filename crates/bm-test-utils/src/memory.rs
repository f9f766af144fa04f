//! In-memory [`Filesystem`] for unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use bm_fs::{EntryKind, Error, Filesystem, Result};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

/// A tree of directories and text files held in memory.
///
/// Paths are used as given, so tests should stick to absolute paths.
///
/// ```
/// use bm_fs::{EntryKind, Filesystem};
/// use bm_test_utils::MemoryFilesystem;
/// use std::path::Path;
///
/// let fs = MemoryFilesystem::new()
///     .with_dir("/home/u/.config")
///     .with_file("/home/u/.config/lf/lfrc", "set hidden\n");
///
/// assert_eq!(fs.entry_kind(Path::new("/home/u/.config/lf")).unwrap(), EntryKind::Directory);
/// ```
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    /// Add a text file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.with_bytes(path, content.as_bytes())
    }

    /// Add a file with arbitrary bytes, creating its parent directories.
    pub fn with_bytes(self, path: impl AsRef<Path>, content: &[u8]) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(content.to_vec()));
        self
    }

    /// Current content of a file as text, if it exists.
    ///
    /// Invalid UTF-8 is replaced lossily; use [`MemoryFilesystem::bytes`] to
    /// compare exact content.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.bytes(path).map(|b| String::from_utf8_lossy(&b).into_owned())
    }

    /// Current raw content of a file, if it exists.
    pub fn bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    fn add_dir(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        match self.nodes.borrow().get(path) {
            Some(Node::Dir) => Ok(EntryKind::Directory),
            Some(Node::File(_)) => Ok(EntryKind::File),
            None => Err(Error::NotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Dir) => Err(Error::io(
                path,
                io::Error::new(io::ErrorKind::Other, "is a directory"),
            )),
            None => Err(Error::NotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        let mut nodes = self.nodes.borrow_mut();
        if let Some(Node::Dir) = nodes.get(path) {
            return Err(Error::io(
                path,
                io::Error::new(io::ErrorKind::Other, "is a directory"),
            ));
        }
        nodes.insert(path.to_path_buf(), Node::File(content.to_vec()));
        Ok(())
    }
}
