//! Path resolution against the home directory.
//!
//! Paths in the bookmark file are validated once while parsing ([`resolve`])
//! and expanded again when rendering ([`expand`]). The two steps are kept
//! apart so the home directory used for output can differ from the one the
//! file was checked against.

use std::path::{Path, PathBuf};

use bm_fs::{EntryKind, Filesystem};

use crate::error::ParseError;

/// Expand `path` against `home` without touching the filesystem.
///
/// A leading `/` marks an absolute path, which is returned unchanged. Anything
/// else is appended to `home` with a single separator; the path itself is
/// otherwise left alone, trailing slash included.
///
/// ```
/// use bm_core::resolver::expand;
/// use std::path::Path;
///
/// assert_eq!(expand(".config/", Path::new("/home/me")), "/home/me/.config/");
/// assert_eq!(expand("/etc/hosts", Path::new("/home/me")), "/etc/hosts");
/// ```
pub fn expand(path: &str, home: &Path) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }
    let home = home.to_string_lossy();
    if home.ends_with('/') {
        format!("{home}{path}")
    } else {
        format!("{home}/{path}")
    }
}

/// Check that `path` exists and report whether it is a directory or a file.
///
/// Performs exactly one stat through `fs`.
///
/// # Errors
/// Returns `ParseError::PathNotFound` with the path as written when the
/// entry is missing or cannot be stat'ed.
pub fn resolve(path: &str, home: &Path, fs: &dyn Filesystem) -> Result<EntryKind, ParseError> {
    let full = PathBuf::from(expand(path, home));
    fs.entry_kind(&full).map_err(|e| {
        tracing::debug!(path, resolved = %full.display(), error = %e, "path check failed");
        ParseError::PathNotFound {
            path: path.to_string(),
        }
    })
}
