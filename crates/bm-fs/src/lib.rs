//! Filesystem capability for Bookmarker
//!
//! Everything that touches the disk goes through the [`Filesystem`] trait so
//! callers can hand in a real filesystem or a test double. The [`io`] module
//! holds the atomic write primitives used by [`OsFilesystem`].

pub mod config;
pub mod error;
pub mod filesystem;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use filesystem::{EntryKind, Filesystem, OsFilesystem};
