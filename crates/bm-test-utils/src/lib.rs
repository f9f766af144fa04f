//! Shared test utilities for the bookmarker workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`memory`] — [`MemoryFilesystem`], an in-memory [`bm_fs::Filesystem`]
//! - [`home`] — [`TestHome`] builder for a throwaway home directory on disk

pub mod home;
pub mod memory;

pub use home::TestHome;
pub use memory::MemoryFilesystem;
