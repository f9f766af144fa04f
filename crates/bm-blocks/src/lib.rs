//! Generated-section parsing and writing for Bookmarker.
//!
//! A config file owned by the user may contain one machine-written region
//! bounded by two literal marker lines:
//!
//! ```text
//! ### Automatically generated by BOOKMARKER ###
//!
//! map gc cd /home/me/.config/
//!
//! ### End of BOOKMARKER generation
//! ```
//!
//! [`parser`] locates that region and [`writer`] replaces it while keeping
//! every other line of the file as it was. Only one region is supported; a
//! file with more than one start marker is rejected rather than guessed at.

pub mod error;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{END_MARKER, START_MARKER, Section, find_section};
pub use writer::{format_section, rewrite_section};
