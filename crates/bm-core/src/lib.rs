//! Bookmark parsing and artifact generation for Bookmarker
//!
//! A bookmark file maps short abbreviations to paths or shell commands. This
//! crate turns it into:
//!
//! - a shell alias file (`alias cc='cd ~/.config/'` and friends), and
//! - an lf keybinding section (`map gc cd ~/.config/`) kept inside an
//!   existing `lfrc`.
//!
//! # Architecture
//!
//! ```text
//!     bookmark file
//!          |
//!       parser ---- resolver ---- bm-fs::Filesystem
//!          |
//!    Vec<Bookmark>
//!       /     \
//!  render      render + bm-blocks
//!    |             |
//! aliasrc        lfrc
//! ```
//!
//! All filesystem access goes through a [`bm_fs::Filesystem`] passed in by
//! the caller.

pub mod bookmark;
pub mod config;
pub mod error;
pub mod generate;
pub mod parser;
pub mod render;
pub mod resolver;

pub use bookmark::{Bookmark, BookmarkKind};
pub use config::{Outputs, Settings, SettingsFile, SettingsOverrides};
pub use error::{Error, ParseError, Result};
pub use generate::{GenerateOptions, Generator, OutputKind, OutputReport};
pub use parser::{parse_bookmarks, parse_line};
pub use render::{render_aliases, render_lf_mappings};
pub use resolver::{expand, resolve};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_includes_line_and_path() {
        let error = Error::Parse {
            line: 4,
            source: ParseError::PathNotFound {
                path: "/varr".into(),
            },
        };

        let display = error.to_string();
        assert_eq!(display, "line 4: filepath /varr does not exist");
        assert_eq!(
            error.parse_error(),
            Some(&ParseError::PathNotFound {
                path: "/varr".into()
            })
        );
    }
}
