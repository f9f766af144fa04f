//! Bookmark file parsing.
//!
//! Each non-blank, non-comment line is one directive:
//!
//! ```text
//! # comment
//! c   .config/                  directory bookmark, relative to home
//! ac  .config/alacritty.yml     file bookmark
//! !up sudo apt update && sudo apt upgrade
//! ```
//!
//! A `!` line defines a plain shell alias whose command is the rest of the
//! line. Anything after the path on a path line is ignored.

use std::path::Path;

use bm_fs::{EntryKind, Filesystem};

use crate::bookmark::{Bookmark, BookmarkKind};
use crate::error::{Error, ParseError, Result};
use crate::resolver;

/// Split at the first whitespace run: `("abbr", "rest of line")`.
fn split_first_run(s: &str) -> Option<(&str, &str)> {
    let idx = s.find(char::is_whitespace)?;
    Some((&s[..idx], s[idx..].trim_start()))
}

/// Parse a single line.
///
/// Returns `Ok(None)` for blank and comment lines. Path directives are
/// checked against the filesystem, resolving relative paths against `home`.
///
/// Path directives are tokenized before leading whitespace is dropped, so an
/// indented path line has an empty abbreviation.
pub fn parse_line(
    line: &str,
    home: &Path,
    fs: &dyn Filesystem,
) -> std::result::Result<Option<Bookmark>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    if let Some(rest) = trimmed.strip_prefix('!') {
        let malformed = || ParseError::MalformedShellLine {
            line: trimmed.to_string(),
        };
        let (abbreviation, command) = split_first_run(rest).ok_or_else(malformed)?;
        if command.is_empty() {
            return Err(malformed());
        }
        return Bookmark::new(BookmarkKind::Shell, command, abbreviation)
            .map(Some)
            .ok_or_else(malformed);
    }

    let (abbreviation, rest) =
        split_first_run(line.trim_end()).ok_or_else(|| ParseError::TooFewTokens {
            line: trimmed.to_string(),
        })?;
    let path = rest.split(char::is_whitespace).next().unwrap_or_default();
    if path.is_empty() {
        return Err(ParseError::TooFewTokens {
            line: trimmed.to_string(),
        });
    }

    let abbreviation = abbreviation.trim();
    if abbreviation.is_empty() {
        return Err(ParseError::EmptyAbbreviation);
    }

    let kind = match resolver::resolve(path, home, fs)? {
        EntryKind::Directory => BookmarkKind::Directory,
        EntryKind::File => BookmarkKind::File,
    };
    Bookmark::new(kind, path, abbreviation)
        .map(Some)
        .ok_or(ParseError::EmptyAbbreviation)
}

/// Parse a whole bookmark file.
///
/// Stops at the first invalid line; nothing parsed before it is returned.
///
/// # Errors
/// Returns `Error::Parse` carrying the 1-based line number and the cause.
pub fn parse_bookmarks(text: &str, home: &Path, fs: &dyn Filesystem) -> Result<Vec<Bookmark>> {
    let mut bookmarks = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        tracing::debug!(line = index + 1, text = line, "parsing line");
        match parse_line(line, home, fs) {
            Ok(Some(bookmark)) => {
                tracing::debug!(
                    line = index + 1,
                    kind = %bookmark.kind(),
                    abbreviation = bookmark.abbreviation(),
                    target = bookmark.target(),
                    "parsed bookmark"
                );
                bookmarks.push(bookmark);
            }
            Ok(None) => {}
            Err(source) => {
                return Err(Error::Parse {
                    line: index + 1,
                    source,
                });
            }
        }
    }
    Ok(bookmarks)
}
