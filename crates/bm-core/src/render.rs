//! Rendering bookmarks into shell aliases and lf key mappings.

use std::fmt::Write as _;
use std::path::Path;

use crate::bookmark::{Bookmark, BookmarkKind};
use crate::resolver::expand;

/// Render one alias line, without the trailing newline.
///
/// Nothing is quoted or escaped; targets are interpolated as written.
pub fn alias_line(bookmark: &Bookmark, editor: &str, home: &Path) -> String {
    let abbr = bookmark.abbreviation();
    match bookmark.kind() {
        BookmarkKind::Directory => {
            format!("alias c{abbr}='cd {}'", expand(bookmark.target(), home))
        }
        BookmarkKind::File => {
            format!("alias cf{abbr}='{editor} {}'", expand(bookmark.target(), home))
        }
        BookmarkKind::Shell => format!("alias {abbr}='{}'", bookmark.target()),
    }
}

/// Render the whole alias file, one newline-terminated line per bookmark in
/// input order. Duplicate abbreviations produce duplicate lines.
pub fn render_aliases(bookmarks: &[Bookmark], editor: &str, home: &Path) -> String {
    let mut out = String::new();
    for bookmark in bookmarks {
        let line = alias_line(bookmark, editor, home);
        tracing::debug!(%line, "alias");
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Render the body of the lf section: a `map g<abbr> cd <path>` line for
/// every directory bookmark, in input order.
pub fn render_lf_mappings(bookmarks: &[Bookmark], home: &Path) -> String {
    let mut out = String::new();
    for bookmark in bookmarks {
        match bookmark.kind() {
            BookmarkKind::Directory => {
                let line = format!(
                    "map g{} cd {}",
                    bookmark.abbreviation(),
                    expand(bookmark.target(), home)
                );
                tracing::debug!(%line, "lf mapping");
                let _ = writeln!(out, "{line}");
            }
            BookmarkKind::File | BookmarkKind::Shell => {}
        }
    }
    out
}
