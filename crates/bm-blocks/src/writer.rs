//! Replacing the generated section.

use crate::error::Result;
use crate::parser::{END_MARKER, START_MARKER, find_section, lines};

/// Wraps `body` in the section markers.
///
/// `body` is expected to be newline-terminated lines; a blank line separates
/// it from each marker.
///
/// # Example
/// ```
/// use bm_blocks::writer::format_section;
///
/// let section = format_section("map gc cd /c\n");
/// assert_eq!(
///     section,
///     "### Automatically generated by BOOKMARKER ###\n\nmap gc cd /c\n\n### End of BOOKMARKER generation\n"
/// );
/// ```
pub fn format_section(body: &str) -> String {
    format!("{START_MARKER}\n\n{body}\n{END_MARKER}\n")
}

/// Drops any existing generated section from `existing` and appends a fresh
/// one built from `body`.
///
/// Every line outside the old section is kept byte for byte and
/// newline-terminated, whatever its encoding. An unterminated section
/// swallows the rest of the file. The new section always goes at the end.
///
/// # Errors
/// Returns `Error::MultipleSections` if `existing` has more than one start
/// marker.
///
/// # Example
/// ```
/// use bm_blocks::writer::rewrite_section;
///
/// let once = rewrite_section(b"set hidden\n", "map gc cd /c\n").unwrap();
/// let twice = rewrite_section(&once, "map gc cd /c\n").unwrap();
/// assert_eq!(once, twice);
/// assert!(once.starts_with(b"set hidden\n"));
/// ```
pub fn rewrite_section(existing: &[u8], body: &str) -> Result<Vec<u8>> {
    let section = find_section(existing)?;

    let mut output = Vec::with_capacity(existing.len() + body.len() + 96);
    for (index, line) in lines(existing).enumerate() {
        if section.is_some_and(|s| s.contains(index + 1)) {
            continue;
        }
        output.extend_from_slice(line);
        output.push(b'\n');
    }

    match &section {
        Some(s) => tracing::debug!(
            start = s.start_line,
            end = ?s.end_line,
            "replacing generated section"
        ),
        None => tracing::debug!("appending new generated section"),
    }

    output.extend_from_slice(format_section(body).as_bytes());
    Ok(output)
}
