//! Locating the generated section.
//!
//! Config files are scanned as raw bytes so lines in any encoding survive a
//! rewrite untouched. Only the marker lines have to be ASCII.

use crate::error::{Error, Result};

/// Line that opens the generated section.
pub const START_MARKER: &str = "### Automatically generated by BOOKMARKER ###";

/// Line that closes the generated section.
pub const END_MARKER: &str = "### End of BOOKMARKER generation";

/// Where the generated section sits in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// 1-based line number of the start marker.
    pub start_line: usize,
    /// 1-based line number of the end marker, `None` when the section is
    /// unterminated and runs to the end of the file.
    pub end_line: Option<usize>,
}

impl Section {
    /// Whether 1-based line `number` belongs to the section, markers included.
    pub fn contains(&self, number: usize) -> bool {
        number >= self.start_line && self.end_line.is_none_or(|end| number <= end)
    }
}

/// Splits `content` into lines the way [`str::lines`] does: `\n` or `\r\n`
/// ends a line and the final line ending is optional.
pub(crate) fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content.split_inclusive(|b| *b == b'\n').map(|line| {
        match line.strip_suffix(b"\n") {
            Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
            None => line,
        }
    })
}

/// Finds the generated section in `content`.
///
/// Markers must match a whole line exactly. An end marker that appears
/// before any start marker is ordinary text.
///
/// # Errors
/// Returns `Error::MultipleSections` if more than one start marker exists.
///
/// # Example
/// ```
/// use bm_blocks::parser::find_section;
///
/// let content = "set hidden\n### Automatically generated by BOOKMARKER ###\nmap gc cd /c\n### End of BOOKMARKER generation\n";
/// let section = find_section(content.as_bytes()).unwrap().unwrap();
/// assert_eq!(section.start_line, 2);
/// assert_eq!(section.end_line, Some(4));
/// ```
pub fn find_section(content: &[u8]) -> Result<Option<Section>> {
    let start = START_MARKER.as_bytes();
    let end = END_MARKER.as_bytes();

    let count = lines(content).filter(|l| *l == start).count();
    if count > 1 {
        return Err(Error::MultipleSections { count });
    }

    let mut section: Option<Section> = None;
    for (index, line) in lines(content).enumerate() {
        match section.as_mut() {
            None if line == start => {
                section = Some(Section {
                    start_line: index + 1,
                    end_line: None,
                });
            }
            None => {}
            Some(open) if line == end => {
                open.end_line = Some(index + 1);
                break;
            }
            Some(_) => {}
        }
    }

    if let Some(s) = &section {
        if s.end_line.is_none() {
            tracing::warn!(
                line = s.start_line,
                "generated section has no end marker; treating the rest of the file as generated"
            );
        }
    }
    Ok(section)
}
