//! The bookmark record.

use serde::Serialize;

/// What a bookmark points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkKind {
    Directory,
    File,
    Shell,
}

impl BookmarkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
            Self::Shell => "shell",
        }
    }
}

impl std::fmt::Display for BookmarkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed line of the bookmark file.
///
/// For directory and file bookmarks `target` is the path exactly as written,
/// relative paths included; it is expanded against the home directory only
/// when rendering. For shell bookmarks it is the aliased command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    kind: BookmarkKind,
    target: String,
    abbreviation: String,
}

impl Bookmark {
    /// Build a bookmark, or `None` if the abbreviation is empty.
    pub fn new(
        kind: BookmarkKind,
        target: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Option<Self> {
        let abbreviation = abbreviation.into();
        if abbreviation.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            target: target.into(),
            abbreviation,
        })
    }

    pub fn kind(&self) -> BookmarkKind {
        self.kind
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }
}
