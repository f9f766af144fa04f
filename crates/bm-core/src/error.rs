//! Error types for bm-core

use std::path::PathBuf;

/// Result type for bm-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single line of the bookmark file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The path directive has nothing before the first whitespace.
    #[error("abbreviation is empty")]
    EmptyAbbreviation,

    /// The path directive has no path after the abbreviation.
    #[error("not enough arguments for line {line}")]
    TooFewTokens { line: String },

    /// A `!` directive without both an abbreviation and a command.
    #[error("line {line} needs both an abbreviation and a command")]
    MalformedShellLine { line: String },

    /// The path, as written in the bookmark file, does not exist.
    #[error("filepath {path} does not exist")]
    PathNotFound { path: String },
}

/// Errors that can occur in bm-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line of the bookmark file is invalid
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// The generated section could not be rewritten
    #[error(transparent)]
    Section(#[from] bm_blocks::Error),

    /// Filesystem error from bm-fs
    #[error(transparent)]
    Fs(#[from] bm_fs::Error),

    /// No home directory was given and none could be detected
    #[error(
        "cannot determine the home directory; provide one with --home-path or BOOKMARKER_HOME"
    )]
    HomeDirUnresolvable,

    /// The configured home directory is not an existing directory
    #[error("home path {path} is not an existing directory")]
    HomeDirMissing { path: PathBuf },

    /// Shell aliases were requested but no editor is configured
    #[error("no editor configured; pass --editor or set $EDITOR")]
    EditorUnset,
}

impl Error {
    /// The line-level cause, if this is a parse error.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
