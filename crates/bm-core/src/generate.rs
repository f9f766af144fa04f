//! The generation pipeline: read bookmarks, write both artifacts.
//!
//! The alias file and the lf section are independent steps. Each one is
//! computed in full before anything is written, and a failure in one does not
//! undo the other.

use std::path::{Path, PathBuf};

use bm_blocks::rewrite_section;
use bm_fs::Filesystem;

use crate::bookmark::Bookmark;
use crate::config::Settings;
use crate::error::Result;
use crate::parser::parse_bookmarks;
use crate::render::{render_aliases, render_lf_mappings};

/// Which artifact an [`OutputReport`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Aliases,
    LfMappings,
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aliases => f.write_str("shell aliases"),
            Self::LfMappings => f.write_str("lf mappings"),
        }
    }
}

/// The outcome of generating one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputReport {
    pub kind: OutputKind,
    pub path: PathBuf,
    /// Full file content after generation. The lf config keeps the user's
    /// own lines byte for byte, so this is not necessarily UTF-8.
    pub content: Vec<u8>,
    /// Whether the file on disk differed from `content` beforehand.
    pub changed: bool,
    /// Whether `content` was written (false on dry runs).
    pub written: bool,
}

/// Options for a generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Compute everything but write nothing.
    pub dry_run: bool,
}

/// Runs the pipeline against a filesystem.
pub struct Generator<'a> {
    fs: &'a dyn Filesystem,
    settings: &'a Settings,
}

impl<'a> Generator<'a> {
    pub fn new(fs: &'a dyn Filesystem, settings: &'a Settings) -> Self {
        Self { fs, settings }
    }

    fn home(&self) -> &Path {
        &self.settings.home
    }

    /// Read and parse the bookmark file.
    pub fn load_bookmarks(&self) -> Result<Vec<Bookmark>> {
        let path = &self.settings.bookmark_file;
        tracing::debug!(path = %path.display(), "reading bookmark file");
        let text = self.fs.read_text(path)?;
        let bookmarks = parse_bookmarks(&text, self.home(), self.fs)?;
        tracing::info!(count = bookmarks.len(), "parsed bookmarks");
        Ok(bookmarks)
    }

    /// Overwrite the alias file with one alias per bookmark.
    pub fn generate_aliases(
        &self,
        bookmarks: &[Bookmark],
        options: GenerateOptions,
    ) -> Result<OutputReport> {
        let editor = self.settings.editor()?;
        let content = render_aliases(bookmarks, editor, self.home());
        let path = &self.settings.alias_file;
        // Only used for the report; the file is replaced wholesale either way.
        let previous = match self.fs.read_bytes(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "previous alias file not readable"
                );
                None
            }
        };
        self.finish(
            OutputKind::Aliases,
            path,
            previous.as_deref(),
            content.into_bytes(),
            options,
        )
    }

    /// Replace the generated section of the lf config with directory mappings.
    ///
    /// The config file must already exist.
    pub fn generate_lf_mappings(
        &self,
        bookmarks: &[Bookmark],
        options: GenerateOptions,
    ) -> Result<OutputReport> {
        let path = &self.settings.lf_config;
        let existing = self.fs.read_bytes(path)?;
        let body = render_lf_mappings(bookmarks, self.home());
        let content = rewrite_section(&existing, &body)?;
        self.finish(
            OutputKind::LfMappings,
            path,
            Some(existing.as_slice()),
            content,
            options,
        )
    }

    /// Load bookmarks and generate every enabled artifact, stopping at the
    /// first failure.
    pub fn run(&self, options: GenerateOptions) -> Result<Vec<OutputReport>> {
        let bookmarks = self.load_bookmarks()?;
        let mut reports = Vec::new();
        if self.settings.outputs.aliases {
            reports.push(self.generate_aliases(&bookmarks, options)?);
        } else {
            tracing::debug!("alias output disabled");
        }
        if self.settings.outputs.lf {
            reports.push(self.generate_lf_mappings(&bookmarks, options)?);
        } else {
            tracing::debug!("lf output disabled");
        }
        Ok(reports)
    }

    fn finish(
        &self,
        kind: OutputKind,
        path: &Path,
        previous: Option<&[u8]>,
        content: Vec<u8>,
        options: GenerateOptions,
    ) -> Result<OutputReport> {
        let changed = previous != Some(content.as_slice());
        if !options.dry_run {
            self.fs.write_bytes(path, &content)?;
            tracing::info!(output = %kind, path = %path.display(), changed, "wrote output");
        }
        Ok(OutputReport {
            kind,
            path: path.to_path_buf(),
            content,
            changed,
            written: !options.dry_run,
        })
    }
}
