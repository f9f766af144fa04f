//! TOML settings loading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Filesystem, Result};

/// Loads TOML settings files through a [`Filesystem`].
pub struct ConfigStore<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> ConfigStore<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Load and deserialize a TOML file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = self.fs.read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Like [`ConfigStore::load`], but a missing file yields `None`.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        match self.load(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "no settings file");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
