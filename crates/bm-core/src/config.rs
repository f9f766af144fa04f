//! Settings resolution
//!
//! Settings come from three layers, highest priority first:
//!
//! 1. [`SettingsOverrides`] — command-line flags and their environment variables
//! 2. [`SettingsFile`] — optional `~/.config/bookmarker/config.toml`
//! 3. Built-in defaults under the home directory
//!
//! Relative paths in the settings file are taken relative to the home
//! directory, the same way bookmark paths are.

use std::path::{Path, PathBuf};

use bm_fs::{ConfigStore, EntryKind, Filesystem};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::resolver::expand;

/// On-disk settings file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub bookmark_file: Option<String>,
    pub alias_file: Option<String>,
    pub lf_config: Option<String>,
    pub editor: Option<String>,
    #[serde(default)]
    pub outputs: Outputs,
}

/// Which artifacts to generate.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Outputs {
    #[serde(default = "enabled")]
    pub aliases: bool,
    #[serde(default = "enabled")]
    pub lf: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            aliases: true,
            lf: true,
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub home: Option<PathBuf>,
    pub settings_file: Option<PathBuf>,
    pub bookmark_file: Option<PathBuf>,
    pub alias_file: Option<PathBuf>,
    pub lf_config: Option<PathBuf>,
    pub editor: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub home: PathBuf,
    pub bookmark_file: PathBuf,
    pub alias_file: PathBuf,
    pub lf_config: PathBuf,
    pub editor: Option<String>,
    pub outputs: Outputs,
}

impl Settings {
    /// Resolve the home directory, load the settings file and merge everything.
    ///
    /// An explicit settings file must exist; the default one is optional.
    pub fn load(overrides: SettingsOverrides, fs: &dyn Filesystem) -> Result<Self> {
        let home = resolve_home(overrides.home.clone(), fs)?;
        let store = ConfigStore::new(fs);
        let file = match &overrides.settings_file {
            Some(path) => Some(store.load::<SettingsFile>(path)?),
            None => store.load_optional::<SettingsFile>(&default_settings_path(&home))?,
        };
        Ok(Self::merge(home, overrides, file.unwrap_or_default()))
    }

    /// Merge the layers for an already-resolved home directory.
    pub fn merge(home: PathBuf, overrides: SettingsOverrides, file: SettingsFile) -> Self {
        let pick = |flag: Option<PathBuf>, from_file: Option<String>, default: &str| {
            flag.or_else(|| from_file.map(|p| PathBuf::from(expand(&p, &home))))
                .unwrap_or_else(|| home.join(default))
        };

        let settings = Self {
            bookmark_file: pick(
                overrides.bookmark_file,
                file.bookmark_file,
                ".config/bookmarker/list",
            ),
            alias_file: pick(overrides.alias_file, file.alias_file, ".config/shell/aliasrc"),
            lf_config: pick(overrides.lf_config, file.lf_config, ".config/lf/lfrc"),
            editor: overrides
                .editor
                .or(file.editor)
                .filter(|e| !e.trim().is_empty()),
            outputs: file.outputs,
            home,
        };
        tracing::debug!(?settings, "resolved settings");
        settings
    }

    /// The editor for file aliases.
    ///
    /// # Errors
    /// Returns `Error::EditorUnset` if none was configured.
    pub fn editor(&self) -> Result<&str> {
        self.editor.as_deref().ok_or(Error::EditorUnset)
    }
}

/// `<home>/.config/bookmarker/config.toml`
pub fn default_settings_path(home: &Path) -> PathBuf {
    home.join(".config").join("bookmarker").join("config.toml")
}

/// Use `explicit` if given, otherwise the platform home directory.
///
/// # Errors
/// `Error::HomeDirMissing` if `explicit` is not an existing directory,
/// `Error::HomeDirUnresolvable` if there is no home to fall back on.
pub fn resolve_home(explicit: Option<PathBuf>, fs: &dyn Filesystem) -> Result<PathBuf> {
    match explicit {
        Some(path) => match fs.entry_kind(&path) {
            Ok(EntryKind::Directory) => Ok(path),
            _ => Err(Error::HomeDirMissing { path }),
        },
        None => dirs::home_dir().ok_or(Error::HomeDirUnresolvable),
    }
}
