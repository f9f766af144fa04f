//! CLI argument parsing using clap derive

use std::path::PathBuf;

use bm_core::SettingsOverrides;
use clap::{Args, Parser, Subcommand};

/// bookmarker -- or file shortcuts
///
/// Reads a bookmark file and turns it into shell aliases and lf key mappings.
/// Each line of the bookmark file looks like `[abbreviation] [path]`; with
/// `v .vimrc` you get an alias `cfv` that opens ~/.vimrc in your editor.
/// Directories get `c<abbr>` aliases and `g<abbr>` mappings in lf, and lines
/// like `!ll ls -la` become plain aliases.
#[derive(Parser, Debug)]
#[command(name = "bm")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Enable debug output
    #[arg(short = 'v', long = "debug", global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub paths: PathArgs,

    /// The command to run (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Locations and the editor; each can also be set in the settings file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    /// Home directory that relative bookmark paths are resolved against
    #[arg(short = 'H', long, env = "BOOKMARKER_HOME", global = true)]
    pub home_path: Option<PathBuf>,

    /// Settings file [default: ~/.config/bookmarker/config.toml]
    #[arg(short = 'c', long = "config", env = "BOOKMARKER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Input bookmark file [default: ~/.config/bookmarker/list]
    #[arg(short = 'b', long, env = "BOOKMARKER_FILE", global = true)]
    pub bookmark_file: Option<PathBuf>,

    /// Shell alias file to overwrite; source it from your shell rc
    /// [default: ~/.config/shell/aliasrc]
    #[arg(short = 'a', long, env = "BOOKMARKER_ALIAS_FILE", global = true)]
    pub alias_file: Option<PathBuf>,

    /// lf config whose generated section is replaced [default: ~/.config/lf/lfrc]
    #[arg(short = 'l', long, env = "BOOKMARKER_LF_CONFIG", global = true)]
    pub lf_config: Option<PathBuf>,

    /// Editor used by file aliases
    #[arg(short = 'e', long, env = "EDITOR", global = true)]
    pub editor: Option<String>,
}

impl From<PathArgs> for SettingsOverrides {
    fn from(args: PathArgs) -> Self {
        Self {
            home: args.home_path,
            settings_file: args.config,
            bookmark_file: args.bookmark_file,
            alias_file: args.alias_file,
            lf_config: args.lf_config,
            editor: args.editor,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the alias file and the lf mappings
    Generate {
        /// Print what would be written without touching any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate the bookmark file and list its bookmarks
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate { dry_run: false }
    }
}
