//! Bookmarker CLI
//!
//! Compiles a bookmark file into shell aliases and lf key mappings.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use bm_fs::OsFilesystem;
use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug)?;

    let overrides = cli.paths.into();
    let fs = OsFilesystem::new();
    match cli.command.unwrap_or_default() {
        Commands::Generate { dry_run } => commands::run_generate(&fs, overrides, dry_run),
        Commands::Check { json } => commands::run_check(&fs, overrides, json),
    }
}
