//! The generate command
//!
//! Writes the alias file and the lf section, or prints them on a dry run.

use colored::Colorize;

use bm_core::{GenerateOptions, Generator, OutputReport, Settings, SettingsOverrides};
use bm_fs::Filesystem;

use crate::error::Result;

/// Run the generate command.
pub fn run_generate(fs: &dyn Filesystem, overrides: SettingsOverrides, dry_run: bool) -> Result<()> {
    let settings = Settings::load(overrides, fs)?;
    let reports = Generator::new(fs, &settings).run(GenerateOptions { dry_run })?;

    if dry_run {
        for report in &reports {
            print!("{}", format_dry_run(report));
        }
        println!("{} Dry run, no files were written.", "=>".blue().bold());
        return Ok(());
    }

    for report in &reports {
        let status = if report.changed {
            "updated".green()
        } else {
            "unchanged".dimmed()
        };
        println!(
            "   {} {} ({})",
            status,
            report.path.display().to_string().cyan(),
            report.kind
        );
    }
    println!("{} Bookmarks have all been generated", "OK".green().bold());
    Ok(())
}

/// Header line plus the full would-be content of one output.
fn format_dry_run(report: &OutputReport) -> String {
    let marker = if report.changed { "would change" } else { "unchanged" };
    let mut out = format!(
        "{} {} ({}, {})\n",
        "==>".blue().bold(),
        report.path.display(),
        report.kind,
        marker
    );
    out.push_str(&String::from_utf8_lossy(&report.content));
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
