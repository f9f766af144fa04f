//! The check command: validate the bookmark file without writing anything.

use colored::Colorize;

use bm_core::{Bookmark, Generator, Settings, SettingsOverrides};
use bm_fs::Filesystem;

use crate::error::Result;

/// Run the check command
pub fn run_check(fs: &dyn Filesystem, overrides: SettingsOverrides, json: bool) -> Result<()> {
    let settings = Settings::load(overrides, fs)?;
    let bookmarks = Generator::new(fs, &settings).load_bookmarks()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bookmarks)?);
        return Ok(());
    }

    for bookmark in &bookmarks {
        println!("{}", format_bookmark(bookmark));
    }
    println!(
        "{} {} bookmarks in {}",
        "OK".green().bold(),
        bookmarks.len(),
        settings.bookmark_file.display()
    );
    Ok(())
}

fn format_bookmark(bookmark: &Bookmark) -> String {
    format!(
        "   {:<9} {:<10} {}",
        bookmark.kind().as_str(),
        bookmark.abbreviation(),
        bookmark.target()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bm_core::BookmarkKind;
    use bm_test_utils::MemoryFilesystem;
    use std::path::PathBuf;

    fn overrides() -> SettingsOverrides {
        SettingsOverrides {
            home: Some(PathBuf::from("/home/u")),
            ..Default::default()
        }
    }

    #[test]
    fn test_check_does_not_need_editor() {
        let fs = MemoryFilesystem::new()
            .with_dir("/home/u/.config")
            .with_file("/home/u/.config/bookmarker/list", "c .config\n");

        assert!(run_check(&fs, overrides(), false).is_ok());
        assert!(fs.contents("/home/u/.config/shell/aliasrc").is_none());
    }

    #[test]
    fn test_check_reports_parse_error() {
        let fs = MemoryFilesystem::new()
            .with_file("/home/u/.config/bookmarker/list", "v /varr\n");

        let err = run_check(&fs, overrides(), true).unwrap_err();
        assert!(err.to_string().contains("/varr"), "got: {err}");
    }

    #[test]
    fn test_format_bookmark_columns() {
        let bookmark = Bookmark::new(BookmarkKind::Shell, "ls -la", "ll").unwrap();
        assert_eq!(format_bookmark(&bookmark), "   shell     ll         ls -la");
    }
}
