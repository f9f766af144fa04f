//! End-to-end generation on a real filesystem.

use bm_blocks::{END_MARKER, START_MARKER};
use bm_core::{GenerateOptions, Generator, OutputKind, Settings, SettingsFile, SettingsOverrides};
use bm_fs::OsFilesystem;
use bm_test_utils::TestHome;
use pretty_assertions::assert_eq;
use std::fs;

fn setup(list: &str, lfrc: &str) -> (TestHome, Settings) {
    let home = TestHome::new();
    home.dir(".config/whatever");
    home.file(".config/whatever/conf", "");
    home.file(".config/bookmarker/list", list);
    home.file(".config/lf/lfrc", lfrc);

    let overrides = SettingsOverrides {
        editor: Some("vim".into()),
        ..Default::default()
    };
    let settings = Settings::merge(home.root().to_path_buf(), overrides, SettingsFile::default());
    (home, settings)
}

#[test]
fn alias_file_matches_expected_text() {
    let (home, settings) = setup("c .config/\ncw .config/whatever/conf", "");
    let root = home.root_str();

    Generator::new(&OsFilesystem, &settings)
        .run(GenerateOptions::default())
        .unwrap();

    assert_eq!(
        home.read(".config/shell/aliasrc"),
        format!("alias cc='cd {root}/.config/'\nalias cfcw='vim {root}/.config/whatever/conf'\n")
    );
}

#[test]
fn alias_file_is_overwritten_not_merged() {
    let (home, settings) = setup("!ll ls -la", "");
    home.file(".config/shell/aliasrc", "alias stale='true'\nalias older='true'\n");

    Generator::new(&OsFilesystem, &settings)
        .run(GenerateOptions::default())
        .unwrap();

    assert_eq!(home.read(".config/shell/aliasrc"), "alias ll='ls -la'\n");
}

#[test]
fn lf_section_replaced_between_user_lines() {
    let lfrc = format!(
        "set hidden true\n{START_MARKER}\n\nmap go cd /old\n\n{END_MARKER}\nmap D delete\n"
    );
    let (home, settings) = setup("c .config/", &lfrc);
    let root = home.root_str();

    let reports = Generator::new(&OsFilesystem, &settings)
        .run(GenerateOptions::default())
        .unwrap();

    assert_eq!(
        home.read(".config/lf/lfrc"),
        format!(
            "set hidden true\nmap D delete\n{START_MARKER}\n\nmap gc cd {root}/.config/\n\n{END_MARKER}\n"
        )
    );
    let lf = reports
        .iter()
        .find(|r| r.kind == OutputKind::LfMappings)
        .unwrap();
    assert!(lf.changed && lf.written);
}

#[test]
fn rerun_with_same_bookmarks_is_idempotent() {
    let (home, settings) = setup("c .config/\ncw .config/whatever/conf", "set ratios 1:2\n");
    let generator = Generator::new(&OsFilesystem, &settings);

    generator.run(GenerateOptions::default()).unwrap();
    let first = home.read(".config/lf/lfrc");
    generator.run(GenerateOptions::default()).unwrap();
    let second = home.read(".config/lf/lfrc");

    assert_eq!(first, second);
    assert_eq!(first.matches(START_MARKER).count(), 1);
}

#[test]
fn home_override_applies_at_render_time() {
    let (home, mut settings) = setup("c .config/", "");
    let bookmarks = Generator::new(&OsFilesystem, &settings)
        .load_bookmarks()
        .unwrap();

    settings.home = "/mnt/other-home".into();
    let report = Generator::new(&OsFilesystem, &settings)
        .generate_aliases(&bookmarks, GenerateOptions { dry_run: true })
        .unwrap();

    assert_eq!(report.content, b"alias cc='cd /mnt/other-home/.config/'\n");
    assert!(!home.path(".config/shell/aliasrc").exists());
}

#[test]
fn non_utf8_alias_file_is_overwritten() {
    let (home, settings) = setup("!ll ls -la", "");
    home.dir(".config/shell");
    fs::write(home.path(".config/shell/aliasrc"), b"# caf\xe9\n").unwrap();

    Generator::new(&OsFilesystem, &settings)
        .run(GenerateOptions::default())
        .unwrap();

    assert_eq!(home.read(".config/shell/aliasrc"), "alias ll='ls -la'\n");
}

#[test]
fn non_utf8_lf_lines_are_preserved() {
    let (home, settings) = setup("c .config/", "");
    let root = home.root_str();
    fs::write(home.path(".config/lf/lfrc"), b"# caf\xe9\nset hidden\n").unwrap();

    Generator::new(&OsFilesystem, &settings)
        .run(GenerateOptions::default())
        .unwrap();

    let mut expected = b"# caf\xe9\nset hidden\n".to_vec();
    expected.extend_from_slice(
        format!("{START_MARKER}\n\nmap gc cd {root}/.config/\n\n{END_MARKER}\n").as_bytes(),
    );
    assert_eq!(fs::read(home.path(".config/lf/lfrc")).unwrap(), expected);
}
