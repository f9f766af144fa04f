//! Tests for the real filesystem implementation

use bm_fs::{EntryKind, Error, Filesystem, OsFilesystem};
use std::fs;
use tempfile::TempDir;

#[test]
fn entry_kind_classifies_directory_and_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".config")).unwrap();
    fs::write(temp.path().join("notes.txt"), "x").unwrap();

    let fs = OsFilesystem::new();
    assert_eq!(
        fs.entry_kind(&temp.path().join(".config")).unwrap(),
        EntryKind::Directory
    );
    assert_eq!(
        fs.entry_kind(&temp.path().join("notes.txt")).unwrap(),
        EntryKind::File
    );
}

#[test]
fn entry_kind_missing_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result = OsFilesystem.entry_kind(&temp.path().join("varr"));

    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn write_bytes_truncates_longer_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lfrc");
    fs::write(&path, "a much longer original body\n").unwrap();

    OsFilesystem.write_bytes(&path, b"short\n").unwrap();

    assert_eq!(OsFilesystem.read_text(&path).unwrap(), "short\n");
}

#[test]
fn write_bytes_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    OsFilesystem
        .write_bytes(&temp.path().join("aliasrc"), b"alias a='b'\n")
        .unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
}

#[test]
fn io_error_display_includes_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone");
    let err = OsFilesystem.read_text(&missing).unwrap_err();

    assert!(err.to_string().contains("gone"), "got: {}", err);
}

#[test]
fn read_text_rejects_invalid_utf8_but_bytes_survive() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lfrc");
    fs::write(&path, b"# caf\xe9\n").unwrap();

    assert!(matches!(
        OsFilesystem.read_text(&path),
        Err(Error::InvalidUtf8 { .. })
    ));
    assert_eq!(OsFilesystem.read_bytes(&path).unwrap(), b"# caf\xe9\n");
}
