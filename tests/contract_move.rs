//! Contract tests for the move operation, run against whichever platform
//! backend the build selected.

use std::fs;
use std::path::Path;

use file_bridge::{MoveOutcome, move_file};

fn s(p: &Path) -> &str {
    p.to_str().expect("temp paths are UTF-8")
}

#[test]
fn move_happy_path() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempfile::tempdir()?;
    let src = td.path().join("a.txt");
    let dst = td.path().join("moved").join("a.txt");
    fs::write(&src, b"file bridge test content\n")?;
    fs::create_dir_all(dst.parent().unwrap())?;

    let outcome = move_file(s(&src), s(&dst)).expect("move should succeed");

    // Same filesystem, so the rename path is taken.
    assert_eq!(outcome, MoveOutcome::Renamed);
    assert!(!src.exists(), "source should be removed");
    assert_eq!(fs::read(&dst)?, b"file bridge test content\n");
    Ok(())
}

#[test]
fn move_creates_missing_parents() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempfile::tempdir()?;
    let src = td.path().join("a.txt");
    let dst = td.path().join("deep").join("er").join("a.txt");
    fs::write(&src, b"x")?;

    move_file(s(&src), s(&dst)).expect("parents should be created");

    assert!(dst.exists());
    assert!(!src.exists());
    Ok(())
}

#[test]
fn move_overwrites_existing_destination() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempfile::tempdir()?;
    let src = td.path().join("new.txt");
    let dst = td.path().join("old.txt");
    fs::write(&src, b"replacement")?;
    fs::write(&dst, b"prior destination content")?;

    move_file(s(&src), s(&dst)).expect("overwrite move should succeed");

    assert!(!src.exists());
    assert_eq!(fs::read(&dst)?, b"replacement");
    Ok(())
}

#[test]
fn move_missing_source_reports_contract_error() {
    let td = tempfile::tempdir().unwrap();
    let src = td.path().join("absent.txt");
    let dst = td.path().join("out.txt");

    let err = move_file(s(&src), s(&dst)).unwrap_err();

    assert_eq!(err.to_string(), "Source file does not exist");
    assert!(!dst.exists(), "no destination should appear");
}

#[test]
fn move_source_directory_rejected() {
    let td = tempfile::tempdir().unwrap();
    let src_dir = td.path().join("folder");
    fs::create_dir(&src_dir).unwrap();

    let err = move_file(s(&src_dir), s(&td.path().join("out"))).unwrap_err();

    assert_eq!(err.to_string(), "Source is not a file");
    assert!(src_dir.exists(), "source directory must be untouched");
}

#[test]
fn move_empty_params_report_in_order() {
    let err = move_file("", "/tmp/out.txt").unwrap_err();
    assert_eq!(err.to_string(), "'from' parameter is required");

    let err = move_file("/tmp/in.txt", "").unwrap_err();
    assert_eq!(err.to_string(), "'to' parameter is required");

    // Empty `from` wins over empty `to`.
    let err = move_file("", "").unwrap_err();
    assert_eq!(err.to_string(), "'from' parameter is required");
}

#[test]
fn move_validation_precedes_source_checks() {
    // `to` is validated before the source is ever touched, so a nonexistent
    // source still reports the missing parameter first.
    let err = move_file("/definitely/not/there.txt", "").unwrap_err();
    assert_eq!(err.to_string(), "'to' parameter is required");
}
