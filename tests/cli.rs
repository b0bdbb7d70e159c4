//! CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TREE: &str = r#"{"title":"Root","children":[{"title":"Site","uri":"https://x.test"}]}"#;

fn cmd() -> Command {
    Command::cargo_bin("ff-bookmarks").unwrap()
}

#[test]
fn test_converts_to_default_output_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bookmarks.json");
    fs::write(&input, TREE).unwrap();

    cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing JSON bookmark file"))
        .stdout(predicate::str::contains("Successfully converted bookmarks to"));

    let html = fs::read_to_string(dir.path().join("bookmarks.html")).unwrap();
    assert!(html.contains("<H1>Root</H1>"));
    assert!(html.contains(r#"<DT><A HREF="https://x.test">Site</A>"#));
}

#[test]
fn test_explicit_output_and_compressed_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("backup.jsonlz4");
    let output = dir.path().join("out.html");

    let mut bytes = b"mozLz4\0\0".to_vec();
    bytes.extend_from_slice(&(TREE.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&lz4_flex::block::compress(TREE.as_bytes()));
    fs::write(&input, bytes).unwrap();

    cmd()
        .arg("-o")
        .arg(&output)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing Firefox jsonlz4 bookmark backup"));

    assert!(fs::read_to_string(&output).unwrap().contains("Site"));
    assert!(!dir.path().join("backup.html").exists());
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    cmd()
        .arg(dir.path().join("nope.jsonlz4"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_unsupported_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "not bookmarks").unwrap();

    cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid Firefox bookmark backup file"));
    assert!(!dir.path().join("notes.html").exists());
}

#[test]
fn test_buffer_ceiling_flag() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("backup.jsonlz4");
    let mut bytes = b"mozLz4\0\0".to_vec();
    bytes.extend_from_slice(&(TREE.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&lz4_flex::block::compress(TREE.as_bytes()));
    fs::write(&input, bytes).unwrap();

    cmd()
        .arg("--max-size")
        .arg("16")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("LZ4 decompression error"));
}

#[test]
fn test_format_reported_before_decoding() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("corrupt.jsonlz4");
    fs::write(&input, b"mozLz4\0\0\0\0\0\0\xF0\xFF\xFF\xFF").unwrap();

    cmd()
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Processing Firefox jsonlz4 bookmark backup"))
        .stdout(predicate::str::contains("Converting").not())
        .stderr(predicate::str::contains("LZ4 decompression error"));
}

#[test]
fn test_requires_input() {
    cmd().assert().failure();
}
