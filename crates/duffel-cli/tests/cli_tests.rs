//! Integration tests for duffel-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn duffel_cmd() -> Command {
    cargo_bin_cmd!("duffel")
}

/// Builds a small source tree with a file, a nested file, and an empty
/// directory.
fn build_sample_tree(base: &Path) -> std::path::PathBuf {
    let root = base.join("tree");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("data.txt"), "hello").unwrap();
    fs::create_dir(root.join("empty")).unwrap();
    fs::create_dir(root.join("logs")).unwrap();
    fs::write(root.join("logs/app.log"), "log line").unwrap();
    root
}

#[test]
fn test_version_flag() {
    duffel_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("duffel"));
}

#[test]
fn test_help_flag() {
    duffel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_pack_help() {
    duffel_cmd()
        .arg("pack")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pack files and directories"));
}

#[test]
fn test_pack_creates_container() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = build_sample_tree(temp.path());
    let archive = temp.path().join("tree.duf");

    duffel_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Container created"));

    assert!(archive.exists());
}

#[test]
fn test_pack_then_list_shows_entries() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = build_sample_tree(temp.path());
    let archive = temp.path().join("tree.duf");

    duffel_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(&root)
        .assert()
        .success();

    duffel_cmd()
        .arg("list")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("data.txt"))
        .stdout(predicate::str::contains("empty"))
        .stdout(predicate::str::contains("app.log"));
}

#[test]
fn test_pack_then_unpack_restores_files() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = build_sample_tree(temp.path());
    let archive = temp.path().join("tree.duf");
    let dest = temp.path().join("restored");
    fs::create_dir(&dest).unwrap();

    duffel_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(&root)
        .assert()
        .success();

    duffel_cmd()
        .arg("unpack")
        .arg(&archive)
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction complete"));

    assert_eq!(
        fs::read_to_string(dest.join("tree/data.txt")).unwrap(),
        "hello"
    );
    assert_eq!(
        fs::read_to_string(dest.join("tree/logs/app.log")).unwrap(),
        "log line"
    );
    assert!(dest.join("tree/empty").is_dir());
}

#[test]
fn test_unpack_with_keyword_filters_entries() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = build_sample_tree(temp.path());
    let archive = temp.path().join("tree.duf");
    let dest = temp.path().join("filtered");
    fs::create_dir(&dest).unwrap();

    duffel_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(&root)
        .assert()
        .success();

    duffel_cmd()
        .arg("unpack")
        .arg(&archive)
        .arg(&dest)
        .arg("--keyword")
        .arg("logs")
        .assert()
        .success();

    assert!(dest.join("tree/logs/app.log").is_file());
    assert!(!dest.join("tree/data.txt").exists());
}

#[test]
fn test_comments_command_shows_comment() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = build_sample_tree(temp.path());
    let archive = temp.path().join("tree.duf");

    duffel_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(&root)
        .arg("--comment")
        .arg("release 1.0")
        .assert()
        .success();

    duffel_cmd()
        .arg("comments")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("release 1.0"));
}

#[test]
fn test_pack_json_output_format() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = build_sample_tree(temp.path());
    let archive = temp.path().join("tree.duf");

    let output = duffel_cmd()
        .arg("pack")
        .arg("--json")
        .arg(&archive)
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "pack");
    assert_eq!(json["data"]["files_packed"], 2);
    assert_eq!(json["data"]["empty_directories"], 1);
}

#[test]
fn test_list_json_output_format() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = build_sample_tree(temp.path());
    let archive = temp.path().join("tree.duf");

    duffel_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(&root)
        .assert()
        .success();

    let output = duffel_cmd()
        .arg("list")
        .arg("--json")
        .arg(&archive)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["operation"], "list");
    assert_eq!(json["data"]["count"], 3);
}

#[test]
fn test_list_missing_archive_fails() {
    duffel_cmd()
        .arg("list")
        .arg("/nonexistent/archive.duf")
        .assert()
        .failure();
}

#[test]
fn test_pack_missing_source_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("out.duf");

    duffel_cmd()
        .arg("pack")
        .arg(&archive)
        .arg("/nonexistent/source")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source not found"));
}
