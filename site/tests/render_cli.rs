//! End-to-end tests for the `majorem-render` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample preview states shipped with the repo.
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../demos")
}

/// Command for the renderer, run from `dir` so no stray `majorem.toml` is picked up.
fn majorem_render(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("majorem-render");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("rendered file")
}

#[test]
fn creates_nested_output_directories() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out/a/index.html");

    majorem_render(tmp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = read(&out);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Our Powerful Tools"));
}

#[test]
fn bad_state_file_exits_with_error_chain() {
    let tmp = TempDir::new().unwrap();
    let state = tmp.path().join("bad.json");
    fs::write(&state, r#"{"open_demo":"x"}"#).unwrap();
    let out = tmp.path().join("index.html");

    majorem_render(tmp.path())
        .arg("--state")
        .arg(&state)
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid state file"))
        .stderr(predicate::str::contains("invalid preview state"))
        .stderr(predicate::str::contains("unknown variant"));

    assert!(!out.exists());
}

#[test]
fn missing_state_file_fails() {
    let tmp = TempDir::new().unwrap();

    majorem_render(tmp.path())
        .args(["--state", "nope.json", "--out", "index.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read state file"));
}

#[test]
fn demo_flag_opens_modal() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("sentiment.html");

    majorem_render(tmp.path())
        .args(["--demo", "sentiment-analysis", "--out"])
        .arg(&out)
        .assert()
        .success();

    let html = read(&out);
    assert!(html.contains("Sentiment Analysis Demo"));
    assert!(html.contains("Analyze Sentiment"));
    assert!(!html.contains("Clean Address"));
}

#[test]
fn demo_flag_overrides_state_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("index.html");

    majorem_render(tmp.path())
        .arg("--state")
        .arg(demos_path().join("address.json"))
        .args(["--demo", "sentiment-analysis", "--out"])
        .arg(&out)
        .assert()
        .success();

    let html = read(&out);
    assert!(html.contains("Sentiment Analysis Demo"));
    assert!(!html.contains("Cleaned Address:"));
}

#[test]
fn unknown_demo_is_rejected() {
    let tmp = TempDir::new().unwrap();

    majorem_render(tmp.path())
        .args(["--demo", "fuzzy-matching"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown demo"));
}

#[test]
fn same_seed_renders_identical_html() {
    let tmp = TempDir::new().unwrap();
    let state = demos_path().join("sentiment.json");
    let first = tmp.path().join("first.html");
    let second = tmp.path().join("second.html");

    for out in [&first, &second] {
        majorem_render(tmp.path())
            .arg("--state")
            .arg(&state)
            .args(["--seed", "7", "--out"])
            .arg(out)
            .assert()
            .success();
    }

    let html = read(&first);
    assert!(html.contains("Analysis Result:"));
    assert!(html.contains("sentiment-badge sentiment-"));
    assert_eq!(html, read(&second));
}

#[test]
fn config_file_sets_branding() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("majorem.toml"), "brand = \"Acme Data\"\n").unwrap();
    let out = tmp.path().join("index.html");

    majorem_render(tmp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    assert!(read(&out).contains("<title>Acme Data - Data Tools for Growing Businesses</title>"));
}

#[test]
fn explicit_config_must_exist() {
    let tmp = TempDir::new().unwrap();

    majorem_render(tmp.path())
        .args(["--config", "missing.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config file not found"));
}
