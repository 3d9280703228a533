//! End to end tests for the reqver binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn reqver_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_reqver"))
}

/// Run reqver inside `dir` so no reqver.toml from the checkout is picked up
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(reqver_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_parse_text() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["parse", "1.4.0-beta.2+exp"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("major:   1"));
    assert!(text.contains("pre:     beta.2"));
    assert!(text.contains("build:   exp"));
}

#[test]
fn test_parse_json() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["--format", "json", "parse", "2.0.1"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["version"], "2.0.1");
    assert_eq!(json["minor"], 0);
}

#[test]
fn test_parse_invalid_version_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["parse", "1.02.3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not parse version"));
    assert!(stderr.contains("1.02.3"));
}

#[test]
fn test_compare() {
    let dir = TempDir::new().unwrap();
    assert_eq!(stdout(&run_in(dir.path(), &["compare", "1.0.0-alpha", "1.0.0"])), "lt");
    assert_eq!(stdout(&run_in(dir.path(), &["compare", "1.0.0+a", "1.0.0+b"])), "eq");
    assert_eq!(stdout(&run_in(dir.path(), &["compare", "1.10.0", "1.9.0"])), "gt");
}

#[test]
fn test_match_exit_codes() {
    let dir = TempDir::new().unwrap();

    let matched = run_in(dir.path(), &["match", "2.1.6", "~> 2.1.2"]);
    assert_eq!(matched.status.code(), Some(0));
    assert_eq!(stdout(&matched), "true");

    let unmatched = run_in(dir.path(), &["match", "2.2.0", "~> 2.1.2"]);
    assert_eq!(unmatched.status.code(), Some(1));
    assert_eq!(stdout(&unmatched), "false");
}

#[test]
fn test_match_deprecated_operator_warns() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["match", "1.0.1", "!= 1.0.0"]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("deprecated"));
}

#[test]
fn test_config_excludes_pre_releases() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("reqver.toml"), "[match]\nallow_pre = false\n").unwrap();

    let excluded = run_in(dir.path(), &["match", "1.1.0-rc.1", ">= 1.0.0"]);
    assert_eq!(excluded.status.code(), Some(1));

    let flag_wins = run_in(dir.path(), &["match", "1.1.0-rc.1", ">= 1.0.0", "--allow-pre"]);
    assert_eq!(flag_wins.status.code(), Some(0));
}

#[test]
fn test_filter() {
    let dir = TempDir::new().unwrap();
    let output = run_in(
        dir.path(),
        &["filter", ">= 1.0.0 and < 2.0.0", "0.9.0", "1.0.0", "1.5.2", "2.0.0", "--no-pre"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.0.0\n1.5.2");
}

#[test]
fn test_sort_and_reverse() {
    let dir = TempDir::new().unwrap();
    let versions = ["1.0.0", "1.0.0-rc.1", "0.9.9", "1.0.0-alpha"];

    let mut args = vec!["sort"];
    args.extend(versions);
    assert_eq!(
        stdout(&run_in(dir.path(), &args)),
        "0.9.9\n1.0.0-alpha\n1.0.0-rc.1\n1.0.0"
    );

    args.push("--reverse");
    assert_eq!(
        stdout(&run_in(dir.path(), &args)),
        "1.0.0\n1.0.0-rc.1\n1.0.0-alpha\n0.9.9"
    );
}

#[test]
fn test_sort_rejects_invalid_version() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["sort", "1.0.0", "nope"]);
    assert!(!output.status.success());
}
