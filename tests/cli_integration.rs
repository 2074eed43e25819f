//! Integration tests for the `ttdo` binary.
//!
//! The TUI needs a terminal, so these drive the non-interactive surface:
//! `--print`, argument handling, and config errors. Each test runs in its
//! own temp directory with an isolated config home.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `ttdo` binary.
fn ttdo_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ttdo");
    path
}

/// Run `ttdo` with the given args in the given directory, returning (stdout, stderr, success).
fn run_ttdo(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(ttdo_bin())
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("TTDO_LOG")
        .output()
        .expect("failed to run ttdo");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `ttdo` expecting success, return stdout.
fn run_ttdo_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_ttdo(dir, args);
    if !success {
        panic!(
            "ttdo {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

const GROCERIES: &str = "\
# groceries

- [ ] Buy milk
  - [x] 2% or whole
- [ ] Eggs
";

#[test]
fn test_print_named_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("groceries.ttdo"), GROCERIES).unwrap();

    let out = run_ttdo_ok(tmp.path(), &["--print", "groceries"]);
    assert_eq!(
        out,
        "Tasks: groceries\n\n  [ ] Buy milk\n      [x] 2% or whole\n  [ ] Eggs\n"
    );
}

#[test]
fn test_print_accepts_extension() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("groceries.ttdo"), GROCERIES).unwrap();

    let out = run_ttdo_ok(tmp.path(), &["--print", "groceries.ttdo"]);
    assert!(out.starts_with("Tasks: groceries\n"));
    assert!(out.contains("Eggs"));
}

#[test]
fn test_print_with_dir_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    let lists = tmp.path().join("lists");
    fs::create_dir_all(&lists).unwrap();
    fs::write(lists.join("groceries.ttdo"), GROCERIES).unwrap();

    let out = run_ttdo_ok(tmp.path(), &["--print", "-C", lists.to_str().unwrap(), "groceries"]);
    assert!(out.contains("Buy milk"));
}

#[test]
fn test_print_missing_list_writes_nothing() {
    let tmp = tempfile::TempDir::new().unwrap();

    let out = run_ttdo_ok(tmp.path(), &["--print", "nothing-here"]);
    assert_eq!(out, "Tasks: nothing-here\n");
    assert!(!tmp.path().join("nothing-here.ttdo").exists());
}

#[test]
fn test_print_defaults_to_today() {
    let tmp = tempfile::TempDir::new().unwrap();
    let today = chrono::Local::now().date_naive().format("%m-%d-%Y").to_string();
    fs::write(
        tmp.path().join(format!("{}.ttdo", today)),
        "- [ ] Today's thing\n",
    )
    .unwrap();

    let out = run_ttdo_ok(tmp.path(), &["--print"]);
    assert_eq!(out, format!("Tasks: {}\n\n  [ ] Today's thing\n", today));
}

#[test]
fn test_print_legacy_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("old.ttdo"),
        r#"{"Tasks":["A","B"],"Completed":{"0":{}},"IndentationLevels":[0,1]}"#,
    )
    .unwrap();

    let out = run_ttdo_ok(tmp.path(), &["--print", "old"]);
    assert_eq!(out, "Tasks: old\n\n  [x] A\n      [ ] B\n");
}

#[test]
fn test_print_warns_about_damaged_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("mixed.ttdo"), "- [ ] Kept\ngarbage\n").unwrap();

    let (stdout, stderr, success) = run_ttdo(tmp.path(), &["--print", "mixed"]);
    assert!(success);
    assert!(stdout.contains("Kept"));
    assert!(stderr.contains("skipped 1 unreadable line"));
}

#[test]
fn test_print_uses_configured_indent_width() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("groceries.ttdo"), GROCERIES).unwrap();
    let config = tmp.path().join("custom.toml");
    fs::write(&config, "[ui]\nindent_width = 2\n").unwrap();

    let out = run_ttdo_ok(
        tmp.path(),
        &["--print", "--config", config.to_str().unwrap(), "groceries"],
    );
    assert!(out.contains("\n    [x] 2% or whole\n"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config_dir = tmp.path().join(".config/ttdo");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[editor]\njump = 0\n").unwrap();

    let (_, stderr, success) = run_ttdo(tmp.path(), &["--print"]);
    assert!(!success);
    assert!(stderr.starts_with("error: invalid value for editor.jump"));
}

#[test]
fn test_rapid_and_single_conflict() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, _, success) = run_ttdo(tmp.path(), &["--print", "--rapid", "--single"]);
    assert!(!success);
}

#[test]
fn test_log_file_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    let log = tmp.path().join("ttdo.log");
    fs::write(tmp.path().join("groceries.ttdo"), GROCERIES).unwrap();

    run_ttdo_ok(
        tmp.path(),
        &["--print", "--log-file", log.to_str().unwrap(), "groceries"],
    );
    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("list loaded"));
}
