//! End-to-end tests for the `propset` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn propset() -> Command {
    let mut cmd = Command::cargo_bin("propset").unwrap();
    // Keep assertions stable regardless of the test environment's terminal.
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    propset()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("propset"))
        .stdout(predicate::str::contains("apply"));
}

#[test]
fn version_flag_matches_cargo() {
    propset()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn apply_from_scratch_writes_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("new.properties");

    propset()
        .args([
            "apply",
            "-o",
            out.to_str().unwrap(),
            "-s",
            "key1=val1",
            "-s",
            "key2=val2",
            "-s",
            "key3=val3",
            "-c",
            "key2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "key1=val1\n#key2=val2\nkey3=val3\n"
    );
}

#[test]
fn apply_edits_existing_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("app.properties");
    fs::write(&file, "key1=val1\n#key2=val2\nkey3=val3\n").unwrap();

    let path = file.to_str().unwrap();
    propset()
        .args([
            "apply", "-i", path, "-o", path, "-c", "key2", "-u", "key1", "-r", "key3", "-s",
            "another.key=anotherValue",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "key1=val1\n#key2=val2\nanother.key=anotherValue\n"
    );
}

#[test]
fn apply_same_request_twice_reports_unchanged() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("app.properties");
    fs::write(&file, "key1=val1\n").unwrap();

    let path = file.to_str().unwrap();
    let args = ["apply", "-i", path, "-o", path, "-s", "key2=val2"];

    propset()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    propset()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged"));
}

#[test]
fn malformed_input_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bad.properties");
    fs::write(&file, "malformed_line_without_equals\n").unwrap();
    let out = temp.path().join("out.properties");

    propset()
        .args([
            "apply",
            "-i",
            file.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "-s",
            "key1=val1",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no '=' separator"));

    // No partial output.
    assert!(!out.exists());
}

#[test]
fn from_scratch_without_upserts_is_rejected() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.properties");

    propset()
        .args(["apply", "-o", out.to_str().unwrap(), "-r", "key1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at least one upsert"));

    assert!(!out.exists());
}

#[test]
fn missing_input_file_exits_not_found() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.properties");

    propset()
        .args([
            "apply",
            "-i",
            "/definitely/not/here.properties",
            "-o",
            out.to_str().unwrap(),
            "-s",
            "key1=val1",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn bad_set_pair_is_rejected_by_clap() {
    propset()
        .args(["apply", "-o", "out.properties", "-s", "no-delimiter"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.properties");

    propset()
        .args([
            "apply",
            "-o",
            out.to_str().unwrap(),
            "-s",
            "key1=val1",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("key1=val1"));

    assert!(!out.exists());
}

#[test]
fn show_lists_entries() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("app.properties");
    fs::write(&file, "key1=val1\n#key2=val2\n").unwrap();

    propset()
        .args(["show", "-i", file.to_str().unwrap(), "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("key1=val1"))
        .stdout(predicate::str::contains("#key2=val2"));
}

#[test]
fn show_active_only_filters_commented() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("app.properties");
    fs::write(&file, "key1=val1\n#key2=val2\n").unwrap();

    propset()
        .args([
            "show",
            "-i",
            file.to_str().unwrap(),
            "--format",
            "list",
            "--active-only",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("key1=val1"))
        .stdout(predicate::str::contains("key2").not());
}

#[test]
fn show_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("app.properties");
    fs::write(&file, "key1=val1\n").unwrap();

    let assert = propset()
        .args(["show", "-i", file.to_str().unwrap(), "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["key"], "key1");
    assert_eq!(parsed[0]["commented"], false);
}

#[test]
fn quiet_flag_suppresses_status_output() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.properties");

    propset()
        .args(["-q", "apply", "-o", out.to_str().unwrap(), "-s", "key1=val1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(out.exists());
}

#[test]
fn shell_completions_generate() {
    propset()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("propset"));
}
