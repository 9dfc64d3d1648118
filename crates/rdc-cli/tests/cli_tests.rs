//! CLI argument handling tests
//!
//! These exercise argument parsing and the guard rails that fail before any
//! network or database connection is attempted.

use assert_cmd::Command;
use predicates::prelude::*;

fn rdc() -> Command {
    Command::cargo_bin("rdc").expect("rdc binary builds")
}

#[test]
fn test_no_args_shows_help() {
    rdc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    rdc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("tables"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("drop"));
}

#[test]
fn test_drop_requires_tables() {
    rdc()
        .args(["drop", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_drop_refuses_without_yes() {
    rdc()
        .args(["drop", "dim_store_details"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_run_rejects_unknown_dataset() {
    rdc()
        .args(["run", "--only", "widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("widgets"));
}

#[test]
fn test_run_reports_missing_config() {
    rdc()
        .args(["run", "--config", "/nonexistent/config.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
