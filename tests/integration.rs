// Integration tests for the intake CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the intake binary.
fn intake() -> Command {
    Command::cargo_bin("intake").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    intake()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("intake"));
}

#[test]
fn cli_help_flag() {
    intake()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Startup intake scoring"));
}

#[test]
fn auto_requires_pitch() {
    intake()
        .arg("auto")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn batch_requires_file() {
    intake()
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_out_of_range_ratings() {
    intake()
        .args(["score", "--tech", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in 1..=5"));
}

#[test]
fn score_rejects_out_of_range_market_size() {
    intake()
        .args(["score", "--market-size", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--market-size"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    intake()
        .args(["-q", "-v", "weights"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
