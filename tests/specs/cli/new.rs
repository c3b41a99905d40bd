// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `arev new` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn arev() -> Command {
    cargo_bin_cmd!("arev")
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    arev().arg("init").current_dir(temp.path()).assert().success();
    temp
}

#[test]
fn creates_an_issue_with_defaults() {
    let temp = init_temp();

    arev()
        .args(["new", "issue", "Slow deploys"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created issue-1: Slow deploys"));

    let yaml =
        std::fs::read_to_string(temp.path().join("issues").join("issue-1.yaml")).unwrap();
    assert!(yaml.contains("title: Slow deploys"));
    assert!(yaml.contains("status: current"));
    assert!(yaml.contains("created:"));
    assert!(yaml.contains("modified:"));
}

#[test]
fn sequence_numbers_increment_per_kind() {
    let temp = init_temp();

    for title in ["First", "Second"] {
        arev()
            .args(["new", "issue", title])
            .current_dir(temp.path())
            .assert()
            .success();
    }
    arev()
        .args(["new", "risk", "Vendor lock-in"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created risk-1"));

    assert!(temp.path().join("issues").join("issue-2.yaml").exists());
}

#[test]
fn json_output_includes_applied_defaults() {
    let temp = init_temp();

    let assert = arev()
        .args([
            "new",
            "improvement",
            "Add caching",
            "--resolves",
            "issue-1",
            "--output",
            "json",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["id"], "improvement-1");
    assert_eq!(json["kind"], "improvement");
    assert_eq!(json["status"], "proposed");
    assert_eq!(json["resolves"], serde_json::json!(["issue-1"]));
}

#[test]
fn improvement_without_resolves_fails() {
    let temp = init_temp();

    arev()
        .args(["new", "improvement", "Add caching"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("resolves"));
}

#[test]
fn invalid_status_is_reported_per_field() {
    let temp = init_temp();

    arev()
        .args(["new", "issue", "t", "--status", "mitigated"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("status: must be one of"));
}

#[test]
fn relation_flags_are_kind_checked() {
    let temp = init_temp();

    arev()
        .args(["new", "issue", "t", "--resolves", "issue-1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--resolves"));
}

#[test]
fn malformed_caused_by_id_fails() {
    let temp = init_temp();

    arev()
        .args(["new", "risk", "t", "--caused-by", "issue-01"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("causedBy[0]"));
}

#[test]
fn unknown_kind_fails() {
    let temp = init_temp();

    arev()
        .args(["new", "bug", "t"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid item kind"));
}
