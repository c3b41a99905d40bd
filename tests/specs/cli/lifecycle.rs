// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for item lifecycle commands: `status`, `resolve`, `delete`.

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

fn show_json(temp: &TempDir, id: &str) -> serde_json::Value {
    let assert = arev()
        .args(["show", id, "--output", "json"])
        .current_dir(temp.path())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn status_updates_and_persists() {
    let temp = init_temp();
    arev()
        .args(["new", "issue", "Slow deploys"])
        .current_dir(temp.path())
        .assert()
        .success();

    arev()
        .args(["status", "issue-1", "resolved"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated issue-1: status -> resolved"));

    assert_eq!(show_json(&temp, "issue-1")["status"], "resolved");
}

#[test]
fn status_rejects_values_from_another_kind() {
    let temp = init_temp();
    arev()
        .args(["new", "issue", "Slow deploys"])
        .current_dir(temp.path())
        .assert()
        .success();

    arev()
        .args(["status", "issue-1", "mitigated"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("status: must be one of"));

    // The failed edit must not be persisted.
    assert_eq!(show_json(&temp, "issue-1")["status"], "current");
}

#[test]
fn resolve_appends_without_duplicates() {
    let temp = init_temp();
    for args in [
        vec!["new", "issue", "Slow deploys"],
        vec!["new", "risk", "Vendor lock-in"],
        vec!["new", "improvement", "Add caching", "--resolves", "issue-1"],
    ] {
        arev().args(&args).current_dir(temp.path()).assert().success();
    }

    arev()
        .args(["resolve", "improvement-1", "issue-1", "risk-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated improvement-1: resolves"));

    assert_eq!(
        show_json(&temp, "improvement-1")["resolves"],
        serde_json::json!(["issue-1", "risk-1"])
    );
}

#[test]
fn resolve_requires_an_improvement_id() {
    let temp = init_temp();
    arev()
        .args(["new", "issue", "Slow deploys"])
        .current_dir(temp.path())
        .assert()
        .success();

    arev()
        .args(["resolve", "issue-1", "issue-1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an 'improvement' id"));
}

#[test]
fn resolve_rejects_improvement_targets() {
    let temp = init_temp();
    for args in [
        vec!["new", "issue", "Slow deploys"],
        vec!["new", "improvement", "Add caching", "--resolves", "issue-1"],
        vec!["new", "improvement", "Speed up CI", "--resolves", "issue-1"],
    ] {
        arev().args(&args).current_dir(temp.path()).assert().success();
    }

    arev()
        .args(["resolve", "improvement-1", "improvement-2"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("resolves[1]"));
}

#[test]
fn edits_refresh_the_modified_timestamp() {
    let temp = init_temp();
    arev()
        .args(["new", "issue", "Slow deploys"])
        .current_dir(temp.path())
        .assert()
        .success();

    // Backdate the stored timestamps, then edit.
    let path = temp.path().join("issues").join("issue-1.yaml");
    let yaml = std::fs::read_to_string(&path).unwrap();
    let backdated: String = yaml
        .lines()
        .map(|line| {
            if line.starts_with("created:") || line.starts_with("modified:") {
                let key = line.split(':').next().unwrap();
                format!("{key}: 2020-01-01T00:00:00Z\n")
            } else {
                format!("{line}\n")
            }
        })
        .collect();
    std::fs::write(&path, backdated).unwrap();

    arev()
        .args(["status", "issue-1", "resolved"])
        .current_dir(temp.path())
        .assert()
        .success();

    let json = show_json(&temp, "issue-1");
    assert_eq!(json["created"], "2020-01-01T00:00:00Z");
    assert_ne!(json["modified"], "2020-01-01T00:00:00Z");
}

#[test]
fn delete_removes_the_item() {
    let temp = init_temp();
    arev()
        .args(["new", "issue", "Slow deploys"])
        .current_dir(temp.path())
        .assert()
        .success();

    arev()
        .args(["delete", "issue-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted issue-1"));

    assert!(!temp.path().join("issues").join("issue-1.yaml").exists());

    arev()
        .args(["delete", "issue-1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found: issue-1"));
}
