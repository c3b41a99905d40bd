// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `arev list` command.

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

fn seed(temp: &TempDir) {
    for args in [
        vec!["new", "issue", "Slow deploys"],
        vec!["new", "issue", "Flaky tests", "--status", "resolved"],
        vec!["new", "risk", "Vendor lock-in", "--tag", "platform"],
        vec!["new", "improvement", "Add caching", "--resolves", "issue-1"],
    ] {
        arev().args(&args).current_dir(temp.path()).assert().success();
    }
}

#[test]
fn lists_every_kind_by_default() {
    let temp = init_temp();
    seed(&temp);

    let stdout = stdout_of(arev().arg("list").current_dir(temp.path()));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    // Kinds are grouped, sequences ascending within a kind.
    assert!(lines[0].starts_with("issue-1"));
    assert!(lines[1].starts_with("issue-2"));
    assert!(lines[2].starts_with("risk-1"));
    assert!(lines[3].starts_with("improvement-1"));
    assert!(lines[2].contains("[platform]"));
}

#[test]
fn restricts_to_a_kind() {
    let temp = init_temp();
    seed(&temp);

    let stdout = stdout_of(arev().args(["list", "risk"]).current_dir(temp.path()));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Vendor lock-in"));
}

#[test]
fn filters_by_status() {
    let temp = init_temp();
    seed(&temp);

    let stdout = stdout_of(
        arev()
            .args(["list", "issue", "--status", "resolved"])
            .current_dir(temp.path()),
    );
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Flaky tests"));
}

#[test]
fn ids_output_prints_bare_ids() {
    let temp = init_temp();
    seed(&temp);

    let stdout = stdout_of(
        arev()
            .args(["list", "issue", "--output", "ids"])
            .current_dir(temp.path()),
    );
    assert_eq!(stdout, "issue-1\nissue-2\n");
}

#[test]
fn json_output_is_an_array_of_items() {
    let temp = init_temp();
    seed(&temp);

    let stdout = stdout_of(arev().args(["list", "--output", "json"]).current_dir(temp.path()));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["id"], "issue-1");
    assert_eq!(items[3]["kind"], "improvement");
}

#[test]
fn empty_workspace_lists_nothing() {
    let temp = init_temp();

    arev()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}
