// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `arev show` command.

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
fn shows_item_details() {
    let temp = init_temp();
    arev()
        .args([
            "new",
            "improvement",
            "Add caching",
            "--resolves",
            "issue-1",
            "--description",
            "Cache the artifact index",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    arev()
        .args(["show", "improvement-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("improvement-1: Add caching"))
        .stdout(predicate::str::contains("status:   proposed"))
        .stdout(predicate::str::contains("resolves: issue-1"))
        .stdout(predicate::str::contains("Cache the artifact index"));
}

#[test]
fn json_output_carries_the_full_record() {
    let temp = init_temp();
    arev()
        .args(["new", "risk", "Vendor lock-in", "--ticket", "ARCH-3"])
        .current_dir(temp.path())
        .assert()
        .success();

    let assert = arev()
        .args(["show", "risk-1", "--output", "json"])
        .current_dir(temp.path())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["id"], "risk-1");
    assert_eq!(json["ticket"], "ARCH-3");
    assert_eq!(json["status"], "current");
}

#[test]
fn unknown_item_fails() {
    let temp = init_temp();

    arev()
        .args(["show", "issue-9"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found: issue-9"));
}

#[test]
fn malformed_id_fails_before_any_lookup() {
    let temp = init_temp();

    arev()
        .args(["show", "issue-01"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid item id"));
}
