// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `arev init` command.

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

#[test]
fn creates_config_and_readme() {
    let temp = TempDir::new().unwrap();

    arev()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized arev workspace"));

    assert!(temp.path().join("arev.yaml").exists());
    assert!(temp.path().join("README.md").exists());

    let config = std::fs::read_to_string(temp.path().join("arev.yaml")).unwrap();
    assert!(config.contains("version: 1"));
}

#[test]
fn init_is_idempotent() {
    let temp = TempDir::new().unwrap();
    arev().arg("init").current_dir(temp.path()).assert().success();

    std::fs::write(temp.path().join("README.md"), "my notes").unwrap();
    arev().arg("init").current_dir(temp.path()).assert().success();

    let readme = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert_eq!(readme, "my notes");
}

#[test]
fn path_argument_initializes_elsewhere() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("review");

    arev()
        .arg("init")
        .arg(&target)
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(target.join("arev.yaml").exists());
}

#[test]
fn debug_logging_is_opt_in_via_rust_log() {
    let temp = TempDir::new().unwrap();
    arev()
        .arg("init")
        .env("RUST_LOG", "debug")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("initialized workspace"));

    // Without the variable the command stays quiet.
    let temp = TempDir::new().unwrap();
    arev()
        .arg("init")
        .env_remove("RUST_LOG")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn commands_fail_without_init() {
    let temp = TempDir::new().unwrap();

    arev()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}
