// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! End-to-end CLI tests for the seedling binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn seedling() -> Command {
    Command::cargo_bin("seedling").expect("binary builds")
}

#[test]
fn post_gen_dry_run_prints_base_plan() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("seedling.json"),
        r#"{"package_name": "demo"}"#,
    )
    .unwrap();

    seedling()
        .current_dir(dir.path())
        .args(["post-gen", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Execution plan (8 tasks)"))
        .stdout(predicate::str::contains("Initialize repository"))
        .stdout(predicate::str::contains("Create remote repository").not());
}

#[test]
fn post_gen_dry_run_with_remote_flag_appends_tasks() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("seedling.json"),
        r#"{"package_name": "demo", "github_username": "alice", "create_remote": "yes"}"#,
    )
    .unwrap();

    seedling()
        .current_dir(dir.path())
        .args(["post-gen", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Execution plan (10 tasks)"))
        .stdout(predicate::str::contains("Create remote repository"))
        .stdout(predicate::str::contains("Push initial commit"));
}

#[test]
fn post_gen_without_context_fails() {
    let dir = tempfile::tempdir().unwrap();

    seedling()
        .current_dir(dir.path())
        .args(["post-gen", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("seedling.json"));
}

#[test]
fn cleanup_strips_placeholder_lines() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("module.py");
    std::fs::write(&file, "#\nimport os\n#\n").unwrap();

    seedling()
        .current_dir(dir.path())
        .args(["cleanup", "*.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 placeholder lines"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "import os\n");
}
