// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evo rollback` specs

use crate::prelude::*;
use tempfile::tempdir;

#[test]
fn rollback_runs_in_reverse_order_and_clears_history() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));
    write_script(root, "003_c.toml", &basic_script("003_c"));

    evo(root).arg("install").assert().success();
    evo(root).arg("migrate").assert().success();

    let assert = evo(root).arg("rollback").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("Rolled back 3 migration(s)"));
    let c = out.find("Rolling back 003_c").unwrap();
    let b = out.find("Rolling back 002_b").unwrap();
    let a = out.find("Rolling back 001_a").unwrap();
    assert!(c < b && b < a);

    let status = read_status(root);
    assert!(!is_migrated(&status, "001_a"));
    assert!(!is_migrated(&status, "002_b"));
    assert!(!is_migrated(&status, "003_c"));
    // Records stay in history with migrated cleared
    assert!(status["history"].get("001_a").is_some());
}

#[test]
fn rollback_ignores_history_state() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));

    evo(root).arg("install").assert().success();

    // Nothing was ever migrated; rollback still visits every script.
    let assert = evo(root).arg("rollback").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("Rolling back 002_b"));
    assert!(out.contains("Rolling back 001_a"));
}

#[test]
fn rollback_to_halts_after_target() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));
    write_script(root, "003_c.toml", &basic_script("003_c"));

    evo(root).arg("install").assert().success();
    evo(root).arg("migrate").assert().success();
    evo(root)
        .args(["rollback", "--to", "002_b"])
        .assert()
        .success();

    let status = read_status(root);
    assert!(is_migrated(&status, "001_a"));
    assert!(!is_migrated(&status, "002_b"));
    assert!(!is_migrated(&status, "003_c"));
}

#[test]
fn rollback_only_targets_one_script() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));

    evo(root).arg("install").assert().success();
    evo(root).arg("migrate").assert().success();
    evo(root)
        .args(["rollback", "--only", "001_a"])
        .assert()
        .success();

    let status = read_status(root);
    assert!(!is_migrated(&status, "001_a"));
    assert!(is_migrated(&status, "002_b"));
}

#[test]
fn rollback_skips_scripts_without_reverse_operation() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", "[[up]]\naction = \"up-001_a\"\n");

    evo(root).arg("install").assert().success();
    evo(root).arg("migrate").assert().success();

    let assert = evo(root).arg("rollback").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("No reverse operation defined"));
    assert!(out.contains("Rolled back 0 migration(s)"));

    // A skip leaves the history record alone.
    let status = read_status(root);
    assert!(is_migrated(&status, "001_a"));
}

#[test]
fn rollback_without_scripts_warns_and_fails() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("migrations")).unwrap();

    evo(root).arg("install").assert().success();
    let assert = evo(root).arg("rollback").assert().failure();
    assert!(stdout_of(&assert).contains("no migration scripts found"));
}

#[test]
fn rollback_rejects_unknown_target() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));

    evo(root).arg("install").assert().success();
    let assert = evo(root)
        .args(["rollback", "--only", "999_nope"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("migration not found: 999_nope"));
}
