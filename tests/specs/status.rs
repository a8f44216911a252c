// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evo status` / `evo install` / `evo uninstall` specs

use crate::prelude::*;
use tempfile::tempdir;

#[test]
fn status_reports_uninstalled_with_no_history() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let assert = evo(root).arg("status").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("Installed: no"));
    assert!(out.contains("No migration history"));
}

#[test]
fn install_provisions_the_status_store() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let assert = evo(root).arg("install").assert().success();
    assert!(stdout_of(&assert).contains("Installed"));
    assert!(root.join(".evo").join("status.json").is_file());

    let assert = evo(root).arg("status").assert().success();
    assert!(stdout_of(&assert).contains("Installed: yes"));
}

#[test]
fn install_is_idempotent() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));

    evo(root).arg("install").assert().success();
    evo(root).arg("migrate").assert().success();
    evo(root).arg("install").assert().success();

    // Re-installing must not wipe history.
    let status = read_status(root);
    assert!(is_migrated(&status, "001_a"));
}

#[test]
fn uninstall_clears_state_and_history() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));

    evo(root).arg("install").assert().success();
    evo(root).arg("migrate").assert().success();

    let assert = evo(root).arg("uninstall").assert().success();
    assert!(stdout_of(&assert).contains("Uninstalled"));

    let assert = evo(root).arg("status").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("Installed: no"));
    assert!(out.contains("No migration history"));
}

#[test]
fn status_renders_a_history_table() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));

    evo(root).arg("install").assert().success();
    evo(root)
        .args(["migrate", "--only", "001_a"])
        .assert()
        .success();
    evo(root).arg("migrate").assert().success();
    evo(root)
        .args(["rollback", "--only", "002_b"])
        .assert()
        .success();

    let assert = evo(root).arg("status").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("NAME"));
    assert!(out.contains("MIGRATED"));
    assert!(out.contains("APPLIED AT"));

    let row_a = out.lines().find(|l| l.starts_with("001_a")).unwrap();
    assert!(row_a.contains("yes"));
    assert!(row_a.contains("UTC"));

    let row_b = out.lines().find(|l| l.starts_with("002_b")).unwrap();
    assert!(row_b.contains("no"));
}
