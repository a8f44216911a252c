// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evo migrate` specs

use crate::prelude::*;
use tempfile::tempdir;

#[test]
fn migrate_applies_pending_scripts_in_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));
    write_script(root, "003_c.toml", &basic_script("003_c"));

    evo(root).arg("install").assert().success();

    let assert = evo(root).arg("migrate").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("Migrating 001_a"));
    assert!(out.contains("Migrating 002_b"));
    assert!(out.contains("Migrating 003_c"));
    assert!(out.contains("Applied 3 migration(s)"));
    // Ordered output
    let a = out.find("Migrating 001_a").unwrap();
    let b = out.find("Migrating 002_b").unwrap();
    let c = out.find("Migrating 003_c").unwrap();
    assert!(a < b && b < c);

    let status = read_status(root);
    assert!(is_migrated(&status, "001_a"));
    assert!(is_migrated(&status, "002_b"));
    assert!(is_migrated(&status, "003_c"));
}

#[test]
fn migrate_skips_already_migrated_scripts() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));

    evo(root).arg("install").assert().success();
    evo(root)
        .args(["migrate", "--only", "001_a"])
        .assert()
        .success();

    let assert = evo(root).arg("migrate").assert().success();
    let out = stdout_of(&assert);
    assert!(!out.contains("Migrating 001_a"));
    assert!(out.contains("Migrating 002_b"));
}

#[test]
fn migrate_to_halts_after_target() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));
    write_script(root, "003_c.toml", &basic_script("003_c"));

    evo(root).arg("install").assert().success();
    evo(root)
        .args(["migrate", "--to", "002_b"])
        .assert()
        .success();

    let status = read_status(root);
    assert!(is_migrated(&status, "001_a"));
    assert!(is_migrated(&status, "002_b"));
    assert!(status["history"].get("003_c").is_none());
}

#[test]
fn migrate_step_caps_the_run() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", &basic_script("002_b"));
    write_script(root, "003_c.toml", &basic_script("003_c"));

    evo(root).arg("install").assert().success();
    let assert = evo(root)
        .args(["migrate", "--step", "2"])
        .assert()
        .success();
    assert!(stdout_of(&assert).contains("Applied 2 migration(s)"));

    let status = read_status(root);
    assert!(status["history"].get("003_c").is_none());
}

#[test]
fn migrate_without_scripts_warns_and_fails() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("migrations")).unwrap();

    evo(root).arg("install").assert().success();
    let assert = evo(root).arg("migrate").assert().failure();
    assert!(stdout_of(&assert).contains("no migration scripts found"));
}

#[test]
fn migrate_when_up_to_date_warns_and_fails() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));

    evo(root).arg("install").assert().success();
    evo(root).arg("migrate").assert().success();

    let assert = evo(root).arg("migrate").assert().failure();
    assert!(stdout_of(&assert).contains("up to date"));
}

#[test]
fn migrate_requires_install() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));

    let assert = evo(root).arg("migrate").assert().failure();
    assert!(stderr_of(&assert).contains("not installed"));
}

#[test]
fn migrate_rejects_unknown_target() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));

    evo(root).arg("install").assert().success();
    let assert = evo(root)
        .args(["migrate", "--to", "999_nope"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("migration not found: 999_nope"));
}

#[test]
fn malformed_script_aborts_with_nothing_applied() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));
    write_script(root, "002_b.toml", "[[up]\naction = broken");

    evo(root).arg("install").assert().success();
    let assert = evo(root).arg("migrate").assert().failure();
    assert!(stderr_of(&assert).contains("malformed migration '002_b'"));

    // 001_a loaded fine but must not have been applied
    let status = read_status(root);
    assert!(status["history"].get("001_a").is_none());
}

#[test]
fn force_reapplies_migrated_scripts() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_script(root, "001_a.toml", &basic_script("001_a"));

    evo(root).arg("install").assert().success();
    evo(root).arg("migrate").assert().success();

    let assert = evo(root).args(["migrate", "--force"]).assert().success();
    assert!(stdout_of(&assert).contains("Applied 1 migration(s)"));
}
