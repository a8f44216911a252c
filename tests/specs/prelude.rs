// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Build an `evo` command rooted at `root`.
pub fn evo(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("evo").unwrap();
    cmd.current_dir(root).arg("--root").arg(root);
    cmd
}

/// Write a migration script file under `<root>/migrations/`.
pub fn write_script(root: &Path, file: &str, content: &str) {
    let dir = root.join("migrations");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

/// A minimal valid script with one up and one down action.
pub fn basic_script(name: &str) -> String {
    format!("[[up]]\naction = \"up-{name}\"\n\n[[down]]\naction = \"down-{name}\"\n")
}

/// Parse `<root>/.evo/status.json`.
pub fn read_status(root: &Path) -> serde_json::Value {
    let content = fs::read_to_string(root.join(".evo").join("status.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// True when the history marks `name` as migrated.
pub fn is_migrated(status: &serde_json::Value, name: &str) -> bool {
    status["history"][name]["migrated"].as_bool() == Some(true)
}

pub fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

pub fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).to_string()
}
