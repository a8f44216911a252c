// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command handlers

pub mod migrate;
pub mod rollback;
pub mod setup;
pub mod status;

use std::path::{Path, PathBuf};

/// Migrations directory for a project root.
pub fn migrations_dir(root: &Path) -> PathBuf {
    root.join("migrations")
}

/// Status file for a project root.
pub fn status_path(root: &Path) -> PathBuf {
    root.join(".evo").join("status.json")
}
