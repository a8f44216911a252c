// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evo install` / `evo uninstall` - provision the status store

use super::status_path;
use anyhow::Result;
use evo_storage::{FileStatusStore, StatusStore};
use std::path::Path;

pub async fn install(root: &Path) -> Result<()> {
    let store = FileStatusStore::new(status_path(root));
    store.install().await?;
    println!("{}", crate::color::success("Installed"));
    Ok(())
}

pub async fn uninstall(root: &Path) -> Result<()> {
    let store = FileStatusStore::new(status_path(root));
    store.uninstall().await?;
    println!("{}", crate::color::success("Uninstalled"));
    Ok(())
}
