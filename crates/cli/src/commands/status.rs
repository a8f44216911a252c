// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evo status` - show installation state and migration history

use super::status_path;
use crate::table::Table;
use anyhow::Result;
use evo_storage::{FileStatusStore, StatusStore};
use std::path::Path;

pub async fn handle(root: &Path) -> Result<()> {
    let store = FileStatusStore::new(status_path(root));
    let status = store.fetch().await?;

    println!(
        "Installed: {}",
        if status.installed { "yes" } else { "no" }
    );

    if status.history.is_empty() {
        println!("No migration history");
        return Ok(());
    }

    println!();
    let mut table = Table::new(vec!["NAME", "MIGRATED", "APPLIED AT"]);
    for record in status.history.values() {
        table.row(vec![
            record.name.clone(),
            if record.migrated { "yes" } else { "no" }.to_string(),
            record
                .applied_at
                .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
