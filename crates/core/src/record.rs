// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration history records and run status.
//!
//! `Status` is the process-scoped snapshot of the persisted status store:
//! whether the remote store has been provisioned, plus a map of migration
//! name to applied record. It is fetched once per run invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Applied-state record for a single migration, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub name: String,
    pub migrated: bool,
    /// When the forward operation last completed. `None` when the record
    /// marks a rolled-back migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
}

impl MigrationRecord {
    pub fn new(name: impl Into<String>, migrated: bool, applied_at: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            migrated,
            applied_at,
        }
    }
}

/// Snapshot of the persisted status store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Whether the remote store has been provisioned. Gates all forward runs.
    #[serde(default)]
    pub installed: bool,
    /// Migration name -> applied record. BTreeMap keeps history in lexical
    /// (i.e. chronological-by-convention) order.
    #[serde(default)]
    pub history: BTreeMap<String, MigrationRecord>,
}

impl Status {
    /// True when `name` has a history record marked migrated.
    pub fn is_migrated(&self, name: &str) -> bool {
        self.history.get(name).is_some_and(|r| r.migrated)
    }

    /// Upsert a record for `name`.
    pub fn upsert(&mut self, record: MigrationRecord) {
        self.history.insert(record.name.clone(), record);
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
