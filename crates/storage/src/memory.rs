// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory status store for tests and embedding.

use crate::{StatusError, StatusStore};
use async_trait::async_trait;
use chrono::Utc;
use evo_core::{MigrationRecord, Status};
use parking_lot::Mutex;

#[derive(Default)]
pub struct MemoryStatusStore {
    status: Mutex<Status>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start installed, with an empty history.
    pub fn installed() -> Self {
        let store = Self::new();
        store.status.lock().installed = true;
        store
    }

    /// Seed a migrated history record.
    pub fn with_migrated(self, name: &str) -> Self {
        self.status
            .lock()
            .upsert(MigrationRecord::new(name, true, Some(Utc::now())));
        self
    }

    /// Snapshot the current status without going through `fetch`.
    pub fn snapshot(&self) -> Status {
        self.status.lock().clone()
    }
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn fetch(&self) -> Result<Status, StatusError> {
        Ok(self.status.lock().clone())
    }

    async fn record(&self, name: &str, migrated: bool) -> Result<(), StatusError> {
        let applied_at = migrated.then(Utc::now);
        self.status
            .lock()
            .upsert(MigrationRecord::new(name, migrated, applied_at));
        Ok(())
    }

    async fn install(&self) -> Result<(), StatusError> {
        self.status.lock().installed = true;
        Ok(())
    }

    async fn uninstall(&self) -> Result<(), StatusError> {
        *self.status.lock() = Status::default();
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
