// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-file-backed status store.
//!
//! Writes are atomic (write to .tmp, sync, rename) so a crash mid-write
//! never corrupts the status file. A missing file reads as the default
//! uninstalled status.

use crate::{StatusError, StatusStore};
use async_trait::async_trait;
use evo_core::{Clock, MigrationRecord, Status, SystemClock};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct FileStatusStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileStatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock, for deterministic `applied_at` values in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Status, StatusError> {
        if !self.path.exists() {
            return Ok(Status::default());
        }
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Save atomically (write to .tmp, then rename).
    fn write(&self, status: &Status) -> Result<(), StatusError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, status)?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl StatusStore for FileStatusStore {
    async fn fetch(&self) -> Result<Status, StatusError> {
        self.read()
    }

    async fn record(&self, name: &str, migrated: bool) -> Result<(), StatusError> {
        let mut status = self.read()?;
        let applied_at = migrated.then(|| self.clock.now());
        status.upsert(MigrationRecord::new(name, migrated, applied_at));
        self.write(&status)?;
        tracing::debug!(name = %name, migrated, "recorded migration status");
        Ok(())
    }

    async fn install(&self) -> Result<(), StatusError> {
        let mut status = self.read()?;
        status.installed = true;
        self.write(&status)
    }

    async fn uninstall(&self) -> Result<(), StatusError> {
        self.write(&Status::default())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
