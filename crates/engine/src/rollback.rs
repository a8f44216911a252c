// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rollback runner.
//!
//! Mirrors the forward runner with the order reversed and the reverse
//! operation invoked. Discovery is unconditional: every script is a
//! candidate regardless of history, so the most recent-by-convention
//! script is rolled back first. A successful reverse step records
//! `migrated = false` so history stays consistent with the remote store;
//! a skipped step (no reverse operation defined) leaves history untouched.

use crate::bus::{StepOutcome, TaskBus};
use crate::client::RemoteClient;
use crate::error::RunError;
use crate::migrate::RunReport;
use crate::migration::Migration;
use crate::report::Reporter;
use evo_core::{FailurePolicy, RollbackOptions};
use evo_script::{normalize_name, MigrationSource, ScriptEntry};
use evo_storage::StatusStore;
use std::collections::VecDeque;
use std::sync::Arc;

/// Per-invocation rollback runner.
pub struct RollbackRunner<'a> {
    source: &'a dyn MigrationSource,
    store: &'a dyn StatusStore,
    client: Arc<dyn RemoteClient>,
    reporter: &'a dyn Reporter,
    options: RollbackOptions,
}

impl<'a> RollbackRunner<'a> {
    pub fn new(
        source: &'a dyn MigrationSource,
        store: &'a dyn StatusStore,
        client: Arc<dyn RemoteClient>,
        reporter: &'a dyn Reporter,
        options: RollbackOptions,
    ) -> Self {
        Self {
            source,
            store,
            client,
            reporter,
            options,
        }
    }

    /// Roll back applied migrations in reverse discovery order.
    pub async fn run(self) -> Result<RunReport, RunError> {
        let mut entries = self.source.scripts()?;
        if entries.is_empty() {
            return Err(RunError::NoMigrations);
        }
        entries.reverse();

        let exists = |name: &str| entries.iter().any(|e| e.name == name);

        let mut target: Option<String> = None;
        let candidates: Vec<ScriptEntry> = if let Some(only) = &self.options.only {
            let only = normalize_name(only);
            if !exists(&only) {
                return Err(RunError::UnknownScript(only));
            }
            vec![ScriptEntry { name: only }]
        } else {
            if let Some(to) = &self.options.to {
                let to = normalize_name(to);
                if !exists(&to) {
                    return Err(RunError::UnknownScript(to));
                }
                target = Some(to);
            }
            entries
        };

        // Validate the whole plan before executing any of it.
        let mut queue: VecDeque<(String, Migration)> = VecDeque::new();
        for entry in candidates {
            let definition = self.source.load(&entry.name)?;
            let migration = Migration::new(&entry.name, definition, Arc::clone(&self.client));
            queue.push_back((entry.name, migration));
        }

        let bus = TaskBus::new();
        let mut report = RunReport::default();

        while let Some((name, migration)) = queue.pop_front() {
            tracing::info!(name = %name, "rollback begin");
            self.reporter.info(&format!("Rolling back {name}"));
            self.reporter.indent();

            let outcome = migration.run(&bus, true).await;
            match outcome {
                StepOutcome::Failed(message) => match self.options.on_failure {
                    FailurePolicy::Stop => {
                        self.reporter.error(&message);
                        self.reporter.outdent();
                        return Err(RunError::StepFailed { name, message });
                    }
                    FailurePolicy::Continue => {
                        tracing::warn!(name = %name, error = %message, "rollback failed, continuing");
                        // Effect on the remote store is unknown, so the
                        // history record is left alone.
                        self.reporter.warning(&message);
                    }
                },
                StepOutcome::Skipped => {
                    self.reporter.info("No reverse operation defined");
                    report.skipped.push(name.clone());
                }
                StepOutcome::Completed => {
                    self.store.record(&name, false).await?;
                    report.completed.push(name.clone());
                }
            }

            self.reporter.outdent();
            tracing::info!(name = %name, "rollback end");

            if target.as_deref() == Some(name.as_str()) {
                if !queue.is_empty() {
                    report.halted_at = Some(name);
                }
                break;
            }
        }

        self.reporter.info("Rollback complete");
        Ok(report)
    }
}

#[cfg(test)]
#[path = "rollback_tests.rs"]
mod tests;
