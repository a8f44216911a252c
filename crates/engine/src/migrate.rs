// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forward migration runner.
//!
//! Discovers scripts, filters them against persisted history and the
//! selection options, builds an ordered queue, and drives it one entry at
//! a time. Selection precedence: `only` wins and bypasses filtering; `to`
//! marks a halt target without shrinking the candidate set; `step` caps
//! the number of unskipped entries queued.
//!
//! The whole plan is validated up front: any script load failure aborts
//! the run before the first operation executes.

use crate::bus::{StepOutcome, TaskBus};
use crate::client::RemoteClient;
use crate::error::RunError;
use crate::migration::Migration;
use crate::report::Reporter;
use evo_core::{FailurePolicy, RunOptions};
use evo_script::{normalize_name, MigrationSource, ScriptEntry};
use evo_storage::StatusStore;
use std::collections::VecDeque;
use std::sync::Arc;

/// What a run accomplished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Migrations recorded in execution order.
    pub completed: Vec<String>,
    /// Entries that resolved as deliberate no-op skips.
    pub skipped: Vec<String>,
    /// Set when the run stopped at a `to` target with entries left behind.
    pub halted_at: Option<String>,
}

struct QueueEntry {
    name: String,
    migration: Migration,
}

/// Per-invocation forward runner. Construct fresh for every run; all queue
/// and halt state lives here, nothing is shared across invocations.
pub struct MigrationRunner<'a> {
    source: &'a dyn MigrationSource,
    store: &'a dyn StatusStore,
    client: Arc<dyn RemoteClient>,
    reporter: &'a dyn Reporter,
    options: RunOptions,
}

impl<'a> MigrationRunner<'a> {
    pub fn new(
        source: &'a dyn MigrationSource,
        store: &'a dyn StatusStore,
        client: Arc<dyn RemoteClient>,
        reporter: &'a dyn Reporter,
        options: RunOptions,
    ) -> Self {
        Self {
            source,
            store,
            client,
            reporter,
            options,
        }
    }

    /// Run pending migrations.
    pub async fn run(self) -> Result<RunReport, RunError> {
        let entries = self.source.scripts()?;
        if entries.is_empty() {
            return Err(RunError::NoMigrations);
        }

        let exists = |name: &str| entries.iter().any(|e| e.name == name);

        // `only` takes precedence over everything else and bypasses both
        // history filtering and the step cap.
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
            if self.options.step == Some(0) {
                return Err(RunError::InvalidStep);
            }
            entries
        };
        let bypass_filter = self.options.only.is_some();

        let status = self.store.fetch().await?;
        if !status.installed {
            return Err(RunError::NotInstalled);
        }

        // Build the queue in ascending discovery order. Loads happen here,
        // before any execution, so a malformed script anywhere in the plan
        // aborts the run with nothing applied.
        let mut queue: VecDeque<QueueEntry> = VecDeque::new();
        for entry in candidates {
            if !bypass_filter {
                if !self.options.force && status.is_migrated(&entry.name) {
                    continue;
                }
                if let Some(cap) = self.options.step {
                    if queue.len() >= cap {
                        break;
                    }
                }
            }
            let definition = self.source.load(&entry.name)?;
            let migration = Migration::new(&entry.name, definition, Arc::clone(&self.client));
            queue.push_back(QueueEntry {
                name: entry.name,
                migration,
            });
        }

        if queue.is_empty() {
            return Err(RunError::UpToDate);
        }

        self.drive(queue, target).await
    }

    /// Sequentially drain the queue, recording history after each success.
    async fn drive(
        &self,
        mut queue: VecDeque<QueueEntry>,
        target: Option<String>,
    ) -> Result<RunReport, RunError> {
        let bus = TaskBus::new();
        let mut report = RunReport::default();

        while let Some(entry) = queue.pop_front() {
            tracing::info!(name = %entry.name, "migration begin");
            self.reporter.info(&format!("Migrating {}", entry.name));
            self.reporter.indent();

            let outcome = entry.migration.run(&bus, false).await;
            match outcome {
                StepOutcome::Failed(message) => match self.options.on_failure {
                    FailurePolicy::Stop => {
                        self.reporter.error(&message);
                        self.reporter.outdent();
                        return Err(RunError::StepFailed {
                            name: entry.name,
                            message,
                        });
                    }
                    FailurePolicy::Continue => {
                        tracing::warn!(name = %entry.name, error = %message, "migration failed, continuing");
                        self.reporter.warning(&message);
                        self.store.record(&entry.name, true).await?;
                        report.completed.push(entry.name.clone());
                    }
                },
                StepOutcome::Skipped => {
                    self.reporter.info("No forward operation defined");
                    self.store.record(&entry.name, true).await?;
                    report.skipped.push(entry.name.clone());
                    report.completed.push(entry.name.clone());
                }
                StepOutcome::Completed => {
                    self.store.record(&entry.name, true).await?;
                    report.completed.push(entry.name.clone());
                }
            }

            self.reporter.outdent();
            tracing::info!(name = %entry.name, "migration end");

            // Halt after the target; remaining entries are left for a
            // future run.
            if target.as_deref() == Some(entry.name.as_str()) {
                if !queue.is_empty() {
                    report.halted_at = Some(entry.name);
                }
                break;
            }
        }

        self.reporter.info("Migration complete");
        Ok(report)
    }
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
