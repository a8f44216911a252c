// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation run options.
//!
//! Selection options interact with a fixed precedence: `only` wins over
//! everything and produces a singleton queue; `to` marks a halt target
//! without shrinking the candidate set; `step` caps how many unskipped
//! entries enter the queue.

use serde::{Deserialize, Serialize};

/// What the runner does when a remote operation reports failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Fail the run before the step's history write.
    #[default]
    Stop,
    /// Log the failure, record the step, and keep draining the queue.
    Continue,
}

/// Options for a forward migration run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Halt after this migration completes.
    pub to: Option<String>,
    /// Run exactly this migration, bypassing history filtering.
    pub only: Option<String>,
    /// Cap on unskipped entries added to the queue. Must be >= 1 when set.
    pub step: Option<usize>,
    /// Re-apply migrations already marked migrated.
    pub force: bool,
    pub on_failure: FailurePolicy,
}

/// Options for a rollback run. Rollback never filters against history, so
/// there is no `force`.
#[derive(Debug, Clone, Default)]
pub struct RollbackOptions {
    /// Halt after this migration's reverse operation completes.
    pub to: Option<String>,
    /// Roll back exactly this migration.
    pub only: Option<String>,
    pub on_failure: FailurePolicy,
}
