// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for migration runs

use evo_script::{LoadError, SourceError};
use evo_storage::StatusError;
use thiserror::Error;

/// Errors that can occur in a migration or rollback run
#[derive(Debug, Error)]
pub enum RunError {
    /// No scripts in the migrations directory at all.
    #[error("no migration scripts found")]
    NoMigrations,
    /// `--to` or `--only` referenced a script that does not exist.
    #[error("migration not found: {0}")]
    UnknownScript(String),
    /// `--step` must be a positive integer.
    #[error("step must be a positive integer")]
    InvalidStep,
    /// The remote store has not been provisioned.
    #[error("remote store is not installed; run install first")]
    NotInstalled,
    /// Every candidate was filtered out by history.
    #[error("nothing to migrate; already up to date")]
    UpToDate,
    /// A remote operation failed under the stop-on-failure policy.
    #[error("migration '{name}' failed: {message}")]
    StepFailed { name: String, message: String },
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Status(#[from] StatusError),
}
