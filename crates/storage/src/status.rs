// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status store contract.
//!
//! The store persists whether the remote content store has been provisioned
//! and a history of applied migrations. `record` resolves only once the
//! record is durable; the runner relies on this to stay resumable across
//! process invocations.

use async_trait::async_trait;
use evo_core::Status;
use thiserror::Error;

/// Errors from status store operations
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted record of installation state and migration history.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Fetch the current status snapshot.
    async fn fetch(&self) -> Result<Status, StatusError>;

    /// Upsert one history record. Durable on return.
    async fn record(&self, name: &str, migrated: bool) -> Result<(), StatusError>;

    /// Mark the remote store as provisioned. Idempotent.
    async fn install(&self) -> Result<(), StatusError>;

    /// Clear provisioning state and history.
    async fn uninstall(&self) -> Result<(), StatusError>;
}
