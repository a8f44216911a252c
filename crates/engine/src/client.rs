// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote client collaborator.
//!
//! Scripts describe actions; executing them against the actual remote
//! content store (including connection and auth) is this collaborator's
//! job, not the engine's.

use async_trait::async_trait;
use evo_script::Action;
use thiserror::Error;

/// Errors from remote operations
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{0}")]
    Failed(String),
}

/// Executes one declarative action against the remote content store.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn execute(&self, migration: &str, action: &Action) -> Result<(), RemoteError>;
}

/// Client that logs each action instead of executing it.
///
/// The default for the shipped binary: connection setup to a real remote
/// store is delegated to embedders, who supply their own [`RemoteClient`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunClient;

#[async_trait]
impl RemoteClient for DryRunClient {
    async fn execute(&self, migration: &str, action: &Action) -> Result<(), RemoteError> {
        tracing::info!(migration = %migration, action = %action.action, "dry-run action");
        Ok(())
    }
}

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::RecordingClient;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::*;
    use parking_lot::Mutex;

    /// Records every executed action; optionally fails named actions.
    #[derive(Default)]
    pub struct RecordingClient {
        calls: Mutex<Vec<(String, String)>>,
        fail_actions: Mutex<Vec<String>>,
    }

    impl RecordingClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every action with this tag fail.
        pub fn fail_action(self, action: &str) -> Self {
            self.fail_actions.lock().push(action.to_string());
            self
        }

        /// `(migration, action)` pairs in execution order.
        pub fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().clone()
        }

        /// Migration names in execution order, deduplicated per step.
        pub fn migrations_run(&self) -> Vec<String> {
            let calls = self.calls.lock();
            let mut names: Vec<String> = Vec::new();
            for (migration, _) in calls.iter() {
                if names.last() != Some(migration) {
                    names.push(migration.clone());
                }
            }
            names
        }
    }

    #[async_trait]
    impl RemoteClient for RecordingClient {
        async fn execute(&self, migration: &str, action: &Action) -> Result<(), RemoteError> {
            self.calls
                .lock()
                .push((migration.to_string(), action.action.clone()));
            if self.fail_actions.lock().contains(&action.action) {
                return Err(RemoteError::Failed(format!(
                    "action '{}' rejected by remote",
                    action.action
                )));
            }
            Ok(())
        }
    }
}
