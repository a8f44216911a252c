// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! evo-engine: migration and rollback orchestration.
//!
//! The engine discovers change scripts, decides which are pending against
//! the persisted status store, and drives them one at a time through a
//! single-flight task bus. All state is per-invocation; nothing survives a
//! run except what the status store persists.

mod bus;
mod client;
mod error;
mod migrate;
mod migration;
mod report;
mod rollback;

pub use bus::{StepOutcome, TaskBus};
pub use client::{DryRunClient, RemoteClient, RemoteError};
pub use error::RunError;
pub use migrate::{MigrationRunner, RunReport};
pub use migration::Migration;
pub use report::{NullReporter, Reporter};
pub use rollback::RollbackRunner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use client::RecordingClient;
#[cfg(any(test, feature = "test-support"))]
pub use report::RecordingReporter;
