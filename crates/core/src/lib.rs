// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! evo-core: Core library for the Evolve (evo) migration tool

pub mod clock;
pub mod options;
pub mod record;

pub use clock::{Clock, FakeClock, SystemClock};
pub use options::{FailurePolicy, RollbackOptions, RunOptions};
pub use record::{MigrationRecord, Status};
