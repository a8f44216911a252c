// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! evo-storage: persisted migration status

mod file;
mod memory;
mod status;

pub use file::FileStatusStore;
pub use memory::MemoryStatusStore;
pub use status::{StatusError, StatusStore};
