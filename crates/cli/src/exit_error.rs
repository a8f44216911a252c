// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type carrying a process exit code.
//!
//! Commands that have already printed their own message return this with
//! an empty Display so `main` exits non-zero without printing twice.

use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
}

impl ExitError {
    pub fn new(code: i32) -> Self {
        Self { code }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl std::error::Error for ExitError {}
