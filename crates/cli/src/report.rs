// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console reporter: leveled, indented progress output for runs.

use crate::color;
use evo_engine::Reporter;
use parking_lot::Mutex;

/// Prints engine progress to stdout/stderr with two-space indentation
/// per scope.
#[derive(Default)]
pub struct ConsoleReporter {
    depth: Mutex<usize>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn prefix(&self) -> String {
        "  ".repeat(*self.depth.lock())
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{}{}", self.prefix(), message);
    }

    fn warning(&self, message: &str) {
        println!("{}{}", self.prefix(), color::warning(message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}{}", self.prefix(), color::error(message));
    }

    fn indent(&self) {
        *self.depth.lock() += 1;
    }

    fn outdent(&self) {
        let mut depth = self.depth.lock();
        *depth = depth.saturating_sub(1);
    }
}
