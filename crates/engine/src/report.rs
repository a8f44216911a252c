// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing progress reporting collaborator.
//!
//! Leveled messages plus nested indentation scopes bracketing each
//! migration step. Localization and formatting live in the implementation;
//! the engine hands over literal strings.

/// Receives leveled progress messages from a run.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);

    /// Open an indentation scope. Balanced by `outdent`.
    fn indent(&self) {}
    fn outdent(&self) {}
}

/// Discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::RecordingReporter;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Reporter;
    use parking_lot::Mutex;

    /// Captures messages with their level and indentation depth.
    #[derive(Default)]
    pub struct RecordingReporter {
        lines: Mutex<Vec<(&'static str, usize, String)>>,
        depth: Mutex<usize>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lines(&self) -> Vec<(&'static str, usize, String)> {
            self.lines.lock().clone()
        }

        fn push(&self, level: &'static str, message: &str) {
            let depth = *self.depth.lock();
            self.lines.lock().push((level, depth, message.to_string()));
        }
    }

    impl Reporter for RecordingReporter {
        fn info(&self, message: &str) {
            self.push("info", message);
        }
        fn warning(&self, message: &str) {
            self.push("warning", message);
        }
        fn error(&self, message: &str) {
            self.push("error", message);
        }
        fn indent(&self) {
            *self.depth.lock() += 1;
        }
        fn outdent(&self) {
            let mut depth = self.depth.lock();
            *depth = depth.saturating_sub(1);
        }
    }
}
