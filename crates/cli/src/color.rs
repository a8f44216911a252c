// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if std::env::var_os("COLOR").is_some_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: &str, text: &str) -> String {
    if should_colorize() {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn warning(text: &str) -> String {
    paint(YELLOW, text)
}

pub fn error(text: &str) -> String {
    paint(RED, text)
}

pub fn success(text: &str) -> String {
    paint(GREEN, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
