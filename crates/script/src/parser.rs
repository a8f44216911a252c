// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration script parsing (TOML and JSON)

use crate::MigrationDefinition;
use std::path::Path;
use thiserror::Error;

/// Script file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

/// Errors that can occur during script parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse script content in the given format.
pub fn parse_script(content: &str, format: Format) -> Result<MigrationDefinition, ParseError> {
    match format {
        Format::Toml => Ok(toml::from_str(content)?),
        Format::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Format for a script path, by extension. `None` for files that are not
/// migration scripts.
pub(crate) fn format_for_path(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
