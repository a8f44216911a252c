// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration script discovery.
//!
//! A `MigrationSource` yields an ordered list of script names and loads
//! definitions on demand. Load failures are typed results inspected by the
//! runner, which aborts a run before any execution when one appears.

use crate::parser::{format_for_path, parse_script, Format, ParseError};
use crate::MigrationDefinition;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from script discovery
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors from loading a single script
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read migration '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed migration '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },
    #[error("malformed migration '{name}': {message}")]
    Malformed { name: String, message: String },
    #[error("migration '{name}' not found")]
    NotFound { name: String },
}

/// A discovered script: canonical name (file stem) in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub name: String,
}

/// Ordered source of migration scripts.
///
/// `scripts()` returns entries in ascending lexical name order; callers are
/// expected to prefix names so that lexical order equals chronological order.
pub trait MigrationSource: Send + Sync {
    fn scripts(&self) -> Result<Vec<ScriptEntry>, SourceError>;
    fn load(&self, name: &str) -> Result<MigrationDefinition, LoadError>;
}

/// Strip a recognized script extension from a user-supplied name, so
/// `--to 002_b.toml` and `--to 002_b` refer to the same migration.
pub fn normalize_name(name: &str) -> String {
    let path = Path::new(name);
    match format_for_path(path) {
        Some(_) => path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name)
            .to_string(),
        None => name.to_string(),
    }
}

/// Filesystem-backed source scanning a flat migrations directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the on-disk path for `name`, trying TOML before JSON.
    fn path_for(&self, name: &str) -> Option<(PathBuf, Format)> {
        for (ext, format) in [("toml", Format::Toml), ("json", Format::Json)] {
            let path = self.dir.join(format!("{name}.{ext}"));
            if path.is_file() {
                return Some((path, format));
            }
        }
        None
    }
}

impl MigrationSource for DirectorySource {
    fn scripts(&self) -> Result<Vec<ScriptEntry>, SourceError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = Vec::new();
        for entry in std::fs::read_dir(&self.dir)?.flatten() {
            let path = entry.path();
            if !path.is_file() || format_for_path(&path).is_none() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            names.push(stem.to_string());
        }
        names.sort();
        names.dedup_by(|b, a| {
            if a == b {
                tracing::warn!(name = %a, "duplicate migration name, keeping first format");
                true
            } else {
                false
            }
        });
        Ok(names.into_iter().map(|name| ScriptEntry { name }).collect())
    }

    fn load(&self, name: &str) -> Result<MigrationDefinition, LoadError> {
        let (path, format) = self.path_for(name).ok_or_else(|| LoadError::NotFound {
            name: name.to_string(),
        })?;
        let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Read {
            name: name.to_string(),
            source,
        })?;
        parse_script(&content, format).map_err(|source| LoadError::Parse {
            name: name.to_string(),
            source,
        })
    }
}

/// In-memory source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    scripts: Vec<(String, Result<MigrationDefinition, String>)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a well-formed script. Entries keep insertion order, so callers
    /// should insert in lexical name order like a directory scan would.
    pub fn with_script(mut self, name: impl Into<String>, def: MigrationDefinition) -> Self {
        self.scripts.push((name.into(), Ok(def)));
        self
    }

    /// Add a script whose load fails with `message`.
    pub fn with_malformed(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.scripts.push((name.into(), Err(message.into())));
        self
    }
}

impl MigrationSource for InMemorySource {
    fn scripts(&self) -> Result<Vec<ScriptEntry>, SourceError> {
        Ok(self
            .scripts
            .iter()
            .map(|(name, _)| ScriptEntry { name: name.clone() })
            .collect())
    }

    fn load(&self, name: &str) -> Result<MigrationDefinition, LoadError> {
        match self.scripts.iter().find(|(n, _)| n == name) {
            Some((_, Ok(def))) => Ok(def.clone()),
            Some((_, Err(message))) => Err(LoadError::Malformed {
                name: name.to_string(),
                message: message.clone(),
            }),
            None => Err(LoadError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
