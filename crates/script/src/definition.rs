// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration script contract.
//!
//! A script declares an optional forward (`up`) and reverse (`down`) action
//! list. Actions are opaque to the engine: an `action` tag plus arbitrary
//! parameters handed to the remote client as-is.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One declarative remote operation inside a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Operation tag interpreted by the remote client (e.g. "create-list").
    pub action: String,
    /// Remaining keys, preserved in declaration order.
    #[serde(flatten)]
    pub params: IndexMap<String, toml::Value>,
}

impl Action {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params: IndexMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// A loaded change script: optional forward and reverse operations.
/// Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<Vec<Action>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<Vec<Action>>,
}

impl MigrationDefinition {
    /// Actions for the requested direction, if the script defines them.
    pub fn actions(&self, reverse: bool) -> Option<&[Action]> {
        let list = if reverse {
            self.down.as_ref()
        } else {
            self.up.as_ref()
        };
        list.map(Vec::as_slice)
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
