// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! evo-script: migration script parsing and discovery

mod definition;
mod parser;
mod source;

pub use definition::{Action, MigrationDefinition};
pub use parser::{parse_script, Format, ParseError};
pub use source::{
    normalize_name, DirectorySource, InMemorySource, LoadError, MigrationSource, ScriptEntry,
    SourceError,
};
