// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evo rollback [--to <name>] [--only <name>]`

use super::{migrations_dir, status_path};
use crate::exit_error::ExitError;
use crate::report::ConsoleReporter;
use anyhow::Result;
use clap::Args;
use evo_core::{FailurePolicy, RollbackOptions};
use evo_engine::{DryRunClient, RollbackRunner, RunError};
use evo_script::DirectorySource;
use evo_storage::FileStatusStore;
use std::path::Path;
use std::sync::Arc;

#[derive(Args)]
pub struct RollbackArgs {
    /// Halt after this migration's reverse operation completes
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Roll back only this migration
    #[arg(short = 'o', long = "only")]
    pub only: Option<String>,

    /// Log failed steps and keep going instead of stopping
    #[arg(long = "keep-going")]
    pub keep_going: bool,
}

pub async fn handle(args: RollbackArgs, root: &Path) -> Result<()> {
    let source = DirectorySource::new(migrations_dir(root));
    let store = FileStatusStore::new(status_path(root));
    let reporter = ConsoleReporter::new();
    let client = Arc::new(DryRunClient);

    let options = RollbackOptions {
        to: args.to,
        only: args.only,
        on_failure: if args.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Stop
        },
    };

    let runner = RollbackRunner::new(&source, &store, client, &reporter, options);
    match runner.run().await {
        Ok(report) => {
            println!(
                "{}",
                crate::color::success(&format!(
                    "Rolled back {} migration(s)",
                    report.completed.len()
                ))
            );
            Ok(())
        }
        Err(e @ RunError::NoMigrations) => {
            println!("{}", crate::color::warning(&e.to_string()));
            Err(ExitError::new(1).into())
        }
        Err(e) => Err(e.into()),
    }
}
