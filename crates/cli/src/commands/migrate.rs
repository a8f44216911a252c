// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evo migrate [--to <name>] [--only <name>] [--force] [--step <n>]`

use super::{migrations_dir, status_path};
use crate::exit_error::ExitError;
use crate::report::ConsoleReporter;
use anyhow::Result;
use clap::Args;
use evo_core::{FailurePolicy, RunOptions};
use evo_engine::{DryRunClient, MigrationRunner, RunError};
use evo_script::DirectorySource;
use evo_storage::FileStatusStore;
use std::path::Path;
use std::sync::Arc;

#[derive(Args)]
pub struct MigrateArgs {
    /// Halt after this migration completes
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Run only this migration
    #[arg(short = 'o', long = "only")]
    pub only: Option<String>,

    /// Re-apply migrations already recorded as migrated
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Run at most this many pending migrations
    #[arg(short = 's', long = "step")]
    pub step: Option<usize>,

    /// Log failed steps and keep going instead of stopping
    #[arg(long = "keep-going")]
    pub keep_going: bool,
}

pub async fn handle(args: MigrateArgs, root: &Path) -> Result<()> {
    let source = DirectorySource::new(migrations_dir(root));
    let store = FileStatusStore::new(status_path(root));
    let reporter = ConsoleReporter::new();
    let client = Arc::new(DryRunClient);

    let options = RunOptions {
        to: args.to,
        only: args.only,
        step: args.step,
        force: args.force,
        on_failure: if args.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Stop
        },
    };

    let runner = MigrationRunner::new(&source, &store, client, &reporter, options);
    match runner.run().await {
        Ok(report) => {
            println!(
                "{}",
                crate::color::success(&format!("Applied {} migration(s)", report.completed.len()))
            );
            Ok(())
        }
        Err(e @ (RunError::NoMigrations | RunError::UpToDate)) => {
            // Warning, not an error, but the run still terminates non-zero.
            println!("{}", crate::color::warning(&e.to_string()));
            Err(ExitError::new(1).into())
        }
        Err(e) => Err(e.into()),
    }
}
