// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! evo - Evolve: versioned migrations for remote content stores

mod color;
mod commands;
mod exit_error;
mod report;
mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{migrate, rollback, setup, status};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "evo",
    version,
    about = "Evolve - versioned migrations for remote content stores"
)]
struct Cli {
    /// Project root (defaults to walking up from the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run pending migrations
    Migrate(migrate::MigrateArgs),
    /// Roll back migrations in reverse order
    Rollback(rollback::RollbackArgs),
    /// Show installation state and migration history
    Status,
    /// Provision the status store
    Install,
    /// Clear installation state and history
    Uninstall,
}

#[tokio::main]
async fn main() {
    setup_logging();
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", color::error(&msg));
        }
        std::process::exit(code);
    }
}

/// Send tracing output to stderr, filtered by `EVO_LOG` (default: warn).
/// User-facing progress goes through the reporter on stdout; tracing is
/// for diagnostics only.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("EVO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped to avoid noisy duplicate output (common
/// when thiserror variants use `#[error("... {0}")]` with `#[from]`).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided — print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let root = cli.root.unwrap_or_else(find_project_root);

    match command {
        Commands::Migrate(args) => migrate::handle(args, &root).await,
        Commands::Rollback(args) => rollback::handle(args, &root).await,
        Commands::Status => status::handle(&root).await,
        Commands::Install => setup::install(&root).await,
        Commands::Uninstall => setup::uninstall(&root).await,
    }
}

/// Find the project root by walking up from the current directory.
/// Looks for a `.evo` directory or a `migrations` directory; falls back
/// to the current directory.
fn find_project_root() -> PathBuf {
    let Ok(mut current) = std::env::current_dir() else {
        return PathBuf::from(".");
    };

    loop {
        if current.join(".evo").is_dir() || current.join("migrations").is_dir() {
            return current;
        }
        if !current.pop() {
            return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
