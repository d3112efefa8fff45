// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! sdb - command-line access to the sensordb document store

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::{init, read, write, Outcome};
use sdb_storage::{Repository, StoreConfig};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::SdbError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "sdb",
    version,
    about = "sensordb - single-file JSON document store"
)]
struct Cli {
    /// Path to the JSON document (overrides DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty document
    Init(init::InitArgs),
    /// List tables and their record counts
    Tables,
    /// List the records of a table
    List(read::ListArgs),
    /// Show one record
    Get(read::GetArgs),
    /// Add a record
    Create(write::CreateArgs),
    /// Merge fields into a record
    Patch(write::PatchArgs),
    /// Delete a record
    Remove(write::RemoveArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => {
            eprintln!("not found");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprint!("{}", SdbError::present(&e));
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    // Resolved once; every command works against this one file
    let config = match cli.db {
        Some(path) => StoreConfig::new(path),
        None => StoreConfig::from_env()?,
    };
    tracing::debug!(path = %config.path.display(), "using document");

    let repo = Repository::open(&config);
    let format = cli.format;

    match cli.command {
        Commands::Init(args) => init::handle(repo.store(), args, format).await,
        Commands::Tables => read::tables(&repo, format).await,
        Commands::List(args) => read::list(&repo, args, format).await,
        Commands::Get(args) => read::get(&repo, args, format).await,
        Commands::Create(args) => write::create(&repo, args, format).await,
        Commands::Patch(args) => write::patch(&repo, args, format).await,
        Commands::Remove(args) => write::remove(&repo, args, format).await,
    }
}

/// Logs go to stderr so stdout stays machine readable
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
