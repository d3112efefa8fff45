// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sdb init`: create an empty document

use super::Outcome;
use crate::output::{print_list, OutputFormat, TableInfo};
use anyhow::Context;
use clap::Args;
use sdb_storage::JsonStore;

/// Tables the dashboard expects to find
pub const DEFAULT_TABLES: &[&str] = &[
    "users",
    "sensors",
    "dataTypes",
    "measurements",
    "alarmThresholds",
    "diagnosticTests",
    "recommendations",
    "userDataSummaries",
    "analysisTypes",
];

#[derive(Args)]
pub struct InitArgs {
    /// Table to create (repeatable; defaults to the dashboard tables)
    #[arg(long = "table")]
    tables: Vec<String>,
    /// Replace an existing document
    #[arg(long)]
    force: bool,
}

pub async fn handle(store: &JsonStore, args: InitArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let tables: Vec<String> = if args.tables.is_empty() {
        DEFAULT_TABLES.iter().map(|t| t.to_string()).collect()
    } else {
        args.tables
    };

    let document = store
        .init(tables, args.force)
        .await
        .with_context(|| format!("initializing {}", store.path().display()))?;

    let info: Vec<TableInfo> = document
        .table_names()
        .map(|name| TableInfo {
            name: name.to_string(),
            records: 0,
            well_formed: true,
        })
        .collect();
    print_list(&info, format);
    Ok(Outcome::Done)
}
