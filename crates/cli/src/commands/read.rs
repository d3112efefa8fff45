// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only commands: `tables`, `list`, `get`

use super::{parse_key_value, Outcome};
use crate::output::{print, print_list, OutputFormat, RecordView, TableInfo};
use clap::Args;
use sdb_storage::{Query, Repository};

#[derive(Args)]
pub struct ListArgs {
    /// Table name
    table: String,
    /// Only records whose field equals the value (repeatable, all must hold)
    #[arg(long = "where", value_parser = parse_key_value)]
    conditions: Vec<(String, String)>,
}

#[derive(Args)]
pub struct GetArgs {
    /// Table name
    table: String,
    /// Record id
    id: String,
}

pub async fn tables(repo: &Repository, format: OutputFormat) -> anyhow::Result<Outcome> {
    let tables: Vec<TableInfo> = repo.tables().await?.into_iter().map(TableInfo::from).collect();
    print_list(&tables, format);
    Ok(Outcome::Done)
}

pub async fn list(repo: &Repository, args: ListArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let query: Query = args.conditions.into_iter().collect();
    let records: Vec<RecordView> = repo
        .list(&args.table, &query)
        .await?
        .into_iter()
        .map(RecordView)
        .collect();
    print_list(&records, format);
    Ok(Outcome::Done)
}

pub async fn get(repo: &Repository, args: GetArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    match repo.get_by_id(&args.table, args.id).await? {
        Some(record) => {
            print(&RecordView(record), format);
            Ok(Outcome::Done)
        }
        None => Ok(Outcome::NotFound),
    }
}
