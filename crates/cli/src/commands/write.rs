// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutating commands: `create`, `patch`, `remove`

use super::{parse_key_value, Outcome};
use crate::output::{print, OutputFormat, RecordView, Removed};
use anyhow::{bail, Context};
use clap::Args;
use sdb_storage::{Record, Repository};
use serde_json::Value;
use std::io::Read;

/// Record fields given as JSON and/or `--set` pairs
#[derive(Args)]
pub struct FieldArgs {
    /// Fields as a JSON object, or `-` to read it from stdin
    json: Option<String>,
    /// Set a string field (repeatable, applied after the JSON)
    #[arg(long = "set", value_parser = parse_key_value)]
    fields: Vec<(String, String)>,
}

impl FieldArgs {
    fn into_record(self) -> anyhow::Result<Record> {
        let mut record = match self.json.as_deref() {
            None => Record::new(),
            Some("-") => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .context("reading record from stdin")?;
                parse_object(&raw)?
            }
            Some(raw) => parse_object(raw)?,
        };
        for (key, value) in self.fields {
            record.insert(key, Value::String(value));
        }
        Ok(record)
    }
}

fn parse_object(raw: &str) -> anyhow::Result<Record> {
    match serde_json::from_str::<Value>(raw).context("parsing record JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("record must be a JSON object, got: {}", other),
    }
}

#[derive(Args)]
pub struct CreateArgs {
    /// Table name
    table: String,
    #[command(flatten)]
    fields: FieldArgs,
}

#[derive(Args)]
pub struct PatchArgs {
    /// Table name
    table: String,
    /// Record id
    id: String,
    #[command(flatten)]
    fields: FieldArgs,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Table name
    table: String,
    /// Record id
    id: String,
}

pub async fn create(repo: &Repository, args: CreateArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let data = args.fields.into_record()?;
    let created = repo.create(&args.table, data).await?;
    print(&RecordView(created), format);
    Ok(Outcome::Done)
}

pub async fn patch(repo: &Repository, args: PatchArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let partial = args.fields.into_record()?;
    match repo.patch(&args.table, args.id, partial).await? {
        Some(updated) => {
            print(&RecordView(updated), format);
            Ok(Outcome::Done)
        }
        None => Ok(Outcome::NotFound),
    }
}

pub async fn remove(repo: &Repository, args: RemoveArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let removed = repo.remove(&args.table, args.id).await?;
    print(&Removed { removed }, format);
    Ok(if removed { Outcome::Done } else { Outcome::NotFound })
}
