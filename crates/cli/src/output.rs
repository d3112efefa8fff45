// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use sdb_storage::{Record, TableSummary};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a list of items
pub fn print_list<T: Serialize + fmt::Display>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}

/// A record rendered as one compact JSON line in text mode
#[derive(Serialize)]
#[serde(transparent)]
pub struct RecordView(pub Record);

impl fmt::Display for RecordView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&line)
    }
}

#[derive(Serialize)]
pub struct TableInfo {
    pub name: String,
    pub records: usize,
    pub well_formed: bool,
}

impl From<TableSummary> for TableInfo {
    fn from(summary: TableSummary) -> Self {
        Self {
            name: summary.name,
            records: summary.len,
            well_formed: summary.well_formed,
        }
    }
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.well_formed {
            write!(f, "{:<24} {}", self.name, self.records)
        } else {
            write!(f, "{:<24} (not an array)", self.name)
        }
    }
}

/// Outcome of a removal
#[derive(Serialize)]
pub struct Removed {
    pub removed: bool,
}

impl fmt::Display for Removed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.removed { "removed" } else { "not found" })
    }
}
