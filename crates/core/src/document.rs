// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The whole-file document: table name to ordered records

use crate::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A table name holds something other than an array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("table '{table}' is not an array")]
pub struct SchemaViolation {
    pub table: String,
}

/// Deserialized contents of the backing file.
///
/// Absent tables read as empty. Table entries that are not JSON objects are
/// kept as-is but never surface as records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding the given tables, each empty
    pub fn with_tables<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            names
                .into_iter()
                .map(|name| (name.into(), Value::Array(Vec::new())))
                .collect(),
        )
    }

    /// Raw entries of a table; empty when the table is absent or not an array
    pub fn entries(&self, table: &str) -> &[Value] {
        match self.0.get(table) {
            Some(Value::Array(entries)) => entries,
            _ => &[],
        }
    }

    /// Records of a table in stored order
    pub fn records<'a>(&'a self, table: &str) -> impl Iterator<Item = &'a Record> + 'a {
        self.entries(table).iter().filter_map(Value::as_object)
    }

    /// Mutable entries of a table, creating it when absent.
    ///
    /// A `null` table counts as absent. Any other non-array value is a
    /// schema violation and the document is left unchanged.
    pub fn table_mut(&mut self, table: &str) -> Result<&mut Vec<Value>, SchemaViolation> {
        let slot = self
            .0
            .entry(table.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if slot.is_null() {
            *slot = Value::Array(Vec::new());
        }
        match slot {
            Value::Array(entries) => Ok(entries),
            _ => Err(SchemaViolation {
                table: table.to_string(),
            }),
        }
    }

    pub fn contains_table(&self, table: &str) -> bool {
        self.0.contains_key(table)
    }

    /// Table names in stored order, including malformed ones
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries in a table, or a schema violation if it is not an array
    pub fn table_len(&self, table: &str) -> Result<usize, SchemaViolation> {
        match self.0.get(table) {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Array(entries)) => Ok(entries.len()),
            Some(_) => Err(SchemaViolation {
                table: table.to_string(),
            }),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
