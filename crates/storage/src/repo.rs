// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table repository: CRUD over the tables of the document
//!
//! Reads load the document without taking the queue. Every mutation is one
//! read-modify-write cycle through [`JsonStore::update_with`], so writes to
//! any table serialize against writes to every other table.

use crate::config::StoreConfig;
use crate::error::StorageError;
use crate::store::JsonStore;
use sdb_core::{next_id, Clock, IdGen, Query, Record, RecordId, SystemClock, UuidIdGen, ID_FIELD};
use serde_json::Value;

/// Name and size of one table in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    /// Number of entries; zero when the name holds something other than an array
    pub len: usize,
    /// Whether the name holds an array
    pub well_formed: bool,
}

/// Schema-less table repository
pub struct Repository<C = SystemClock, G = UuidIdGen> {
    store: JsonStore<C, G>,
}

impl<C, G> Clone for Repository<C, G> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl Repository {
    /// Repository over the configured document, sharing the process-wide queue
    pub fn open(config: &StoreConfig) -> Self {
        Self::new(JsonStore::open(config))
    }
}

impl<C: Clock, G: IdGen> Repository<C, G> {
    pub fn new(store: JsonStore<C, G>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonStore<C, G> {
        &self.store
    }

    /// Records of `table` matching `query`, in stored order
    pub async fn list(&self, table: &str, query: &Query) -> Result<Vec<Record>, StorageError> {
        let document = self.store.read().await?;
        let matching = document
            .records(table)
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        Ok(matching)
    }

    /// First record of `table` whose normalized id equals `id`
    pub async fn get_by_id(
        &self,
        table: &str,
        id: impl Into<RecordId>,
    ) -> Result<Option<Record>, StorageError> {
        let id = id.into();
        let document = self.store.read().await?;
        let found = document
            .records(table)
            .find(|record| RecordId::of_record(record).as_ref() == Some(&id))
            .cloned();
        Ok(found)
    }

    /// Append `data` to `table`, assigning an id unless one is supplied.
    ///
    /// A supplied id that already exists in the table is rejected.
    pub async fn create(&self, table: &str, data: Record) -> Result<Record, StorageError> {
        let created = self
            .store
            .update_with(|document| {
                let entries = document.table_mut(table)?;
                let id = match RecordId::supplied(&data) {
                    Some(id) if entries.iter().any(|entry| id.matches(entry)) => {
                        return Err(StorageError::DuplicateId {
                            table: table.to_string(),
                            id,
                        });
                    }
                    Some(id) => id,
                    None => next_id(entries),
                };

                let mut record = data;
                record.insert(ID_FIELD.to_string(), id.into());
                entries.push(Value::Object(record.clone()));
                Ok(record)
            })
            .await?;

        tracing::info!(table, id = %id_of(&created), "record created");
        Ok(created)
    }

    /// Shallow-merge `partial` into the record with `id`.
    ///
    /// The record keeps its original id whatever `partial` says. Returns
    /// `None` (and changes nothing) when no such record exists.
    pub async fn patch(
        &self,
        table: &str,
        id: impl Into<RecordId>,
        partial: Record,
    ) -> Result<Option<Record>, StorageError> {
        let id = id.into();
        let updated = self
            .store
            .update_with(|document| {
                let Some(existing) = document
                    .table_mut(table)?
                    .iter_mut()
                    .filter_map(Value::as_object_mut)
                    .find(|record| RecordId::of_record(record).as_ref() == Some(&id))
                else {
                    return Ok(None);
                };

                existing.extend(partial);
                existing.insert(ID_FIELD.to_string(), id.clone().into());
                Ok(Some(existing.clone()))
            })
            .await?;

        match &updated {
            Some(_) => tracing::info!(table, %id, "record patched"),
            None => tracing::debug!(table, %id, "patch target not found"),
        }
        Ok(updated)
    }

    /// Delete every record with `id`. Returns whether anything was removed.
    pub async fn remove(&self, table: &str, id: impl Into<RecordId>) -> Result<bool, StorageError> {
        let id = id.into();
        let removed = self
            .store
            .update_with(|document| {
                let entries = document.table_mut(table)?;
                let before = entries.len();
                entries.retain(|entry| !id.matches(entry));
                Ok(entries.len() != before)
            })
            .await?;

        if removed {
            tracing::info!(table, %id, "record removed");
        }
        Ok(removed)
    }

    /// Every table name in the document with its entry count
    pub async fn tables(&self) -> Result<Vec<TableSummary>, StorageError> {
        let document = self.store.read().await?;
        let summaries = document
            .table_names()
            .map(|name| match document.table_len(name) {
                Ok(len) => TableSummary {
                    name: name.to_string(),
                    len,
                    well_formed: true,
                },
                Err(_) => TableSummary {
                    name: name.to_string(),
                    len: 0,
                    well_formed: false,
                },
            })
            .collect();
        Ok(summaries)
    }
}

fn id_of(record: &Record) -> RecordId {
    RecordId::of_record(record).unwrap_or_else(|| RecordId::new(""))
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
