// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the document store

use sdb_core::{RecordId, SchemaViolation};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or mutating the document
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("storage at {} is not a valid document: {source}", path.display())]
    Unparsable {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    SchemaViolation(#[from] SchemaViolation),
    #[error("write to {} failed: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode document: {0}")]
    Encode(serde_json::Error),
    #[error("record {id} already exists in table '{table}'")]
    DuplicateId { table: String, id: RecordId },
    #[error("refusing to overwrite existing document at {}", path.display())]
    AlreadyExists { path: PathBuf },
}

impl StorageError {
    /// The backing file is missing, unreadable, or not a document
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Unparsable { .. })
    }

    /// Name of the table the error concerns, if any
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::SchemaViolation(v) => Some(&v.table),
            Self::DuplicateId { table, .. } => Some(table),
            _ => None,
        }
    }
}
