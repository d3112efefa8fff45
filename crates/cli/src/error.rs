// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Storage failures are translated here; the repository itself never
//! reinterprets them.

use sdb_storage::{StorageError, DB_PATH_ENV};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct SdbError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl SdbError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Present any error, recognizing storage failures anywhere in the chain
    pub fn present(err: &anyhow::Error) -> Self {
        match err.chain().find_map(|e| e.downcast_ref::<StorageError>()) {
            Some(storage) => Self::from_storage(storage),
            None => Self::new(format!("{:#}", err)),
        }
    }

    pub fn from_storage(err: &StorageError) -> Self {
        let base = Self::new(err.to_string());
        match err {
            StorageError::Unavailable { .. } => base
                .with_context("The document file is missing or unreadable")
                .with_suggestion("Create it with: sdb init")
                .with_suggestion(format!(
                    "Point at another file with --db <path> or {}",
                    DB_PATH_ENV
                )),
            StorageError::Unparsable { .. } => base
                .with_context("The file exists but is not a JSON object of tables")
                .with_suggestion("Inspect the file; a crash never leaves it half-written")
                .with_suggestion("Recreate it with: sdb init --force"),
            StorageError::SchemaViolation(v) => base
                .with_context(format!("'{}' holds a value that is not an array", v.table))
                .with_suggestion("List tables and their shape with: sdb tables"),
            StorageError::WriteFailure { .. } => base
                .with_context("The previous document is still intact")
                .with_suggestion("Check free space and permissions on the directory"),
            StorageError::DuplicateId { table, id } => base
                .with_suggestion(format!("Update it instead: sdb patch {} {} <json>", table, id))
                .with_suggestion("Or omit the id to have one assigned"),
            StorageError::AlreadyExists { .. } => {
                base.with_suggestion("Pass --force to replace it with an empty document")
            }
            StorageError::Encode(_) => base,
        }
    }
}

impl fmt::Display for SdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for SdbError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
