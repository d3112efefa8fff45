// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Location of the backing document

use std::path::{Path, PathBuf};

/// Environment variable overriding the document path
pub const DB_PATH_ENV: &str = "DB_PATH";

/// Default document file name, resolved one level above the working directory
pub const DEFAULT_FILE_NAME: &str = "db.json";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the JSON document
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve from `DB_PATH`, falling back to `<cwd>/../db.json`
    pub fn from_env() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        let env_value = std::env::var(DB_PATH_ENV).ok();
        Ok(Self::resolve(env_value.as_deref(), &cwd))
    }

    /// Pure resolution: a non-blank override wins (relative paths are taken
    /// from `cwd`), otherwise the default sits in the parent of `cwd`.
    pub fn resolve(env_value: Option<&str>, cwd: &Path) -> Self {
        let path = match env_value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => cwd.join(value),
            None => cwd.parent().unwrap_or(cwd).join(DEFAULT_FILE_NAME),
        };
        Self { path }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
