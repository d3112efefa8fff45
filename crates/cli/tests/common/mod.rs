// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding a document at `db.json`
pub struct TestDb {
    pub dir: TempDir,
}

impl TestDb {
    /// Directory with no document in it yet
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Directory with a document holding `doc`
    pub fn with(doc: Value) -> Self {
        let db = Self::empty();
        std::fs::write(db.path(), serde_json::to_string_pretty(&doc).unwrap())
            .expect("Failed to write document");
        db
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("db.json")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// `sdb --db <path>` with a clean environment
    pub fn sdb(&self) -> Command {
        let mut cmd = sdb();
        cmd.arg("--db").arg(self.path());
        cmd
    }

    pub fn on_disk(&self) -> Value {
        serde_json::from_str(&std::fs::read_to_string(self.path()).unwrap()).unwrap()
    }
}

/// `sdb` without `DB_PATH` or `RUST_LOG` leaking in from the caller
pub fn sdb() -> Command {
    let mut cmd = Command::cargo_bin("sdb").unwrap();
    cmd.env_remove("DB_PATH").env_remove("RUST_LOG");
    cmd
}

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}
