// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sdb_storage::RecordId;
use std::path::PathBuf;

#[test]
fn display_lists_context_and_numbered_suggestions() {
    let err = SdbError::new("Something went wrong")
        .with_context("First context")
        .with_suggestion("Try this")
        .with_suggestion("Or this");

    let output = err.to_string();
    assert!(output.contains("error: Something went wrong"));
    assert!(output.contains("-> First context"));
    assert!(output.contains("1. Try this"));
    assert!(output.contains("2. Or this"));
}

#[test]
fn unavailable_suggests_init() {
    let err = StorageError::Unavailable {
        path: PathBuf::from("/data/db.json"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    let output = SdbError::from_storage(&err).to_string();
    assert!(output.contains("/data/db.json"));
    assert!(output.contains("sdb init"));
    assert!(output.contains("DB_PATH"));
}

#[test]
fn duplicate_id_suggests_patch() {
    let err = StorageError::DuplicateId {
        table: "sensors".to_string(),
        id: RecordId::from("3"),
    };
    let output = SdbError::from_storage(&err).to_string();
    assert!(output.contains("sdb patch sensors 3"));
}

#[test]
fn present_finds_storage_error_behind_context() {
    let err = anyhow::Error::new(StorageError::AlreadyExists {
        path: PathBuf::from("db.json"),
    })
    .context("initializing");
    let output = SdbError::present(&err).to_string();
    assert!(output.contains("--force"));
}

#[test]
fn present_falls_back_to_error_chain() {
    let err = anyhow::anyhow!("bad input").context("parsing record");
    assert_eq!(SdbError::present(&err).message, "parsing record: bad input");
}
