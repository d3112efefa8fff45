// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sdb-storage: single-file JSON document store
//!
//! Three layers, leaves first:
//! - [`ExclusiveQueue`]: FIFO serialization of mutations
//! - [`JsonStore`]: whole-document read and atomic read-modify-write
//! - [`Repository`]: per-table list/get/create/patch/remove
//!
//! Writers are serialized within one process only. Two processes pointing at
//! the same file can still race; each individual write stays atomic.

mod config;
mod error;
mod exclusive;
mod repo;
mod store;

pub use config::{StoreConfig, DB_PATH_ENV, DEFAULT_FILE_NAME};
pub use error::StorageError;
pub use exclusive::ExclusiveQueue;
pub use repo::{Repository, TableSummary};
pub use store::JsonStore;

pub use sdb_core::{Document, Query, Record, RecordId};
