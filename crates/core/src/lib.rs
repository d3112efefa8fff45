// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sdb-core: data model for the sensordb document store
//!
//! This crate provides:
//! - The whole-file `Document` and its tables
//! - Schema-less `Record`s with string-normalized `RecordId`s
//! - Equality `Query` filters
//! - Clock and token abstractions used to name temporary files

pub mod clock;
pub mod document;
pub mod id;
pub mod query;
pub mod record;

pub use clock::{Clock, FakeClock, SystemClock};
pub use document::{Document, SchemaViolation};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use query::Query;
pub use record::{coerce_to_string, next_id, Record, RecordId, ID_FIELD};
