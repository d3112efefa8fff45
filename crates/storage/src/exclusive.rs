// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! FIFO exclusive-access queue
//!
//! At most one unit of work runs at a time, in the order callers reached the
//! queue. The underlying tokio mutex hands the lock to waiters in the order
//! they started waiting, and the guard is dropped on every exit path (return,
//! error, or unwind), so a failed unit never wedges the queue.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;

/// Serializes asynchronous units of work
#[derive(Debug, Default)]
pub struct ExclusiveQueue {
    lock: Mutex<()>,
    admitted: AtomicU64,
    completed: AtomicU64,
}

impl ExclusiveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide queue shared by every store that does not bring its own
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<ExclusiveQueue>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::new())))
    }

    /// Run `work` once every previously submitted unit has finished.
    ///
    /// Returns whatever `work` returns; errors belong to this caller alone.
    pub async fn run_exclusive<F, T>(&self, work: F) -> T
    where
        F: Future<Output = T>,
    {
        let _turn = self.lock.lock().await;
        let seq = self.admitted.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(seq, "exclusive turn started");
        let _done = Completion(&self.completed);
        work.await
    }

    /// Units of work that have been granted the queue
    pub fn admitted(&self) -> u64 {
        self.admitted.load(Ordering::SeqCst)
    }

    /// Units of work that have finished, successfully or not
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }
}

/// Counts a finished unit even when the work future unwinds
struct Completion<'a>(&'a AtomicU64);

impl Drop for Completion<'_> {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "exclusive_tests.rs"]
mod tests;
