// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON document store with atomic writes
//!
//! The whole document is loaded on every read and every mutation; nothing is
//! cached between calls. Mutations run under the exclusive queue and persist
//! by writing a uniquely named temporary file next to the target and renaming
//! it over the target. Rename is atomic on POSIX filesystems, so readers see
//! either the old document or the new one in full.
//!
//! A crash between the temporary write and the rename leaves the target
//! untouched but may leave a stray `.tmp` file behind. Nothing sweeps those.

use crate::config::StoreConfig;
use crate::error::StorageError;
use crate::exclusive::ExclusiveQueue;
use sdb_core::{Clock, Document, IdGen, SystemClock, UuidIdGen};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::AsyncWriteExt;
use tracing::Instrument;

/// Handle to the on-disk document. Clones share the same file and queue.
pub struct JsonStore<C = SystemClock, G = UuidIdGen> {
    inner: Arc<Inner<C, G>>,
}

struct Inner<C, G> {
    path: PathBuf,
    queue: Arc<ExclusiveQueue>,
    clock: C,
    tokens: G,
}

impl<C, G> Clone for JsonStore<C, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl JsonStore {
    /// Open the store described by `config`, sharing the process-wide queue
    pub fn open(config: &StoreConfig) -> Self {
        Self::open_at(&config.path)
    }

    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self::with_queue(path, ExclusiveQueue::shared())
    }

    /// Open with a dedicated queue instead of the process-wide one
    pub fn with_queue(path: impl Into<PathBuf>, queue: Arc<ExclusiveQueue>) -> Self {
        Self::with_parts(path, queue, SystemClock, UuidIdGen)
    }
}

impl<C: Clock, G: IdGen> JsonStore<C, G> {
    /// Open with explicit clock and token generator (used to name temporary files)
    pub fn with_parts(
        path: impl Into<PathBuf>,
        queue: Arc<ExclusiveQueue>,
        clock: C,
        tokens: G,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                path: path.into(),
                queue,
                clock,
                tokens,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn queue(&self) -> &Arc<ExclusiveQueue> {
        &self.inner.queue
    }

    /// Load and parse the whole document. Unsynchronized.
    pub async fn read(&self) -> Result<Document, StorageError> {
        let span = tracing::info_span!("store.read", path = %self.path().display());
        self.load().instrument(span).await
    }

    async fn load(&self) -> Result<Document, StorageError> {
        let path = self.path();
        let start = Instant::now();

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StorageError::Unavailable {
                path: path.to_path_buf(),
                source,
            })?;
        let document = serde_json::from_str(&raw).map_err(|source| StorageError::Unparsable {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            bytes = raw.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "document read"
        );
        Ok(document)
    }

    /// Read, transform, and atomically persist the document under the queue.
    ///
    /// The mutator receives the freshly read document and returns the next
    /// one. If it fails, nothing is written. Returns the persisted document.
    pub async fn update<F, Fut>(&self, mutator: F) -> Result<Document, StorageError>
    where
        F: FnOnce(Document) -> Fut,
        Fut: Future<Output = Result<Document, StorageError>>,
    {
        let span = tracing::info_span!("store.update", path = %self.path().display());
        self.inner
            .queue
            .run_exclusive(async {
                let current = self.load().await?;
                let next = mutator(current).await?;
                self.write_atomic(&next).await?;
                Ok(next)
            })
            .instrument(span)
            .await
    }

    /// Synchronous-mutator form of [`update`](Self::update) that hands back
    /// whatever the mutator extracts instead of the whole document.
    pub async fn update_with<F, R>(&self, mutator: F) -> Result<R, StorageError>
    where
        F: FnOnce(&mut Document) -> Result<R, StorageError>,
    {
        let span = tracing::info_span!("store.update", path = %self.path().display());
        self.inner
            .queue
            .run_exclusive(async {
                let mut document = self.load().await?;
                let extracted = mutator(&mut document)?;
                self.write_atomic(&document).await?;
                Ok(extracted)
            })
            .instrument(span)
            .await
    }

    /// Write a fresh document containing the given empty tables.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set.
    pub async fn init<I, S>(&self, tables: I, overwrite: bool) -> Result<Document, StorageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document = Document::with_tables(tables);
        let span = tracing::info_span!("store.init", path = %self.path().display());
        self.inner
            .queue
            .run_exclusive(async {
                let path = self.path();
                let exists = tokio::fs::try_exists(path).await.map_err(|source| {
                    StorageError::Unavailable {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                if exists && !overwrite {
                    return Err(StorageError::AlreadyExists {
                        path: path.to_path_buf(),
                    });
                }
                tokio::fs::create_dir_all(self.dir())
                    .await
                    .map_err(|source| StorageError::WriteFailure {
                        path: path.to_path_buf(),
                        source,
                    })?;
                self.write_atomic(&document).await?;
                tracing::info!(tables = document.table_names().count(), "document initialized");
                Ok(document)
            })
            .instrument(span)
            .await
    }

    async fn write_atomic(&self, document: &Document) -> Result<(), StorageError> {
        let start = Instant::now();
        let mut encoded = serde_json::to_string_pretty(document).map_err(StorageError::Encode)?;
        encoded.push('\n');

        let temp = self.temp_path();
        if let Err(source) = write_then_rename(&temp, self.path(), encoded.as_bytes()).await {
            tracing::error!(temp = %temp.display(), error = %source, "atomic write failed");
            match tokio::fs::remove_file(&temp).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(temp = %temp.display(), error = %e, "failed to remove temp file")
                }
            }
            return Err(StorageError::WriteFailure {
                path: self.path().to_path_buf(),
                source,
            });
        }

        tracing::debug!(
            bytes = encoded.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "document written"
        );
        Ok(())
    }

    fn dir(&self) -> &Path {
        match self.path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// `.<file>.<millis>.<token>.tmp` in the target's own directory, so the
    /// rename never crosses a filesystem boundary
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "db".to_string());
        self.dir().join(format!(
            ".{}.{}.{}.tmp",
            file_name,
            self.inner.clock.epoch_millis(),
            self.inner.tokens.next()
        ))
    }
}

async fn write_then_rename(temp: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(temp).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    tokio::fs::rename(temp, target).await
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
