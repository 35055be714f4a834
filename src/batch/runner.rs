//! Batch runner
//!
//! Dispatches one concurrent task per file for bulk create, write, and
//! delete commands, then waits for every task to finish before returning.

use log::{error, warn};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::batch::results::BatchSummary;
use crate::error::{BatchError, StoreError};
use crate::store::FileStore;

/// Runs batches of per-file operations against a shared store.
///
/// Each file in a batch becomes its own tokio task; the semaphore caps
/// how many run at once. The batch call returns only after every task
/// has completed (join-all barrier); there is no cancellation and no
/// timeout. The order in which tasks reach the store lock is
/// unspecified, so callers must not rely on relative ordering between
/// items of a batch.
pub struct BatchRunner {
    store: FileStore,
    permits: Arc<Semaphore>,
}

impl BatchRunner {
    pub fn new(store: FileStore, concurrency: usize) -> Self {
        Self {
            store,
            permits: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    /// Create every named file concurrently.
    ///
    /// Fails up front with `CountMismatch` if `count` disagrees with the
    /// number of names, before any file is touched. Individual failures
    /// (e.g. a name that already exists) do not stop the rest of the
    /// batch.
    pub async fn create_many(
        &self,
        count: usize,
        names: Vec<String>,
    ) -> Result<BatchSummary, BatchError> {
        Self::check_count(count, names.len())?;

        let handles = names
            .into_iter()
            .map(|name| {
                let store = self.store.clone();
                let permits = Arc::clone(&self.permits);
                tokio::spawn(async move {
                    let _permit = permits.acquire_owned().await.expect("semaphore closed");
                    store.create(&name).await.map_err(|e| (name, e))
                })
            })
            .collect();

        self.join_all(handles).await
    }

    /// Write content to every named file concurrently.
    pub async fn write_many(
        &self,
        count: usize,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<BatchSummary, BatchError> {
        Self::check_count(count, entries.len())?;

        let handles = entries
            .into_iter()
            .map(|(name, content)| {
                let store = self.store.clone();
                let permits = Arc::clone(&self.permits);
                tokio::spawn(async move {
                    let _permit = permits.acquire_owned().await.expect("semaphore closed");
                    store.write(&name, content).await.map_err(|e| (name, e))
                })
            })
            .collect();

        self.join_all(handles).await
    }

    /// Delete every named file concurrently.
    pub async fn delete_many(
        &self,
        count: usize,
        names: Vec<String>,
    ) -> Result<BatchSummary, BatchError> {
        Self::check_count(count, names.len())?;

        let handles = names
            .into_iter()
            .map(|name| {
                let store = self.store.clone();
                let permits = Arc::clone(&self.permits);
                tokio::spawn(async move {
                    let _permit = permits.acquire_owned().await.expect("semaphore closed");
                    store.delete(&name).await.map_err(|e| (name, e))
                })
            })
            .collect();

        self.join_all(handles).await
    }

    fn check_count(expected: usize, actual: usize) -> Result<(), BatchError> {
        if expected != actual {
            warn!(
                "Batch rejected: declared {} files, got {}",
                expected, actual
            );
            return Err(BatchError::CountMismatch { expected, actual });
        }
        Ok(())
    }

    /// Await every dispatched task, collecting per-file failures.
    ///
    /// All handles are awaited even if one panics, so the barrier holds;
    /// a panicked worker is reported after the rest have finished.
    async fn join_all(
        &self,
        handles: Vec<JoinHandle<Result<(), (String, StoreError)>>>,
    ) -> Result<BatchSummary, BatchError> {
        let mut summary = BatchSummary::new(handles.len());
        let mut panicked = None;

        for handle in handles {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err((name, e))) => {
                    error!("Batch item {} failed: {}", name, e);
                    summary.record_failure(name, e);
                }
                Err(join_error) => {
                    error!("Batch worker panicked: {}", join_error);
                    panicked.get_or_insert(join_error);
                }
            }
        }

        match panicked {
            Some(join_error) => Err(BatchError::from(join_error)),
            None => Ok(summary),
        }
    }
}
