//! Detached batch persistence
//!
//! Each completed window is handed to the sink as one unit of work. The unit
//! runs on the blocking pool so the SQLite commit overlaps with the next
//! window's fetches; the orchestrator only waits for the accumulated units
//! at drain time, which is what guarantees nothing is lost at shutdown.

use crate::record::ResolvedDocument;
use crate::storage::{SqliteStorage, Storage, StorageError};
use crate::Result;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// Persistence sink tracking detached batch-commit units
pub struct PersistenceSink {
    storage: Arc<Mutex<SqliteStorage>>,
    pending: Vec<JoinHandle<std::result::Result<(), StorageError>>>,
}

impl PersistenceSink {
    /// Creates a sink over a shared storage handle
    pub fn new(storage: Arc<Mutex<SqliteStorage>>) -> Self {
        Self {
            storage,
            pending: Vec::new(),
        }
    }

    /// Dispatches one batch as a detached unit of work
    ///
    /// Returns immediately; the batch commits in the background as a single
    /// transaction. A progress line with the batch's first and last catalog
    /// ID is logged on successful commit. Failures are held in the unit's
    /// handle and surface when [`drain`](Self::drain) joins it.
    ///
    /// The orchestrator never dispatches an empty batch; the storage layer
    /// rejects one anyway.
    pub fn dispatch(&mut self, documents: Vec<ResolvedDocument>) {
        let storage = Arc::clone(&self.storage);

        let handle = tokio::task::spawn_blocking(move || {
            let first = documents.first().map(ResolvedDocument::id).unwrap_or(0);
            let last = documents.last().map(ResolvedDocument::id).unwrap_or(0);

            let mut storage = storage.lock().unwrap();
            storage.append_batch(&documents)?;

            tracing::info!("Committed records id {} - {}", first, last);
            Ok(())
        });

        self.pending.push(handle);
    }

    /// Number of dispatched units not yet drained
    pub fn pending_units(&self) -> usize {
        self.pending.len()
    }

    /// Awaits every outstanding unit, surfacing the first failure
    ///
    /// Units are joined in dispatch order, though they may have completed in
    /// any order. After a successful drain every previously dispatched batch
    /// is durably committed.
    pub async fn drain(&mut self) -> Result<()> {
        for handle in self.pending.drain(..) {
            handle.await??;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(id: u64, name: &str) -> ResolvedDocument {
        let raw = json!({ "name": name }).as_object().unwrap().clone();
        ResolvedDocument::from_raw(raw, id)
    }

    fn shared_storage() -> Arc<Mutex<SqliteStorage>> {
        Arc::new(Mutex::new(SqliteStorage::new_in_memory().unwrap()))
    }

    #[tokio::test]
    async fn test_dispatch_does_not_block() {
        let storage = shared_storage();
        let mut sink = PersistenceSink::new(Arc::clone(&storage));

        sink.dispatch(vec![document(1, "Luke Skywalker")]);
        sink.dispatch(vec![document(2, "C-3PO")]);
        assert_eq!(sink.pending_units(), 2);

        sink.drain().await.unwrap();
        assert_eq!(sink.pending_units(), 0);

        let count = storage.lock().unwrap().count_records().unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_drain_with_nothing_pending() {
        let mut sink = PersistenceSink::new(shared_storage());
        assert!(sink.drain().await.is_ok());
    }

    #[tokio::test]
    async fn test_batches_commit_whole() {
        let storage = shared_storage();
        let mut sink = PersistenceSink::new(Arc::clone(&storage));

        sink.dispatch(vec![
            document(1, "Luke Skywalker"),
            document(2, "C-3PO"),
            document(4, "Darth Vader"),
        ]);
        sink.drain().await.unwrap();

        let records = storage.lock().unwrap().load_all().unwrap();
        let ids: Vec<_> = records.iter().filter_map(|r| r.catalog_id()).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }
}
