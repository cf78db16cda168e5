//! Storage traits and error types

use crate::record::{ResolvedDocument, StoredRecord};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot persist an empty batch")]
    EmptyBatch,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// The harvester only ever appends: each batch of resolved documents is
/// committed as one transaction, and rows are never updated or deleted.
pub trait Storage {
    /// Appends a batch of resolved documents in a single transaction.
    ///
    /// The whole batch commits together; on any failure nothing from the
    /// batch is persisted. An empty batch is rejected with
    /// [`StorageError::EmptyBatch`] since the orchestrator never dispatches
    /// one.
    fn append_batch(&mut self, documents: &[ResolvedDocument]) -> StorageResult<()>;

    /// Total number of stored rows
    fn count_records(&self) -> StorageResult<u64>;

    /// Loads every stored row in surrogate-ID order
    fn load_all(&self) -> StorageResult<Vec<StoredRecord>>;
}
