//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::record::{ResolvedDocument, StoredRecord};
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Storage, StorageError, StorageResult};
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(StorageError)` - Failed to open database
    pub fn new(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;

        // WAL lets the detached persistence units commit while the next
        // window's fetches are already in flight
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    fn append_batch(&mut self, documents: &[ResolvedDocument]) -> StorageResult<()> {
        if documents.is_empty() {
            return Err(StorageError::EmptyBatch);
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO people (json) VALUES (?1)")?;
            for document in documents {
                let json = serde_json::to_string(&document.to_value())?;
                stmt.execute(params![json])?;
            }
        }
        tx.commit()?;

        Ok(())
    }

    fn count_records(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM people", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn load_all(&self) -> StorageResult<Vec<StoredRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, json FROM people ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let json: String = row.get(1)?;
            Ok((id, json))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, json) = row?;
            let document = serde_json::from_str(&json)?;
            records.push(StoredRecord { id, document });
        }

        Ok(records)
    }
}
