//! `SqliteBlobStorage` — concrete `IBlobStorage` implementation backed by
//! SQLite. Whole-value reads and upsert writes against the `store_blobs`
//! table. The connection sits behind a mutex, which matches the
//! single-threaded store model.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use tally_core::errors::StorageError;
use tally_core::traits::storage::IBlobStorage;

use crate::migration::{initialize_blob_db, sql_err};

/// File- or memory-backed blob store.
pub struct SqliteBlobStorage {
    conn: Mutex<Connection>,
    /// Database file path (`None` for in-memory).
    path: Option<PathBuf>,
}

impl SqliteBlobStorage {
    /// Open a file-backed blob store. Creates the parent directory if
    /// needed and initializes the schema.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path).map_err(sql_err)?;
        initialize_blob_db(&conn)?;
        debug!(path = %path.display(), "blob store opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory blob store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sql_err)?;
        initialize_blob_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Database file path (`None` for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let conn = self.conn.lock().map_err(|_| StorageError::Backend {
            message: "connection mutex poisoned".to_string(),
        })?;
        f(&conn)
    }
}

impl IBlobStorage for SqliteBlobStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM store_blobs WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(sql_err)
        })
    }

    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO store_blobs (key, value, updated_at)
                 VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE
                 SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, blob],
            )
            .map_err(sql_err)?;
            Ok(())
        })
    }
}
