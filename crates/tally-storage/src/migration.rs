//! Schema initialization for the blob store.
//! Uses PRAGMA user_version tracking.

use rusqlite::Connection;

use tally_core::errors::StorageError;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Blob store schema: one whole-container value per store key.
pub const BLOB_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS store_blobs (
    key TEXT PRIMARY KEY,
    value BLOB NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
) STRICT;
"#;

/// Initialize a connection with PRAGMAs and the blob table.
/// Called on every open. Idempotent.
pub fn initialize_blob_db(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(sql_err)?;

    conn.execute_batch(BLOB_SCHEMA_SQL).map_err(sql_err)?;

    if get_schema_version(conn)? == 0 {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(sql_err)?;
    }
    Ok(())
}

/// Current schema version via PRAGMA user_version.
pub fn get_schema_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(sql_err)
}

/// Map a rusqlite error into the storage taxonomy.
pub(crate) fn sql_err(e: rusqlite::Error) -> StorageError {
    StorageError::Backend {
        message: e.to_string(),
    }
}
