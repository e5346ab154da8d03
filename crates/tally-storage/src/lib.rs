//! # tally-storage
//!
//! SQLite persistence for the tally stores: one key-value blob table,
//! WAL mode, `PRAGMA user_version` schema tracking. Implements the
//! `IBlobStorage` trait from `tally-core`.

pub mod engine;
pub mod migration;

pub use engine::SqliteBlobStorage;
pub use migration::{get_schema_version, initialize_blob_db};
