//! Persistence trait — the contract between the entity stores and the
//! blob backend. The SQLite implementation lives in `tally-storage`; an
//! in-memory stub for tests lives in `test_helpers`. The trait is
//! object-safe, `Send + Sync`, and has a blanket `Arc<T>` impl.

pub mod test_helpers;

use std::sync::Arc;

use crate::errors::StorageError;

/// Key-value blob persistence.
///
/// One key per store, each holding the store's full serialized container.
/// Semantics are load-on-open and save-on-mutation: `save` overwrites the
/// whole value, there are no deltas and no versioning of record shapes.
pub trait IBlobStorage: Send + Sync {
    /// Previously saved state for `key`, or `None` on first run.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Overwrite the entire value under `key`.
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError>;
}

impl<T: IBlobStorage + ?Sized> IBlobStorage for Arc<T> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load(key)
    }
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        (**self).save(key, blob)
    }
}
