//! In-memory `IBlobStorage` stub for tests.
//!
//! Counts successful saves so tests can assert batch-persistence behavior
//! (one write per `remove_many`), and can be switched to fail saves to
//! exercise revert paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::IBlobStorage;
use crate::errors::StorageError;

/// HashMap-backed blob storage. Testing only.
#[derive(Default)]
pub struct MemoryBlobStorage {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent `save` calls fail.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl IBlobStorage for MemoryBlobStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let blobs = self.blobs.lock().expect("memory storage mutex poisoned");
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Backend {
                message: "simulated save failure".to_string(),
            });
        }
        let mut blobs = self.blobs.lock().expect("memory storage mutex poisoned");
        blobs.insert(key.to_string(), blob.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
