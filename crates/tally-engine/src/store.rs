//! `EntityStore` — generic in-memory store with persist-on-mutation.
//!
//! The full record container loads once at open and every successful
//! mutation rewrites the whole container to the blob backend. When the
//! write fails the in-memory change is reverted, so memory and blob never
//! disagree.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use tally_core::constants::{ID_GENERATION_MAX_ATTEMPTS, RECORD_ID_LENGTH};
use tally_core::errors::{StorageError, StoreError};
use tally_core::events::dispatcher::EventDispatcher;
use tally_core::events::handler::{StoreEvent, StoreMutation};
use tally_core::traits::record::Record;
use tally_core::traits::storage::IBlobStorage;
use tally_core::types::identifiers::RecordId;

/// In-memory store for one record type, backed by a single blob key.
///
/// Records keep insertion order. Updates preserve position; removals
/// compact the container.
pub struct EntityStore<T: Record> {
    records: Vec<T>,
    storage: Arc<dyn IBlobStorage>,
    events: Arc<EventDispatcher>,
}

impl<T: Record> EntityStore<T> {
    /// Open the store, loading the persisted container if one exists.
    /// A missing blob means a fresh, empty store.
    pub fn open(
        storage: Arc<dyn IBlobStorage>,
        events: Arc<EventDispatcher>,
    ) -> Result<Self, StoreError> {
        let records = match storage.load(T::BLOB_KEY)? {
            Some(blob) => {
                serde_json::from_slice(&blob).map_err(|e| StorageError::Serialization {
                    key: T::BLOB_KEY.to_string(),
                    message: e.to_string(),
                })?
            }
            None => Vec::new(),
        };
        debug!(entity = T::KIND, count = records.len(), "store opened");
        Ok(Self {
            records,
            storage,
            events,
        })
    }

    // ─── Reads ──────────────────────────────────────────────────────

    /// All records in insertion order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by identifier.
    pub fn find_by_id(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    // ─── Mutations ──────────────────────────────────────────────────

    /// Validate the draft, assign a fresh identifier, append, persist.
    pub fn create(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        T::validate(&draft)?;
        let id = self.fresh_id();
        let record = T::materialize(id, draft);
        self.records.push(record.clone());

        if let Err(e) = self.persist() {
            self.records.pop();
            warn!(entity = T::KIND, "create rolled back, persist failed");
            return Err(e);
        }

        self.events.store_mutation(&StoreEvent {
            entity: T::KIND,
            mutation: StoreMutation::Created,
            id: Some(record.id().clone()),
        });
        Ok(record)
    }

    /// Replace the record with the given id in place, keeping its position.
    pub fn update(&mut self, id: &RecordId, draft: T::Draft) -> Result<T, StoreError> {
        T::validate(&draft)?;
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: T::KIND,
                id: id.clone(),
            })?;

        let record = T::materialize(id.clone(), draft);
        let previous = std::mem::replace(&mut self.records[index], record.clone());

        if let Err(e) = self.persist() {
            self.records[index] = previous;
            warn!(entity = T::KIND, "update rolled back, persist failed");
            return Err(e);
        }

        self.events.store_mutation(&StoreEvent {
            entity: T::KIND,
            mutation: StoreMutation::Updated,
            id: Some(record.id().clone()),
        });
        Ok(record)
    }

    /// Remove the record with the given id. Returns whether a record was
    /// removed; removing an absent id is a no-op and does not persist.
    pub fn remove(&mut self, id: &RecordId) -> Result<bool, StoreError> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };

        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            warn!(entity = T::KIND, "remove rolled back, persist failed");
            return Err(e);
        }

        if T::AUDIT_ON_REMOVE {
            warn!(entity = T::KIND, id = %id, "audited record removed");
        }
        self.events.store_mutation(&StoreEvent {
            entity: T::KIND,
            mutation: StoreMutation::Removed,
            id: Some(id.clone()),
        });
        Ok(true)
    }

    /// Remove every record whose id is in the set, with a single persist.
    /// Returns the number removed; an empty match does not persist.
    pub fn remove_many(&mut self, ids: &HashSet<RecordId>) -> Result<usize, StoreError> {
        let original = self.records.clone();
        self.records.retain(|r| !ids.contains(r.id()));
        let count = original.len() - self.records.len();
        if count == 0 {
            return Ok(0);
        }

        if let Err(e) = self.persist() {
            self.records = original;
            warn!(entity = T::KIND, "bulk remove rolled back, persist failed");
            return Err(e);
        }

        if T::AUDIT_ON_REMOVE {
            warn!(entity = T::KIND, count, "audited records removed");
        }
        self.events.store_mutation(&StoreEvent {
            entity: T::KIND,
            mutation: StoreMutation::RemovedMany { count },
            id: None,
        });
        Ok(count)
    }

    // ─── Internals ──────────────────────────────────────────────────

    /// Serialize the full container and write it under the store's key.
    fn persist(&self) -> Result<(), StoreError> {
        let blob =
            serde_json::to_vec(&self.records).map_err(|e| StorageError::Serialization {
                key: T::BLOB_KEY.to_string(),
                message: e.to_string(),
            })?;
        self.storage.save(T::BLOB_KEY, &blob)?;
        Ok(())
    }

    /// Generate an identifier not already present in the store. Retries at
    /// the default length, then widens until a free one turns up.
    fn fresh_id(&self) -> RecordId {
        for _ in 0..ID_GENERATION_MAX_ATTEMPTS {
            let id = RecordId::generate();
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
        let mut len = RECORD_ID_LENGTH + 1;
        loop {
            let id = RecordId::generate_with_length(len);
            if self.find_by_id(&id).is_none() {
                return id;
            }
            len += 1;
        }
    }
}
