//! `Record` trait — binds a record type to its draft, blob key, validation,
//! and materialization. Implemented by `Product`, `User`, and `Purchase`;
//! the generic entity store in `tally-engine` is written against this.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;
use crate::types::identifiers::RecordId;

/// Contract between the generic entity store and one record type.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Draft type accepted by create and update (the record minus its id).
    type Draft: Clone + Send;

    /// Singular entity name used in errors and events ("product").
    const KIND: &'static str;

    /// Persistence key under which the full container is stored.
    const BLOB_KEY: &'static str;

    /// Whether removing a record of this type deserves an audit warning
    /// (purchase history carries denormalized snapshots that exist to
    /// outlive their source records).
    const AUDIT_ON_REMOVE: bool = false;

    /// The record's identifier.
    fn id(&self) -> &RecordId;

    /// Validate a draft before any mutation. Required fields must be
    /// non-empty after trimming; numeric fields must be in range.
    fn validate(draft: &Self::Draft) -> Result<(), StoreError>;

    /// Build the stored record from a validated draft and an identifier
    /// (fresh on create, preserved on update). Merges per-entity defaults.
    fn materialize(id: RecordId, draft: Self::Draft) -> Self;
}
