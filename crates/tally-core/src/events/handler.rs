//! Event handler trait and event payloads.

use crate::types::identifiers::RecordId;
use crate::types::records::Purchase;

/// What kind of mutation a store performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreMutation {
    Created,
    Updated,
    Removed,
    RemovedMany { count: usize },
}

/// A successful store mutation.
#[derive(Debug, Clone)]
pub struct StoreEvent {
    /// Entity kind ("product", "user", "purchase").
    pub entity: &'static str,
    pub mutation: StoreMutation,
    /// Identifier of the affected record; `None` for bulk removals.
    pub id: Option<RecordId>,
}

/// Observer interface for state-change notifications.
///
/// Handlers run synchronously on the mutating call, after the mutation has
/// persisted. They must be infallible and must not block.
pub trait TallyEventHandler: Send + Sync {
    /// Called after every successful store mutation.
    fn on_store_mutation(&self, _event: &StoreEvent) {}

    /// Called after a purchase transaction commits.
    fn on_purchase_committed(&self, _purchase: &Purchase) {}
}
