//! `AppContext` — the three stores opened over one storage backend.

use std::sync::Arc;

use tally_core::errors::{PurchaseError, StoreError};
use tally_core::events::dispatcher::EventDispatcher;
use tally_core::traits::storage::IBlobStorage;
use tally_core::types::records::{Product, Purchase, User};

use crate::purchase::{submit_purchase, PurchaseRequest};
use crate::store::EntityStore;

/// Owns the product, user, and purchase stores plus the shared event
/// dispatcher. The usual entry point for embedding the engine.
pub struct AppContext {
    pub products: EntityStore<Product>,
    pub users: EntityStore<User>,
    pub purchases: EntityStore<Purchase>,
    events: Arc<EventDispatcher>,
}

impl AppContext {
    /// Open all three stores over the given backend with a fresh dispatcher.
    pub fn open(storage: Arc<dyn IBlobStorage>) -> Result<Self, StoreError> {
        Self::open_with_events(storage, Arc::new(EventDispatcher::new()))
    }

    /// Open with a caller-supplied dispatcher, for pre-registered handlers.
    pub fn open_with_events(
        storage: Arc<dyn IBlobStorage>,
        events: Arc<EventDispatcher>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            products: EntityStore::open(Arc::clone(&storage), Arc::clone(&events))?,
            users: EntityStore::open(Arc::clone(&storage), Arc::clone(&events))?,
            purchases: EntityStore::open(storage, Arc::clone(&events))?,
            events,
        })
    }

    /// Run a purchase transaction across the stores and notify handlers.
    pub fn submit_purchase(&mut self, request: &PurchaseRequest) -> Result<Purchase, PurchaseError> {
        let purchase = submit_purchase(
            &mut self.products,
            &self.users,
            &mut self.purchases,
            request,
        )?;
        self.events.purchase_committed(&purchase);
        Ok(purchase)
    }

    /// The shared event dispatcher.
    pub fn events(&self) -> &Arc<EventDispatcher> {
        &self.events
    }
}
