//! Event dispatcher — fan-out of store events to registered handlers.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::handler::{StoreEvent, TallyEventHandler};
use crate::types::records::Purchase;

/// Holds registered handlers and fans events out to them in registration
/// order. Registration is allowed at any point in the process lifetime.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<Vec<Arc<dyn TallyEventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler.
    pub fn register(&self, handler: Arc<dyn TallyEventHandler>) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.push(handler);
            debug!(count = handlers.len(), "event handler registered");
        }
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Dispatch a store mutation to all handlers.
    pub fn store_mutation(&self, event: &StoreEvent) {
        if let Ok(handlers) = self.handlers.read() {
            for handler in handlers.iter() {
                handler.on_store_mutation(event);
            }
        }
    }

    /// Dispatch a committed purchase to all handlers.
    pub fn purchase_committed(&self, purchase: &Purchase) {
        if let Ok(handlers) = self.handlers.read() {
            for handler in handlers.iter() {
                handler.on_purchase_committed(purchase);
            }
        }
    }
}
