//! State-change notifications.
//!
//! Stores announce mutations through an `EventDispatcher`; the
//! presentation layer registers `TallyEventHandler`s to re-render,
//! instead of observing reactive fields.

pub mod dispatcher;
pub mod handler;

pub use dispatcher::EventDispatcher;
pub use handler::{StoreEvent, StoreMutation, TallyEventHandler};
