//! # tally-core
//!
//! Foundation crate for the tally inventory tracker.
//! Defines record types, drafts, validation, the error taxonomy, the
//! persistence trait, event dispatch, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::TallyConfig;
pub use errors::error_code::TallyErrorCode;
pub use errors::{ConfigError, PurchaseError, StorageError, StoreError};
pub use events::dispatcher::EventDispatcher;
pub use events::handler::{StoreEvent, StoreMutation, TallyEventHandler};
pub use traits::record::Record;
pub use traits::storage::IBlobStorage;
pub use types::identifiers::RecordId;
pub use types::records::{
    InventoryStatus, Product, ProductDraft, Purchase, PurchaseDraft, User, UserDraft,
};
