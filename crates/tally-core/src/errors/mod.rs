//! Error taxonomy for the tally workspace.
//!
//! One enum per layer. Every error maps to a stable code via
//! `TallyErrorCode`, which is what the presentation layer keys its
//! notification categories on. No error here is fatal to the process.

pub mod config_error;
pub mod error_code;
pub mod purchase_error;
pub mod storage_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::TallyErrorCode;
pub use purchase_error::PurchaseError;
pub use storage_error::StorageError;
pub use store_error::StoreError;
