//! Purchase transaction errors.
//!
//! Every variant except transparent store faults is raised before any
//! store mutation, which is what gives the coordinator its all-or-nothing
//! behavior without rollback.

use super::error_code::{self, TallyErrorCode};
use super::store_error::StoreError;
use crate::types::identifiers::RecordId;

/// Errors raised by the purchase transaction coordinator.
#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    /// Structurally invalid request (blank id, zero quantity, nonpositive
    /// unit price). Checked before any store access.
    #[error("Invalid purchase request: {message}")]
    Validation { message: String },

    /// The user or product id does not resolve to an existing record.
    #[error("{entity} not found: {id}")]
    Reference {
        entity: &'static str,
        id: RecordId,
    },

    /// Requested quantity exceeds available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: RecordId,
        requested: u32,
        available: u32,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TallyErrorCode for PurchaseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::Reference { .. } => error_code::REFERENCE_ERROR,
            Self::InsufficientStock { .. } => error_code::INSUFFICIENT_STOCK,
            Self::Store(e) => e.error_code(),
        }
    }
}
