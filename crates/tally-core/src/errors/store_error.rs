//! Entity-store errors.

use super::error_code::{self, TallyErrorCode};
use super::storage_error::StorageError;
use crate::types::identifiers::RecordId;

/// Errors raised by the generic entity store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Required field missing or empty after trimming, or a numeric field
    /// out of its allowed range. Raised before any mutation.
    #[error("Validation failed for {entity}: {message}")]
    Validation {
        entity: &'static str,
        message: String,
    },

    /// Update or lookup referencing a nonexistent identifier. Never
    /// silently creates a record.
    #[error("{entity} not found: {id}")]
    NotFound {
        entity: &'static str,
        id: RecordId,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Convenience constructor for validation failures.
    pub fn validation(entity: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            entity,
            message: message.into(),
        }
    }
}

impl TallyErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::Storage(e) => e.error_code(),
        }
    }
}
