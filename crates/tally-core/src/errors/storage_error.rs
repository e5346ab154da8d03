//! Persistence-layer errors.

use super::error_code::{self, TallyErrorCode};

/// Errors that can occur in the blob persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Fault reported by the underlying key-value medium.
    #[error("Storage backend error: {message}")]
    Backend { message: String },

    /// A persisted container failed to serialize or deserialize.
    #[error("Serialization error for {key}: {message}")]
    Serialization { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TallyErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Backend { .. } => error_code::STORAGE_ERROR,
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
