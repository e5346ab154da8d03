//! Typed record identifiers.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{ID_ALPHABET, RECORD_ID_LENGTH};

/// Identifier of a stored record.
///
/// Opaque string drawn from a fixed alphanumeric alphabet. Generation is
/// random; uniqueness within a store is the store's responsibility
/// (collision check with retry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Generate a random identifier of the default length.
    pub fn generate() -> Self {
        Self::generate_with_length(RECORD_ID_LENGTH)
    }

    /// Generate a random identifier of the given length.
    pub fn generate_with_length(len: usize) -> Self {
        let mut rng = rand::thread_rng();
        let id: String = (0..len)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
