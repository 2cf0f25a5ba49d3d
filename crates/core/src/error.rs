//! Domain error model.

use thiserror::Error;

use crate::codec::{DecodeError, EncodeError};
use crate::validation::ValidationErrors;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is surfaced to the immediate caller; nothing in the domain
/// layer retries.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more field constraints were violated.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Input could not be decoded (malformed JSON, type mismatch).
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Output could not be encoded or written.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The referenced product does not exist.
    #[error("product not found")]
    NotFound,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
