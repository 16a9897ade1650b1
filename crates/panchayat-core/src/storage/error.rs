//! Storage error types

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Beneficiary with this ID already exists
    #[error("beneficiary already exists: {0}")]
    AlreadyExists(String),

    /// Beneficiary not found
    #[error("beneficiary not found: {0}")]
    NotFound(String),

    /// Invalid beneficiary data
    #[error("invalid beneficiary data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
