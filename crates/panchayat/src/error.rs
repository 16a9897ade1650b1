//! Common error types for Panchayat Rust components.

use panchayat_core::StoreError;
use thiserror::Error;

/// Common error type for Panchayat operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Beneficiary store error
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using Panchayat Error.
pub type Result<T> = std::result::Result<T, Error>;
