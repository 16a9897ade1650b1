//! # Panchayat Shared Rust Library
//!
//! This crate provides shared infrastructure for the Panchayat Rust components:
//! - **error**: Common error types with context
//! - **tracing**: Logging setup with segment prefixes
//! - **config**: Environment-driven search configuration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use panchayat::config::SearchConfig;
//! use panchayat::error::Error;
//!
//! panchayat::tracing::init();
//! let config = SearchConfig::from_env()?;
//! ```

pub mod config;
pub mod error;
pub mod tracing;

// Re-export commonly used items at crate root
pub use config::SearchConfig;
pub use error::{Error, Result};
