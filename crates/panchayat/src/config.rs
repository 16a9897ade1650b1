//! Search configuration from the environment.
//!
//! Environment variables:
//! - `PANCHAYAT_RECORDS`: beneficiary list JSON file (no default)
//! - `PANCHAYAT_PARALLEL_THRESHOLD`: index size at which scans go parallel (default: 1000)
//! - `PANCHAYAT_MASK_DIGITS`: trailing characters left visible on masked numbers (default: 4)

use std::path::PathBuf;

use panchayat_core::IndexConfig;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

pub const ENV_RECORDS: &str = "PANCHAYAT_RECORDS";
pub const ENV_PARALLEL_THRESHOLD: &str = "PANCHAYAT_PARALLEL_THRESHOLD";
pub const ENV_MASK_DIGITS: &str = "PANCHAYAT_MASK_DIGITS";

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    pub records: Option<PathBuf>,
    pub parallel_threshold: usize,
    pub mask_digits: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            records: None,
            parallel_threshold: IndexConfig::default().parallel_threshold,
            mask_digits: 4,
        }
    }
}

impl SearchConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unset or empty values fall back to defaults; unparsable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let records = get(ENV_RECORDS).map(PathBuf::from);
        let parallel_threshold = match get(ENV_PARALLEL_THRESHOLD) {
            Some(v) => parse_usize(ENV_PARALLEL_THRESHOLD, &v)?,
            None => defaults.parallel_threshold,
        };
        let mask_digits = match get(ENV_MASK_DIGITS) {
            Some(v) => parse_usize(ENV_MASK_DIGITS, &v)?,
            None => defaults.mask_digits,
        };

        let config = Self {
            records,
            parallel_threshold,
            mask_digits,
        };
        debug!(
            records = ?config.records,
            parallel_threshold = config.parallel_threshold,
            mask_digits = config.mask_digits,
            "resolved search configuration"
        );
        Ok(config)
    }

    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{}={:?}: {}", key, value, e)))
}
