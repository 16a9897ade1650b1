//! Panchayat Search
//!
//! Loads a published beneficiary list and answers cross-script queries
//! against it. The binary in `main.rs` is a thin clap front-end over the
//! functions here.
//!
//! ## Usage
//!
//! ```bash
//! panchayat-search search --records pmay-2024.json ramesh bharada
//! panchayat-search skeleton "પટેલ રમેશભાઈ"
//! panchayat-search stats --records pmay-2024.json
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `PANCHAYAT_RECORDS`: record file used when `--records` is absent
//! - `PANCHAYAT_PARALLEL_THRESHOLD`: index size at which scans go parallel
//! - `PANCHAYAT_MASK_DIGITS`: visible tail of masked account numbers
//! - `RUST_LOG`: Logging level (default: info)

use std::fs;
use std::path::{Path, PathBuf};

use panchayat::tracing::prefix;
use panchayat::{Error, Result, SearchConfig};
use panchayat_core::storage::{CandidateSource, MemoryStore, SearchStore};
use panchayat_core::{filter_candidates, Beneficiary};
use serde::Serialize;
use tracing::{debug, info};

/// Result rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One masked line per beneficiary
    #[default]
    Text,
    /// JSON array, unmasked
    Json,
}

/// Pick the record file: explicit flag first, then configuration.
pub fn resolve_records(flag: Option<PathBuf>, config: &SearchConfig) -> Result<PathBuf> {
    flag.or_else(|| config.records.clone()).ok_or_else(|| {
        Error::Config(format!(
            "no record file given; pass --records or set {}",
            panchayat::config::ENV_RECORDS
        ))
    })
}

/// Load a JSON beneficiary list into a memory store.
pub fn load_store(path: &Path, config: &SearchConfig) -> Result<MemoryStore> {
    let json = fs::read_to_string(path)?;
    let store = MemoryStore::from_json_with_config(&json, config.index_config())?;

    info!(
        "{} loaded {} beneficiaries from {}",
        prefix::LOAD,
        store.count()?,
        path.display()
    );
    Ok(store)
}

/// Run a query against the store.
///
/// With `indexed` the store's cached phonetic index is used; otherwise the
/// stateless filter runs over the list directly. Both give the same result.
pub fn run_search(store: &MemoryStore, query: &str, indexed: bool) -> Result<Vec<Beneficiary>> {
    let found = if indexed {
        store.search(query)?
    } else {
        filter_candidates(query, store.all())
    };
    debug!(
        "{} query {:?} matched {} of {}",
        prefix::SEARCH,
        query,
        found.len(),
        store.all().len()
    );
    Ok(found)
}

/// Render matches in the requested format.
pub fn render(found: &[Beneficiary], format: OutputFormat, mask_digits: usize) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(found)?),
        OutputFormat::Text => Ok(found
            .iter()
            .map(|b| render_line(b, mask_digits))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_line(b: &Beneficiary, mask_digits: usize) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        b.id,
        b.masked_application(mask_digits),
        b.name,
        b.masked_account(mask_digits),
        b.village
    )
}

/// Summary printed by the `stats` subcommand
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub beneficiaries: usize,
    pub villages: Vec<String>,
    pub index_hash: String,
    pub config: SearchConfig,
}

pub fn stats_report(store: &MemoryStore, config: &SearchConfig) -> Result<StatsReport> {
    let stats = store.stats()?;
    Ok(StatsReport {
        beneficiaries: stats.total_beneficiaries,
        villages: store.villages()?,
        index_hash: stats.index_hash,
        config: config.clone(),
    })
}
