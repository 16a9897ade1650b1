//! Subscriber setup for the search tools.
//!
//! Record loads and query outcomes are logged under the [`prefix`] glyphs;
//! index rebuilds and resolved configuration appear at `debug`. Everything
//! goes to stderr so search results on stdout stay pipeable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with Panchayat defaults.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG)
/// - Compact format written to stderr, leaving stdout for results
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with a custom default filter.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Panchayat segment prefixes for logging.
pub mod prefix {
    /// Record loading prefix
    pub const LOAD: &str = "⊔";
    /// Search prefix
    pub const SEARCH: &str = "⌕";
}
