//! PhoneticIndex - precomputed skeletons for repeated searches

use std::hash::{Hash, Hasher};

use ahash::AHasher;
use tracing::debug;

use super::query::Query;
use crate::phonetic::{default_table, PhoneticTable};
use crate::record::Searchable;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// Index configuration
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Collections at least this large are scanned in parallel
    /// (only with the `parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1000,
        }
    }
}

/// Candidate collection with searchable texts and skeletons computed once.
///
/// Results match [`filter_candidates`](super::filter_candidates) exactly; the
/// index only moves skeleton work from query time to rebuild time. Rebuild
/// whenever the underlying collection changes.
#[derive(Debug, Clone)]
pub struct PhoneticIndex<R> {
    records: Vec<R>,
    texts: Vec<String>,
    skeletons: Vec<String>,
    index_hash: String,
    table: PhoneticTable,
    config: IndexConfig,
}

impl<R: Searchable> Default for PhoneticIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Searchable> PhoneticIndex<R> {
    /// Create an empty index with the default table and configuration
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: IndexConfig) -> Self {
        Self::with_table(default_table().clone(), config)
    }

    /// Create with an explicit phonetic table
    pub fn with_table(table: PhoneticTable, config: IndexConfig) -> Self {
        Self {
            records: Vec::new(),
            texts: Vec::new(),
            skeletons: Vec::new(),
            index_hash: String::new(),
            table,
            config,
        }
    }

    /// Replace the indexed collection.
    /// Returns (record_count, hash)
    pub fn rebuild_index(&mut self, records: Vec<R>) -> (usize, String) {
        let texts: Vec<String> = records.iter().map(|r| r.searchable_text()).collect();
        let skeletons: Vec<String> = texts.iter().map(|t| self.table.skeleton(t)).collect();
        let hash = compute_hash(&texts);

        let count = records.len();
        debug!(records = count, hash = %hash, "rebuilt phonetic index");

        self.records = records;
        self.texts = texts;
        self.skeletons = skeletons;
        self.index_hash = hash.clone();

        (count, hash)
    }

    /// Records matching every term of `query`, in collection order.
    /// An empty query returns every record.
    pub fn filter(&self, query: &str) -> Vec<&R> {
        self.positions(query)
            .into_iter()
            .map(|idx| &self.records[idx])
            .collect()
    }

    /// Positions of matching records, ascending
    pub fn positions(&self, query: &str) -> Vec<usize> {
        let query = Query::parse_with(&self.table, query);
        if query.is_empty() {
            return (0..self.records.len()).collect();
        }
        self.scan(&query)
    }

    /// Scan - parallel on native for large collections, sequential otherwise
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn scan(&self, query: &Query) -> Vec<usize> {
        if self.texts.len() >= self.config.parallel_threshold {
            let (texts, skeletons) = (&self.texts, &self.skeletons);
            // Indexed collect keeps ascending order
            (0..texts.len())
                .into_par_iter()
                .filter(|&idx| query.matches_precomputed(&texts[idx], &skeletons[idx]))
                .collect()
        } else {
            self.scan_sequential(query)
        }
    }

    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn scan(&self, query: &Query) -> Vec<usize> {
        self.scan_sequential(query)
    }

    fn scan_sequential(&self, query: &Query) -> Vec<usize> {
        (0..self.texts.len())
            .filter(|&idx| self.matches_at(query, idx))
            .collect()
    }

    #[inline]
    fn matches_at(&self, query: &Query, idx: usize) -> bool {
        query.matches_precomputed(&self.texts[idx], &self.skeletons[idx])
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Get current index hash
    pub fn get_index_hash(&self) -> &str {
        &self.index_hash
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if index has records
    pub fn is_ready(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

/// Content hash of a collection, equal to what [`PhoneticIndex::rebuild_index`]
/// reports for the same records.
pub(crate) fn content_hash<R: Searchable>(records: &[R]) -> String {
    let texts: Vec<String> = records.iter().map(|r| r.searchable_text()).collect();
    compute_hash(&texts)
}

fn compute_hash(texts: &[String]) -> String {
    let mut hasher = AHasher::default();
    for t in texts {
        t.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::filter_candidates;
    use crate::record::{Beneficiary, BeneficiaryBuilder};

    fn test_records() -> Vec<Beneficiary> {
        vec![
            BeneficiaryBuilder::new()
                .id("1")
                .application_number("APP-2024-001")
                .name("પટેલ રમેશભાઈ કાન્તિભાઈ")
                .account_number("30912345678")
                .village("ભરાડા")
                .build(),
            BeneficiaryBuilder::new()
                .id("2")
                .application_number("APP-2024-002")
                .name("Patel Suresh")
                .account_number("30912340000")
                .village("Bhuj")
                .build(),
            BeneficiaryBuilder::new()
                .id("3")
                .application_number("APP-2024-003")
                .name("મકવાણા લક્ષ્મણ")
                .account_number("30999990001")
                .village("ભરાડા")
                .build(),
        ]
    }

    fn test_index() -> PhoneticIndex<Beneficiary> {
        let mut index = PhoneticIndex::new();
        index.rebuild_index(test_records());
        index
    }

    #[test]
    fn test_rebuild_counts_and_hash() {
        let mut index: PhoneticIndex<Beneficiary> = PhoneticIndex::new();
        assert!(!index.is_ready());

        let (count, hash) = index.rebuild_index(test_records());
        assert_eq!(count, 3);
        assert_eq!(hash.len(), 16);
        assert_eq!(index.get_index_hash(), hash);
        assert!(index.is_ready());
    }

    #[test]
    fn test_hash_tracks_content() {
        let mut a: PhoneticIndex<Beneficiary> = PhoneticIndex::new();
        let mut b: PhoneticIndex<Beneficiary> = PhoneticIndex::new();
        let (_, h1) = a.rebuild_index(test_records());
        let (_, h2) = b.rebuild_index(test_records());
        assert_eq!(h1, h2);

        let mut fewer = test_records();
        fewer.pop();
        let (_, h3) = b.rebuild_index(fewer);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_empty_query_returns_all_positions() {
        let index = test_index();
        assert_eq!(index.positions(""), vec![0, 1, 2]);
        assert_eq!(index.positions("  "), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_phonetic() {
        let index = test_index();
        let found: Vec<&str> = index.filter("laxman").into_iter().map(|b| b.id.as_str()).collect();
        assert_eq!(found, vec!["3"]);
    }

    #[test]
    fn test_filter_order_preserved() {
        let index = test_index();
        assert_eq!(index.positions("patel"), vec![0, 1]);
        assert_eq!(index.positions("bharada"), vec![0, 2]);
    }

    #[test]
    fn test_agrees_with_filter_candidates() {
        let records = test_records();
        let index = test_index();
        for query in ["ramesh", "patel bhuj", "309", "ભરાડા", "xyz", "a", "app 003"] {
            let expected: Vec<Beneficiary> = filter_candidates(query, &records);
            let actual: Vec<Beneficiary> = index.filter(query).into_iter().cloned().collect();
            assert_eq!(actual, expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_parallel_threshold_does_not_change_results() {
        let config = IndexConfig {
            parallel_threshold: 1,
        };
        let mut index = PhoneticIndex::with_config(config);
        index.rebuild_index(test_records());
        assert_eq!(index.positions("bharada"), vec![0, 2]);
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    #[test]
    fn test_parallel_scan_matches_sequential() {
        let records: Vec<Beneficiary> = (0..3000)
            .map(|i| {
                let base = &test_records()[i % 3];
                BeneficiaryBuilder::new()
                    .id(i.to_string())
                    .application_number(format!("APP-2024-{:04}", i))
                    .name(base.name.clone())
                    .account_number(base.account_number.clone())
                    .village(base.village.clone())
                    .build()
            })
            .collect();

        let mut parallel = PhoneticIndex::with_config(IndexConfig {
            parallel_threshold: 1,
        });
        let mut sequential = PhoneticIndex::with_config(IndexConfig {
            parallel_threshold: usize::MAX,
        });
        parallel.rebuild_index(records.clone());
        sequential.rebuild_index(records.clone());

        for query in ["ramesh", "laxman", "ü", "a", "bharada 29", "", "ramesh ü"] {
            let positions = parallel.positions(query);
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {:?}", query);
            assert_eq!(positions, sequential.positions(query), "query {:?}", query);

            let expected: Vec<Beneficiary> = filter_candidates(query, &records);
            let actual: Vec<Beneficiary> = parallel.filter(query).into_iter().cloned().collect();
            assert_eq!(actual, expected, "query {:?}", query);
        }
    }
}
