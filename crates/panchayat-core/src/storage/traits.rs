//! Storage trait definitions

use crate::record::Beneficiary;
use crate::storage::error::StoreResult;

/// Core storage operations for beneficiaries.
///
/// Implementations keep records in a stable order; `list` returns them in
/// that order so that search results are stable across calls.
pub trait CandidateSource {
    /// Store a beneficiary.
    ///
    /// If a beneficiary with the same ID already exists, returns `StoreError::AlreadyExists`.
    fn put(&mut self, beneficiary: Beneficiary) -> StoreResult<()>;

    /// Retrieve a beneficiary by ID.
    ///
    /// Returns `None` if not found.
    fn get(&self, id: &str) -> StoreResult<Option<Beneficiary>>;

    /// Check if a beneficiary exists.
    fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Delete a beneficiary by ID.
    ///
    /// Returns `true` if the beneficiary was deleted, `false` if it didn't exist.
    fn delete(&mut self, id: &str) -> StoreResult<bool>;

    /// Replace an existing beneficiary in place.
    ///
    /// Returns `StoreError::NotFound` if the beneficiary doesn't exist.
    fn update(&mut self, beneficiary: Beneficiary) -> StoreResult<()>;

    /// All beneficiaries in storage order.
    fn list(&self) -> StoreResult<Vec<Beneficiary>>;

    fn count(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }

    /// Remove every beneficiary.
    fn clear(&mut self) -> StoreResult<()>;
}

/// Search operations layered over a candidate source.
pub trait SearchStore: CandidateSource {
    /// Beneficiaries matching every term of `query`, in storage order.
    ///
    /// An empty query returns the whole list.
    fn search(&self, query: &str) -> StoreResult<Vec<Beneficiary>>;

    /// Distinct village names, sorted.
    fn villages(&self) -> StoreResult<Vec<String>>;

    /// Get storage statistics.
    fn stats(&self) -> StoreResult<StorageStats>;
}

/// Storage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
    pub total_beneficiaries: usize,
    pub unique_villages: usize,
    /// Content hash of the searchable texts; changes whenever a record does
    pub index_hash: String,
}
