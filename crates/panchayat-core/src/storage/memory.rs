//! In-memory storage backend
//!
//! A Vec-backed list for tests, the CLI and short-lived processes. Search
//! goes through a cached [`PhoneticIndex`] that is dropped on every mutation
//! and rebuilt on the next search.

use std::collections::BTreeSet;

use parking_lot::RwLock;
use tracing::debug;

use crate::matcher::{content_hash, IndexConfig, PhoneticIndex};
use crate::record::Beneficiary;
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::traits::{CandidateSource, SearchStore, StorageStats};

/// In-memory beneficiary store.
///
/// Keeps insertion order. Updates replace a record in place.
#[derive(Debug, Default)]
pub struct MemoryStore {
    beneficiaries: Vec<Beneficiary>,
    index: RwLock<Option<PhoneticIndex<Beneficiary>>>,
    config: IndexConfig,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create an empty store whose search index uses `config`.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            beneficiaries: Vec::new(),
            index: RwLock::new(None),
            config,
        }
    }

    /// Create a memory store with initial beneficiaries.
    ///
    /// Fails on the first duplicate or invalid record.
    pub fn with_beneficiaries(beneficiaries: Vec<Beneficiary>) -> StoreResult<Self> {
        Self::new().extended(beneficiaries)
    }

    /// Load a JSON array of beneficiaries.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Self::from_json_with_config(json, IndexConfig::default())
    }

    /// Load a JSON array of beneficiaries into a store whose search index
    /// uses `config`.
    pub fn from_json_with_config(json: &str, config: IndexConfig) -> StoreResult<Self> {
        let beneficiaries: Vec<Beneficiary> = serde_json::from_str(json)?;
        debug!(records = beneficiaries.len(), "loaded beneficiaries from JSON");
        Self::with_config(config).extended(beneficiaries)
    }

    fn extended(mut self, beneficiaries: Vec<Beneficiary>) -> StoreResult<Self> {
        for beneficiary in beneficiaries {
            self.put(beneficiary)?;
        }
        Ok(self)
    }

    /// Index configuration used for search
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Get a reference to all beneficiaries (for testing).
    pub fn all(&self) -> &[Beneficiary] {
        &self.beneficiaries
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.beneficiaries.iter().position(|b| b.id == id)
    }

    fn invalidate(&mut self) {
        *self.index.get_mut() = None;
    }
}

impl CandidateSource for MemoryStore {
    fn put(&mut self, beneficiary: Beneficiary) -> StoreResult<()> {
        if beneficiary.id.trim().is_empty() {
            return Err(StoreError::InvalidData(
                "beneficiary id must not be empty".to_string(),
            ));
        }
        if self.position(&beneficiary.id).is_some() {
            return Err(StoreError::AlreadyExists(beneficiary.id));
        }
        self.beneficiaries.push(beneficiary);
        self.invalidate();
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Option<Beneficiary>> {
        Ok(self.position(id).map(|idx| self.beneficiaries[idx].clone()))
    }

    fn delete(&mut self, id: &str) -> StoreResult<bool> {
        match self.position(id) {
            Some(idx) => {
                self.beneficiaries.remove(idx);
                self.invalidate();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn update(&mut self, beneficiary: Beneficiary) -> StoreResult<()> {
        let idx = self
            .position(&beneficiary.id)
            .ok_or_else(|| StoreError::NotFound(beneficiary.id.clone()))?;
        self.beneficiaries[idx] = beneficiary;
        self.invalidate();
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<Beneficiary>> {
        Ok(self.beneficiaries.clone())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.beneficiaries.len())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.beneficiaries.clear();
        self.invalidate();
        Ok(())
    }
}

impl SearchStore for MemoryStore {
    fn search(&self, query: &str) -> StoreResult<Vec<Beneficiary>> {
        {
            let cached = self.index.read();
            if let Some(index) = cached.as_ref() {
                return Ok(index.filter(query).into_iter().cloned().collect());
            }
        }

        let mut slot = self.index.write();
        let index = slot.get_or_insert_with(|| {
            let mut index = PhoneticIndex::with_config(self.config.clone());
            index.rebuild_index(self.beneficiaries.clone());
            index
        });
        Ok(index.filter(query).into_iter().cloned().collect())
    }

    fn villages(&self) -> StoreResult<Vec<String>> {
        let villages: BTreeSet<&str> = self
            .beneficiaries
            .iter()
            .map(|b| b.village.trim())
            .filter(|v| !v.is_empty())
            .collect();
        Ok(villages.into_iter().map(str::to_string).collect())
    }

    fn stats(&self) -> StoreResult<StorageStats> {
        let index_hash = match self.index.read().as_ref() {
            Some(index) => index.get_index_hash().to_string(),
            None => content_hash(&self.beneficiaries),
        };
        Ok(StorageStats {
            total_beneficiaries: self.beneficiaries.len(),
            unique_villages: self.villages()?.len(),
            index_hash,
        })
    }
}
