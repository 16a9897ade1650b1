//! Candidate sources for beneficiary search
//!
//! The matcher itself never touches storage: it filters whatever ordered
//! collection it is handed. This module defines where that collection comes
//! from.
//!
//! - **Memory**: insertion-ordered in-process list with a cached
//!   phonetic index (`MemoryStore`)
//!
//! # Example
//!
//! ```rust
//! use panchayat_core::storage::{CandidateSource, MemoryStore, SearchStore};
//! use panchayat_core::record::BeneficiaryBuilder;
//!
//! let mut store = MemoryStore::new();
//!
//! let beneficiary = BeneficiaryBuilder::new()
//!     .id("1")
//!     .application_number("APP-2024-001")
//!     .name("પટેલ રમેશભાઈ")
//!     .village("ભરાડા")
//!     .build();
//!
//! store.put(beneficiary).unwrap();
//! assert!(store.get("1").unwrap().is_some());
//! assert_eq!(store.search("ramesh").unwrap().len(), 1);
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{CandidateSource, SearchStore, StorageStats};
