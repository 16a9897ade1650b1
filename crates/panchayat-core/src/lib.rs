//! Panchayat Core Engine
//!
//! This crate provides the search kernel for the village portal's beneficiary
//! lookup: villagers type names in Gujarati script, in Latin transliteration,
//! or as a mix of both, and still find their record.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated substring search via memchr
//! - `parallel` - Parallel index scans via rayon for large collections
//!
//! The rayon and memchr paths have their own tests, compiled only with
//! `cargo test -p panchayat-core --features native`.
//!
//! # Example
//!
//! ```rust
//! use panchayat_core::matcher::filter_candidates;
//! use panchayat_core::phonetic::normalize_to_skeleton;
//! use panchayat_core::record::BeneficiaryBuilder;
//!
//! assert_eq!(normalize_to_skeleton("Ramesh"), "rms");
//!
//! let records = vec![BeneficiaryBuilder::new()
//!     .id("1")
//!     .application_number("APP-2024-001")
//!     .name("પટેલ રમેશભાઈ કાન્તિભાઈ")
//!     .account_number("30912345678")
//!     .village("ભરાડા")
//!     .build()];
//!
//! let found = filter_candidates("ramesh", &records);
//! assert_eq!(found.len(), 1);
//! ```

pub mod matcher;
pub mod phonetic;
pub mod record;
pub mod storage;

// Re-export main types at crate root
pub use matcher::{filter_candidates, filter_candidates_with, IndexConfig, PhoneticIndex, Query};
pub use phonetic::{default_table, normalize_to_skeleton, PhoneticTable};
pub use record::{Beneficiary, BeneficiaryBuilder, Searchable};
pub use storage::{CandidateSource, MemoryStore, SearchStore, StoreError};
