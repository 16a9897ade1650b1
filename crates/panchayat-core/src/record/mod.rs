//! Beneficiary records - the candidates the portal searches over
//!
//! A beneficiary is one row of a government scheme's published list: who
//! applied, under which application number, into which bank account, from
//! which village.
//!
//! # Example
//!
//! ```rust
//! use panchayat_core::record::{BeneficiaryBuilder, Searchable};
//!
//! let record = BeneficiaryBuilder::new()
//!     .id("7")
//!     .application_number("APP-2024-007")
//!     .name("Shah Nilesh")
//!     .account_number("30900001111")
//!     .village("Bharada")
//!     .build();
//!
//! assert_eq!(
//!     record.searchable_text(),
//!     "7 app-2024-007 shah nilesh 30900001111 bharada"
//! );
//! ```

mod types;

pub use types::{Beneficiary, BeneficiaryBuilder, Searchable};
