//! Cross-script beneficiary matching
//!
//! A query is split into whitespace-separated terms. A candidate is kept
//! only when **every** term matches it, either:
//!
//! 1. literally: the term is a substring of the lowercased searchable text, or
//! 2. phonetically: the term's skeleton is a substring of the text's skeleton.
//!
//! Results keep input order; there is no scoring. An empty (or
//! whitespace-only) query returns the candidates unchanged.
//!
//! A term whose skeleton is empty (`"a"`, `"ી"`, `"-"`) never matches
//! phonetically: an empty needle would otherwise match every record. Such a
//! term can still match literally.
//!
//! Two entry points:
//!
//! - [`filter_candidates`] recomputes skeletons per call, lazily, which is
//!   all a list of a few dozen rows needs
//! - [`PhoneticIndex`] precomputes texts and skeletons once per collection
//!   and can scan large collections in parallel (`parallel` feature)
//!
//! # Example
//!
//! ```rust
//! use panchayat_core::matcher::{filter_candidates, PhoneticIndex};
//! use panchayat_core::record::BeneficiaryBuilder;
//!
//! let records = vec![
//!     BeneficiaryBuilder::new().id("1").name("પટેલ રમેશ").village("ભરાડા").build(),
//!     BeneficiaryBuilder::new().id("2").name("શાહ નિલેશ").village("ભુજ").build(),
//! ];
//!
//! let found = filter_candidates("ramesh bharada", &records);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id, "1");
//!
//! let mut index = PhoneticIndex::new();
//! index.rebuild_index(records);
//! assert_eq!(index.filter("nilesh").len(), 1);
//! ```

mod filter;
mod index;
mod query;

pub use filter::{filter_candidates, filter_candidates_with};
pub use index::{IndexConfig, PhoneticIndex};
pub(crate) use index::content_hash;
pub use query::{Query, Term};
