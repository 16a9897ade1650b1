//! Phonetic skeletons
//!
//! A skeleton is a consonant-only Latin reduction of a string. Gujarati
//! letters are mapped onto Latin consonants, then the usual sources of
//! spelling variance are dropped:
//!
//! - `h` is removed (so `bh`, `kh`, `sh` collapse onto `b`, `k`, `s`)
//! - `z → j`, `w → v`, `f → p`
//! - vowels `a e i o u` are removed
//! - anything outside `[a-z0-9]` is removed
//!
//! Both `રમેશ` and `Ramesh` reduce to `rms`.
//!
//! # Example
//!
//! ```rust
//! use panchayat_core::phonetic::{normalize_to_skeleton, PhoneticTable};
//!
//! assert_eq!(normalize_to_skeleton("રમેશ"), "rms");
//! assert_eq!(normalize_to_skeleton("Ramesh"), "rms");
//!
//! let table = PhoneticTable::gujarati();
//! assert_eq!(table.skeleton("લક્ષ્મણ"), table.skeleton("Laxman"));
//! ```

mod skeleton;
mod table;

pub use skeleton::normalize_to_skeleton;
pub use table::{default_table, PhoneticTable, GUJARATI_CONJUNCTS, GUJARATI_LETTERS};
