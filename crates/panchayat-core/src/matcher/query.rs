//! Parsed queries and per-term matching

use crate::phonetic::{default_table, PhoneticTable};

/// One whitespace-delimited query token with its precomputed skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub literal: String,
    pub skeleton: String,
}

impl Term {
    /// Literal substring test against lowercased searchable text
    #[inline]
    pub fn matches_literal(&self, text_lower: &str) -> bool {
        contains(text_lower, &self.literal)
    }

    /// Skeleton substring test. Empty term skeletons never match.
    #[inline]
    pub fn matches_skeleton(&self, skeleton: &str) -> bool {
        !self.skeleton.is_empty() && contains(skeleton, &self.skeleton)
    }
}

/// A parsed search query: lowercased terms, AND semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<Term>,
}

impl Query {
    /// Parse with the default Gujarati table
    pub fn parse(query: &str) -> Self {
        Self::parse_with(default_table(), query)
    }

    /// Parse with an explicit phonetic table
    pub fn parse_with(table: &PhoneticTable, query: &str) -> Self {
        let terms = query
            .trim()
            .to_lowercase()
            .split_whitespace()
            .map(|literal| Term {
                literal: literal.to_string(),
                skeleton: table.skeleton(literal),
            })
            .collect();

        Self { terms }
    }

    /// True for an empty or whitespace-only query, which matches everything
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Match against searchable text, computing its skeleton only if some
    /// term fails the literal test.
    pub fn matches_lazy<F>(&self, text_lower: &str, skeleton: F) -> bool
    where
        F: FnOnce() -> String,
    {
        let mut skeleton = Some(skeleton);
        let mut computed: Option<String> = None;

        for term in &self.terms {
            if term.matches_literal(text_lower) {
                continue;
            }
            if term.skeleton.is_empty() {
                return false;
            }
            if computed.is_none() {
                computed = skeleton.take().map(|f| f());
            }
            match computed.as_deref() {
                Some(s) if term.matches_skeleton(s) => continue,
                _ => return false,
            }
        }

        true
    }

    /// Match against searchable text whose skeleton is already known
    pub fn matches_precomputed(&self, text_lower: &str, skeleton: &str) -> bool {
        self.terms
            .iter()
            .all(|term| term.matches_literal(text_lower) || term.matches_skeleton(skeleton))
    }
}

/// SIMD-accelerated substring search
#[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

/// Pure Rust fallback
#[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}
