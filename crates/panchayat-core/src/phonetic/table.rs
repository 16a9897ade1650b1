//! Script → Latin consonant tables

use ahash::AHashMap;
use lazy_static::lazy_static;

/// Single-codepoint mappings for Gujarati.
///
/// Aspirated and unaspirated pairs share a letter, as do the three sibilants
/// and the nasals. Vowel signs, independent vowels, virama and nukta are
/// absent on purpose: absent symbols contribute nothing to a skeleton.
pub const GUJARATI_LETTERS: &[(char, &str)] = &[
    // Velars
    ('ક', "k"),
    ('ખ', "k"),
    ('ગ', "g"),
    ('ઘ', "g"),
    ('ઙ', "n"),
    // Palatals
    ('ચ', "c"),
    ('છ', "c"),
    ('જ', "j"),
    ('ઝ', "j"),
    ('ઞ', "n"),
    // Retroflex
    ('ટ', "t"),
    ('ઠ', "t"),
    ('ડ', "d"),
    ('ઢ', "d"),
    ('ણ', "n"),
    // Dentals
    ('ત', "t"),
    ('થ', "t"),
    ('દ', "d"),
    ('ધ', "d"),
    ('ન', "n"),
    // Labials
    ('પ', "p"),
    ('ફ', "p"),
    ('બ', "b"),
    ('ભ', "b"),
    ('મ', "m"),
    // Approximants and sibilants
    ('ય', "y"),
    ('ર', "r"),
    ('લ', "l"),
    ('ળ', "l"),
    ('વ', "v"),
    ('શ', "s"),
    ('ષ', "s"),
    ('સ', "s"),
    ('હ', "h"),
    // Anusvara is written as n in transliterated names (સંજય → sanjay)
    ('ં', "n"),
    // Digits
    ('૦', "0"),
    ('૧', "1"),
    ('૨', "2"),
    ('૩', "3"),
    ('૪', "4"),
    ('૫', "5"),
    ('૬', "6"),
    ('૭', "7"),
    ('૮', "8"),
    ('૯', "9"),
];

/// Multi-codepoint clusters, matched before single letters.
pub const GUJARATI_CONJUNCTS: &[(&str, &str)] = &[("ક્ષ", "x"), ("જ્ઞ", "gn")];

lazy_static! {
    static ref DEFAULT_TABLE: PhoneticTable = PhoneticTable::gujarati();
}

/// The process-wide Gujarati table, built on first use.
pub fn default_table() -> &'static PhoneticTable {
    &DEFAULT_TABLE
}

/// Immutable character → Latin consonant mapping.
///
/// Built once from constant entries and only ever read afterwards, so a
/// single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct PhoneticTable {
    letters: AHashMap<char, &'static str>,
    conjuncts: Vec<(&'static str, &'static str)>,
}

impl Default for PhoneticTable {
    fn default() -> Self {
        Self::gujarati()
    }
}

impl PhoneticTable {
    /// Build a table from letter and conjunct entries.
    ///
    /// Conjuncts are tried longest first; letter keys are lowercased.
    pub fn from_entries(
        letters: &[(char, &'static str)],
        conjuncts: &[(&'static str, &'static str)],
    ) -> Self {
        let letters = letters
            .iter()
            .flat_map(|&(c, out)| c.to_lowercase().map(move |lc| (lc, out)))
            .collect();

        let mut conjuncts = conjuncts.to_vec();
        conjuncts.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self { letters, conjuncts }
    }

    /// Gujarati letters, digits and conjuncts
    pub fn gujarati() -> Self {
        Self::from_entries(GUJARATI_LETTERS, GUJARATI_CONJUNCTS)
    }

    /// Latin replacement for a single character, or `""` if unmapped.
    #[inline]
    pub fn lookup(&self, c: char) -> &'static str {
        self.letters.get(&c).copied().unwrap_or("")
    }

    /// Conjunct at the start of `text`, as (source byte length, replacement).
    #[inline]
    pub(crate) fn conjunct_at(&self, text: &str) -> Option<(usize, &'static str)> {
        self.conjuncts
            .iter()
            .find(|(src, _)| text.starts_with(*src))
            .map(|(src, out)| (src.len(), *out))
    }

    /// Number of single-letter entries
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty() && self.conjuncts.is_empty()
    }

    /// Reduce `text` to its skeleton using this table.
    pub fn skeleton(&self, text: &str) -> String {
        super::skeleton::skeleton_with(self, text)
    }
}
