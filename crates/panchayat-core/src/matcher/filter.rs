//! Stateless candidate filtering

use super::query::Query;
use crate::phonetic::{default_table, PhoneticTable};
use crate::record::Searchable;

/// Filter `candidates` by `query` using the default Gujarati table.
///
/// Returns the candidates unchanged for an empty query; otherwise the
/// subset matching every term, in input order.
pub fn filter_candidates<R>(query: &str, candidates: &[R]) -> Vec<R>
where
    R: Searchable + Clone,
{
    filter_candidates_with(default_table(), query, candidates)
}

/// Filter `candidates` by `query` with an explicit phonetic table.
pub fn filter_candidates_with<R>(table: &PhoneticTable, query: &str, candidates: &[R]) -> Vec<R>
where
    R: Searchable + Clone,
{
    let query = Query::parse_with(table, query);
    if query.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|candidate| {
            let text = candidate.searchable_text();
            query.matches_lazy(&text, || table.skeleton(&text))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Beneficiary, BeneficiaryBuilder};

    fn records() -> Vec<Beneficiary> {
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
                .name("શાહ નિલેશ જયંતીલાલ")
                .account_number("30955550000")
                .village("ભુજ")
                .build(),
            BeneficiaryBuilder::new()
                .id("3")
                .application_number("APP-2024-003")
                .name("Vaghela Farida")
                .account_number("30977771234")
                .village("Bharada")
                .build(),
        ]
    }

    fn ids(found: &[Beneficiary]) -> Vec<&str> {
        found.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_phonetic_cross_script() {
        let found = filter_candidates("ramesh", &records());
        assert_eq!(ids(&found), vec!["1"]);
    }

    #[test]
    fn test_latin_query_matches_both_scripts() {
        let found = filter_candidates("bharada", &records());
        assert_eq!(ids(&found), vec!["1", "3"]);
    }

    #[test]
    fn test_gujarati_query_matches_latin_record() {
        // વાઘેલા → vgl, Vaghela → vgl
        let found = filter_candidates("વાઘેલા", &records());
        assert_eq!(ids(&found), vec!["3"]);
    }

    #[test]
    fn test_variant_consonants() {
        // f → p and w → v fold onto the same skeleton
        let found = filter_candidates("pareeda", &records());
        assert_eq!(ids(&found), vec!["3"]);
        let found = filter_candidates("waghela", &records());
        assert_eq!(ids(&found), vec!["3"]);
    }

    #[test]
    fn test_and_semantics() {
        let found = filter_candidates("nilesh bharada", &records());
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_query_identity() {
        let all = records();
        assert_eq!(filter_candidates("", &all), all);
        assert_eq!(filter_candidates("   ", &all), all);
    }

    #[test]
    fn test_vowel_only_term_matches_literally_only() {
        // "ઈ" has an empty skeleton but occurs literally in record 1
        let found = filter_candidates("ઈ", &records());
        assert_eq!(ids(&found), vec!["1"]);

        // "ü" occurs nowhere and has an empty skeleton
        let found = filter_candidates("ü", &records());
        assert!(found.is_empty());
    }

    #[test]
    fn test_plain_strings_are_searchable() {
        let names = vec!["Ramesh".to_string(), "Suresh".to_string()];
        let found = filter_candidates("રમેશ", &names);
        assert_eq!(found, vec!["Ramesh".to_string()]);
    }
}
