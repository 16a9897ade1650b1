//! Skeleton reduction

use super::table::{default_table, PhoneticTable};

/// Reduce `text` to its phonetic skeleton using the default Gujarati table.
///
/// Total and deterministic: the result only ever contains `[a-z0-9]` and may
/// be empty.
pub fn normalize_to_skeleton(text: &str) -> String {
    skeleton_with(default_table(), text)
}

pub(crate) fn skeleton_with(table: &PhoneticTable, text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());

    let mut rest = lower.as_str();
    while let Some(c) = rest.chars().next() {
        if c.is_ascii() {
            push_latin(&mut out, c);
            rest = &rest[1..];
            continue;
        }

        if let Some((len, replacement)) = table.conjunct_at(rest) {
            replacement.chars().for_each(|r| push_latin(&mut out, r));
            rest = &rest[len..];
            continue;
        }

        table
            .lookup(c)
            .chars()
            .for_each(|r| push_latin(&mut out, r));
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Apply the Latin folding rules to one already-mapped character.
#[inline]
fn push_latin(out: &mut String, c: char) {
    match c {
        'h' | 'a' | 'e' | 'i' | 'o' | 'u' => {}
        'z' => out.push('j'),
        'w' => out.push('v'),
        'f' => out.push('p'),
        'a'..='z' | '0'..='9' => out.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_latin_folding() {
        assert_eq!(normalize_to_skeleton("Ramesh"), "rms");
        assert_eq!(normalize_to_skeleton("bharada"), "brd");
        assert_eq!(normalize_to_skeleton("Zaveri"), "jvr");
        assert_eq!(normalize_to_skeleton("Farida"), "prd");
        assert_eq!(normalize_to_skeleton("Wagh"), "vg");
    }

    #[test]
    fn test_gujarati_mapping() {
        assert_eq!(normalize_to_skeleton("રમેશ"), "rms");
        assert_eq!(normalize_to_skeleton("ભરાડા"), "brd");
        assert_eq!(normalize_to_skeleton("પટેલ"), "ptl");
    }

    #[test]
    fn test_full_name_skeleton() {
        assert_eq!(
            normalize_to_skeleton("પટેલ રમેશભાઈ કાન્તિભાઈ"),
            "ptlrmsbkntb"
        );
    }

    #[test]
    fn test_conjuncts() {
        assert_eq!(normalize_to_skeleton("લક્ષ્મણ"), "lxmn");
        assert_eq!(normalize_to_skeleton("જ્ઞાન"), "gnn");
    }

    #[test]
    fn test_anusvara_and_digits() {
        assert_eq!(normalize_to_skeleton("સંજય"), "snjy");
        assert_eq!(normalize_to_skeleton("sanjay"), "snjy");
        assert_eq!(normalize_to_skeleton("૩૦૯"), "309");
    }

    #[test]
    fn test_punctuation_and_digits_kept_or_dropped() {
        assert_eq!(normalize_to_skeleton("APP-2024-001"), "pp2024001");
        assert_eq!(normalize_to_skeleton("  ...  "), "");
    }

    #[test]
    fn test_empty_and_unmapped() {
        assert_eq!(normalize_to_skeleton(""), "");
        assert_eq!(normalize_to_skeleton("aeiou"), "");
        assert_eq!(normalize_to_skeleton("ાેૈ"), "");
        assert_eq!(normalize_to_skeleton("日本"), "");
    }

    #[test]
    fn test_output_alphabet() {
        let s = normalize_to_skeleton("Ünïcödé પટેલ Straße 42!");
        assert!(s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_custom_table_injection() {
        let table = PhoneticTable::from_entries(&[('ж', "zh"), ('к', "k"), ('в', "v")], &[]);
        // zh folds through the Latin rules: h dropped, z → j
        assert_eq!(table.skeleton("Жукова"), "jkv");
    }
}
