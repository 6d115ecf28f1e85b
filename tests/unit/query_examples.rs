//! Query normalization through the public API.

use medsearch::{build_fuzzy_query, FuzzyStyle, QueryBuilder, QueryConfig};

fn default_query(text: &str) -> String {
    build_fuzzy_query(text, &QueryConfig::default())
}

#[test]
fn test_wildcard_is_a_separator() {
    assert_eq!(default_query("hello*"), "hello~1 hello^4");
}

#[test]
fn test_product_name_with_brackets_and_slash() {
    assert_eq!(
        default_query("K/L POULTICE (KAOLIN POULTICE BP)"),
        "K~1 K^4 L~1 L^4 POULTICE~1 POULTICE^4 KAOLIN~1 KAOLIN^4 POULTICE~1 POULTICE^4 BP~1 BP^4"
    );
}

#[test]
fn test_empty_and_punctuation_only() {
    assert_eq!(default_query(""), "");
    assert_eq!(default_query("   "), "");
    assert_eq!(default_query("(*) / -- ?"), "");
}

#[test]
fn test_licence_number_spellings_agree() {
    let expected = default_query("PL 12345/6789");
    for spelling in ["pl12345 6789", "PL-12345-6789", "Pl_12345_6789", "PL123456789"] {
        assert_eq!(default_query(spelling), expected, "spelling {:?}", spelling);
    }
    assert_eq!(expected, "PL123456789~1 PL123456789^4");
}

#[test]
fn test_licence_number_inside_text() {
    assert_eq!(
        default_query("ibuprofen thr 12345 6789"),
        "ibuprofen~1 ibuprofen^4 THR123456789~1 THR123456789^4"
    );
}

#[test]
fn test_operators_are_escaped() {
    assert_eq!(
        default_query("paracetamol and codeine"),
        "paracetamol~1 paracetamol^4 \\and~1 \\and^4 codeine~1 codeine^4"
    );
    assert_eq!(default_query("||"), "\\||~1 \\||^4");
}

#[test]
fn test_configured_fuzziness_and_boost() {
    let builder = QueryBuilder::new(QueryConfig {
        fuzziness: 2,
        exactness_boost: 1.5,
        style: FuzzyStyle::Disjunction,
    });
    assert_eq!(builder.build("aspirin"), "(aspirin~2 || aspirin^1.5)");
    assert_eq!(builder.config().fuzziness, 2);
}
