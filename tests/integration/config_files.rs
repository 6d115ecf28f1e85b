//! Loading search configuration from JSON files.

use std::io::Write;

use medsearch::config::MAX_FUZZINESS;
use medsearch::{ConfigError, FuzzyStyle, SearchConfig};
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write config");
    file
}

#[test]
fn test_minimal_file_takes_defaults() {
    let file = write_config(r#"{ "service": "products", "index": "products-index" }"#);
    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SearchConfig::new("products", "products-index"));
    assert_eq!(config.api_version, "2017-11-11");
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"{
            "service": "products",
            "index": "products-index",
            "api_key": "secret",
            "scoring_profile": "preferKeywords",
            "page_size": 25,
            "query": { "fuzziness": 2, "exactness_boost": 8, "style": "disjunction" }
        }"#,
    );
    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.page_size, 25);
    assert_eq!(config.query.fuzziness, MAX_FUZZINESS);
    assert_eq!(config.query.exactness_boost, 8.0);
    assert_eq!(config.query.style, FuzzyStyle::Disjunction);
}

#[test]
fn test_out_of_range_values_are_rejected() {
    for json in [
        r#"{ "service": "s", "index": "i", "page_size": 0 }"#,
        r#"{ "service": "s", "index": "i", "query": { "fuzziness": 3 } }"#,
        r#"{ "service": "s", "index": "i", "query": { "exactness_boost": -1 } }"#,
    ] {
        let file = write_config(json);
        let err = SearchConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }), "{}: {}", json, err);
    }
}

#[test]
fn test_unparseable_file() {
    let file = write_config("{ service = products }");
    let err = SearchConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SearchConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
