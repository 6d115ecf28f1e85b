//! Search index requests and responses.

use crate::common::{param, test_config};
use medsearch::{
    build_filter, DocType, SearchFilters, SearchRequest, SearchResponse, SortOrder, TerritoryType,
};

#[test]
fn test_request_url_carries_query_and_paging() {
    let config = test_config();
    let url = SearchRequest::new("hello*").with_page(3).url(&config).unwrap();

    assert_eq!(url.host_str(), Some("mhraproducts.search.windows.net"));
    assert_eq!(url.path(), "/indexes/products-index/docs");
    assert_eq!(param(&url, "search").as_deref(), Some("hello~1 hello^4"));
    assert_eq!(param(&url, "$top").as_deref(), Some("10"));
    assert_eq!(param(&url, "$skip").as_deref(), Some("20"));
    assert_eq!(param(&url, "scoringProfile").as_deref(), Some("preferKeywords"));
    assert_eq!(param(&url, "$filter"), None);
}

#[test]
fn test_huge_page_saturates_skip() {
    let url = SearchRequest::new("x").with_page(usize::MAX).url(&test_config()).unwrap();
    assert_eq!(param(&url, "$skip"), Some(usize::MAX.to_string()));
}

#[test]
fn test_empty_search_matches_everything() {
    let url = SearchRequest::new("  ").url(&test_config()).unwrap();
    assert_eq!(param(&url, "search").as_deref(), Some("*"));
}

#[test]
fn test_filters_are_anded() {
    let filters = SearchFilters {
        doc_types: [DocType::Spc, DocType::Pil].into_iter().collect(),
        territory_types: [TerritoryType::Gb].into_iter().collect(),
        substance_name: Some("ibuprofen".to_string()),
        product_name: None,
        sort_order: SortOrder::AToZ,
    };
    let filter = build_filter(&filters).unwrap();
    assert!(filter.starts_with("(doc_type eq 'Spc' or doc_type eq 'Pil')"));
    assert!(filter.contains(" and (territory eq 'GB')"));
    assert!(filter.ends_with("substance_name/any(substance: substance eq 'IBUPROFEN')"));

    let url = SearchRequest::new("x")
        .with_filters(filters)
        .url(&test_config())
        .unwrap();
    assert_eq!(param(&url, "$orderby").as_deref(), Some("product_name asc"));
}

#[test]
fn test_response_decodes_count_and_hits() {
    let body = r#"{
        "@odata.count": 23,
        "value": [{
            "@search.score": 1.5,
            "@search.highlights": { "content": ["take <em>ibuprofen</em>", "with food"] },
            "doc_type": "Pil",
            "file_name": "pil.pdf",
            "metadata_storage_name": "pil.pdf",
            "metadata_storage_path": "https://example.invalid/pil.pdf",
            "metadata_storage_size": 1024,
            "product_name": "IBUPROFEN 200MG TABLETS",
            "substance_name": ["IBUPROFEN"],
            "title": "Ibuprofen",
            "created": "2020-01-01T00:00:00Z"
        }]
    }"#;
    let response = SearchResponse::from_json(body).unwrap();
    assert_eq!(response.count, 23);
    assert_eq!(response.results.len(), 1);
    assert_eq!(
        response.results[0].snippet().as_deref(),
        Some("take <em>ibuprofen</em> … with food")
    );
    assert_eq!(response.pagination(10, 1).first_group, vec![1, 2, 3]);
}

#[test]
fn test_malformed_response_is_an_error() {
    assert!(SearchResponse::from_json("not json").is_err());
}
