// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request and response shapes for the external search index.
//!
//! The index is an Azure Cognitive Search service queried over plain GET
//! requests. This module builds those request URLs (fuzzy query, paging,
//! OData filter, ordering) and decodes the JSON that comes back. Sending the
//! request is left to the caller.

use crate::config::SearchConfig;
use crate::error::RequestError;
use crate::pagination::{pagination_window, page_start_record};
use crate::query::QueryBuilder;
use crate::types::{PaginationGroups, SearchFilters, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Lucene match-all, sent when the user's text normalizes to nothing.
const MATCH_ALL: &str = "*";

// ============================================================================
// FILTERS
// ============================================================================

/// Quote a value as an OData string literal.
fn odata_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// OData `$filter` expression for `filters`, or `None` when nothing filters.
///
/// Each present clause is AND-ed. Doc types and territories are OR-ed
/// within their own parenthesized clause. Names are matched exactly,
/// uppercased, as the index stores them.
pub fn build_filter(filters: &SearchFilters) -> Option<String> {
    let mut clauses: Vec<String> = Vec::new();

    if !filters.doc_types.is_empty() {
        let any: Vec<String> = filters
            .doc_types
            .iter()
            .map(|d| format!("doc_type eq {}", odata_literal(d.as_str())))
            .collect();
        clauses.push(format!("({})", any.join(" or ")));
    }

    if !filters.territory_types.is_empty() {
        let any: Vec<String> = filters
            .territory_types
            .iter()
            .map(|t| format!("territory eq {}", odata_literal(t.as_str())))
            .collect();
        clauses.push(format!("({})", any.join(" or ")));
    }

    if let Some(substance) = non_blank(&filters.substance_name) {
        clauses.push(format!(
            "substance_name/any(substance: substance eq {})",
            odata_literal(&substance.to_uppercase())
        ));
    }

    if let Some(product) = non_blank(&filters.product_name) {
        clauses.push(format!(
            "product_name eq {}",
            odata_literal(&product.to_uppercase())
        ));
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" and "))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `$orderby` value for a sort order; relevance is the index default.
pub fn order_by(sort: SortOrder) -> Option<&'static str> {
    match sort {
        SortOrder::Relevance => None,
        SortOrder::AToZ => Some("product_name asc"),
        SortOrder::ZToA => Some("product_name desc"),
    }
}

// ============================================================================
// REQUEST
// ============================================================================

/// One page of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Raw user text, before normalization.
    pub text: String,
    /// 1-based page number.
    pub page: usize,
    pub filters: SearchFilters,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: 1,
            filters: SearchFilters::default(),
        }
    }
}

impl SearchRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Query parameters in the order they are sent.
    pub fn params(&self, config: &SearchConfig) -> Vec<(&'static str, String)> {
        let query = QueryBuilder::new(config.query.clone()).build(&self.text);
        let search = if query.is_empty() {
            MATCH_ALL.to_string()
        } else {
            query
        };

        let mut params = vec![
            ("api-key", config.api_key.clone()),
            ("api-version", config.api_version.clone()),
            ("highlight", "content".to_string()),
            ("queryType", "full".to_string()),
            ("$count", "true".to_string()),
            ("$top", config.page_size.to_string()),
            ("$skip", page_start_record(self.page, config.page_size).to_string()),
            ("search", search),
            ("scoringProfile", config.scoring_profile.clone()),
            ("searchMode", "all".to_string()),
        ];
        if let Some(filter) = build_filter(&self.filters) {
            params.push(("$filter", filter));
        }
        if let Some(order) = order_by(self.filters.sort_order) {
            params.push(("$orderby", order.to_string()));
        }
        params
    }

    /// Full GET URL for this request.
    pub fn url(&self, config: &SearchConfig) -> Result<Url, RequestError> {
        let mut url = Url::parse(&format!(
            "https://{}.search.windows.net/indexes/{}/docs",
            config.service, config.index
        ))?;
        url.query_pairs_mut().extend_pairs(self.params(config));
        debug!(page = self.page, text = %self.text, "built search url");
        Ok(url)
    }
}

// ============================================================================
// RESPONSE
// ============================================================================

/// Highlighted fragments for one hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Highlights {
    #[serde(default)]
    pub content: Vec<String>,
}

/// One matching document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    #[serde(rename = "@search.score")]
    pub score: f64,
    #[serde(rename = "@search.highlights")]
    pub highlights: Option<Highlights>,
    pub doc_type: Option<String>,
    pub file_name: Option<String>,
    pub metadata_storage_name: Option<String>,
    pub metadata_storage_path: Option<String>,
    pub metadata_storage_size: Option<u64>,
    pub product_name: Option<String>,
    pub substance_name: Vec<String>,
    pub title: Option<String>,
    pub created: Option<String>,
    pub territory: Option<String>,
}

impl SearchHit {
    /// Highlighted fragments joined for display, if any.
    pub fn snippet(&self) -> Option<String> {
        self.highlights
            .as_ref()
            .filter(|h| !h.content.is_empty())
            .map(|h| h.content.join(" … "))
    }
}

/// Decoded search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total matches across all pages.
    #[serde(rename = "@odata.count", default)]
    pub count: usize,
    #[serde(rename = "value", default)]
    pub results: Vec<SearchHit>,
}

impl SearchResponse {
    pub fn from_json(text: &str) -> Result<Self, RequestError> {
        let response: Self = serde_json::from_str(text)?;
        debug!(count = response.count, hits = response.results.len(), "decoded search response");
        Ok(response)
    }

    /// Pagination control for this response shown at `current_page`.
    pub fn pagination(&self, page_size: usize, current_page: usize) -> PaginationGroups {
        pagination_window(self.count, page_size, current_page)
    }
}
