//! Shared test utilities and fixtures.

#![allow(dead_code)]

use medsearch::validation::{LICENCE_PART_ONE_FIELD, LICENCE_PART_TWO_FIELD, LICENCE_TYPE_FIELD};
use medsearch::wizard::pars::{ParStep, FILE_FIELD};
use medsearch::wizard::script::WizardAction;
use medsearch::{FormRecord, PaginationGroups, SearchConfig, Step};

// ============================================================================
// FORM FIXTURES
// ============================================================================

/// Product page data for licence `PL <one>/<two>`.
pub fn product(name: &str, one: &str, two: &str) -> FormRecord {
    product_with_type(name, "PL", one, two)
}

pub fn product_with_type(name: &str, kind: &str, one: &str, two: &str) -> FormRecord {
    FormRecord::from_pairs([
        ("product_name", name),
        (LICENCE_TYPE_FIELD, kind),
        (LICENCE_PART_ONE_FIELD, one),
        (LICENCE_PART_TWO_FIELD, two),
    ])
}

/// File page data for an upload called `name`.
pub fn upload(name: &str) -> FormRecord {
    FormRecord::from_pairs([(FILE_FIELD, name)])
}

/// Lookup page data for the update flow.
pub fn lookup(url: &str) -> FormRecord {
    FormRecord::from_pairs([("par_url", url)])
}

pub fn submit(data: FormRecord) -> WizardAction<ParStep> {
    WizardAction::Submit { data }
}

pub fn repeat(data: FormRecord) -> WizardAction<ParStep> {
    WizardAction::RepeatPage { data }
}

/// Step kinds in order.
pub fn kinds(steps: &[Step<ParStep>]) -> Vec<ParStep> {
    steps.iter().map(|s| s.kind).collect()
}

// ============================================================================
// SEARCH FIXTURES
// ============================================================================

pub fn test_config() -> SearchConfig {
    let mut config = SearchConfig::new("mhraproducts", "products-index");
    config.api_key = "secret".to_string();
    config.scoring_profile = "preferKeywords".to_string();
    config
}

/// Look up a query parameter by name on a built URL.
pub fn param(url: &url::Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

// ============================================================================
// INVARIANT CHECKERS
// ============================================================================

/// Assert that pagination groups are well-formed for `page_count` pages.
pub fn assert_groups_well_formed(groups: &PaginationGroups, page_count: usize) {
    let all: Vec<usize> = groups.groups().flatten().copied().collect();
    assert!(!all.is_empty(), "no pages shown for {} pages", page_count);
    assert!(
        all.windows(2).all(|w| w[0] < w[1]),
        "pages not strictly ascending: {:?}",
        groups
    );
    assert_eq!(all.first(), Some(&1), "first page missing: {:?}", groups);
    assert_eq!(all.last(), Some(&page_count), "last page missing: {:?}", groups);
    assert!(all.len() <= 5, "too many pages shown: {:?}", groups);
}
