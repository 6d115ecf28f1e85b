//! Form wizard engine and fuzzy search query builder for medicines
//! information portals.
//!
//! The web front ends that use this crate render pages; this crate holds the
//! parts with actual logic in them, none of which touch a network or a DOM:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  wizard      │     │  query       │────▶│  index_api       │
//! │ (steps,      │     │ (licence     │     │ (URL, $filter,   │
//! │  navigation, │     │  numbers,    │     │  response)       │
//! │  combine)    │     │  fuzzy terms)│     └──────────────────┘
//! └──────────────┘     └──────────────┘              │
//!        │                                           ▼
//!        ▼                                   ┌──────────────┐
//! ┌──────────────┐                           │  pagination  │
//! │  validation  │                           │ (page groups)│
//! │ (duplicates) │                           └──────────────┘
//! └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use medsearch::{build_fuzzy_query, pagination_groups, QueryConfig};
//!
//! let query = build_fuzzy_query("hello*", &QueryConfig::default());
//! assert_eq!(query, "hello~1 hello^4");
//!
//! let groups = pagination_groups(20, 10);
//! assert_eq!(groups.middle_group, vec![9, 10, 11]);
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod index_api;
pub mod pagination;
pub mod query;
mod types;
pub mod validation;
pub mod wizard;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::SearchConfig;
pub use error::{ConfigError, RequestError, ValidationError};
pub use index_api::{build_filter, SearchHit, SearchRequest, SearchResponse};
pub use pagination::{page_count, page_start_record, pagination_groups, pagination_window};
pub use query::{build_fuzzy_query, FuzzyStyle, QueryBuilder, QueryConfig};
pub use types::{
    DocType, FormRecord, PaginationGroups, SearchFilters, SortOrder, StepId, TerritoryType,
};
pub use wizard::{combine_step_data, Navigation, Step, StepKind, Wizard};
