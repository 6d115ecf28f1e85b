// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization for the external full-text index.
//!
//! Users type free text. The index wants Lucene syntax. In between:
//!
//! 1. Licence numbers typed any which way ("pl 12345/6789", "PL-12345-6789")
//!    collapse to the one form the index stores.
//! 2. The text splits into words on punctuation the query parser would
//!    otherwise interpret.
//! 3. Words the parser treats as operators (`AND`, `||`, ...) get escaped.
//! 4. Each word becomes a fuzzy term plus a boosted exact term, so typos
//!    still match but exact spellings rank first.

mod licence;
mod tokenize;

pub use licence::canonicalize_licence_numbers;
pub use tokenize::{escape_special_word, tokenize};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// How each word's fuzzy and exact terms are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyStyle {
    /// `word~F word^B`
    #[default]
    Adjacent,
    /// `(word~F || word^B)`
    Disjunction,
}

/// Fuzzy query settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Maximum edit distance per word.
    pub fuzziness: u8,
    /// Score multiplier for the exact term.
    pub exactness_boost: f64,
    pub style: FuzzyStyle,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            fuzziness: 1,
            exactness_boost: 4.0,
            style: FuzzyStyle::Adjacent,
        }
    }
}

/// Turns user input into index query strings with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: QueryConfig,
}

impl QueryBuilder {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Normalize and fuzzify `query`. Empty or punctuation-only input
    /// yields an empty string.
    pub fn build(&self, query: &str) -> String {
        let canonical = canonicalize_licence_numbers(query);
        let terms: Vec<String> = tokenize(&canonical)
            .map(escape_special_word)
            .map(|word| self.fuzzify(&word))
            .collect();

        let built = terms.join(" ");
        trace!(input = query, output = %built, "built fuzzy query");
        built
    }

    fn fuzzify(&self, word: &str) -> String {
        let QueryConfig {
            fuzziness,
            exactness_boost,
            style,
        } = &self.config;
        match style {
            FuzzyStyle::Adjacent => format!("{word}~{fuzziness} {word}^{exactness_boost}"),
            FuzzyStyle::Disjunction => format!("({word}~{fuzziness} || {word}^{exactness_boost})"),
        }
    }
}

/// One-shot form of [`QueryBuilder::build`].
pub fn build_fuzzy_query(query: &str, config: &QueryConfig) -> String {
    QueryBuilder::new(config.clone()).build(query)
}
