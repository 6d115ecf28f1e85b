// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query normalization.
//!
//! Arbitrary text goes into the normalizer. It must never panic, every term
//! it emits must carry the configured fuzziness or boost suffix, and no term
//! may contain a character the tokenizer splits on.

#![no_main]

use libfuzzer_sys::fuzz_target;
use medsearch::{build_fuzzy_query, FuzzyStyle, QueryConfig};

const SEPARATORS: &str = ",+-!(){}[]~*?:%/";

fuzz_target!(|input: (&str, u8, bool)| {
    let (text, fuzziness, disjunction) = input;
    let config = QueryConfig {
        fuzziness: fuzziness % 3,
        exactness_boost: 4.0,
        style: if disjunction {
            FuzzyStyle::Disjunction
        } else {
            FuzzyStyle::Adjacent
        },
    };

    let query = build_fuzzy_query(text, &config);
    assert_eq!(query, build_fuzzy_query(text, &config), "not deterministic");

    if config.style == FuzzyStyle::Adjacent {
        let fuzzy = format!("~{}", config.fuzziness);
        for term in query.split(' ').filter(|t| !t.is_empty()) {
            let body = term
                .strip_suffix(fuzzy.as_str())
                .or_else(|| term.strip_suffix("^4"))
                .unwrap_or_else(|| panic!("term {:?} has no suffix", term));
            assert!(!body.is_empty(), "empty term in {:?}", query);
            assert!(
                !body.chars().any(|c| SEPARATORS.contains(c) || c.is_whitespace()),
                "separator left in term {:?}",
                term
            );
        }
    }
});
