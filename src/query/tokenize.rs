// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use regex::Regex;
use std::sync::LazyLock;

/// Runs of punctuation the index query parser would treat as syntax, plus
/// whitespace.
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,+\-!(){}\[\]^~*?:%/\s]+").expect("separator pattern is valid")
});

/// Words the query parser reads as boolean operators.
const OPERATOR_WORDS: [&str; 3] = ["AND", "OR", "NOT"];
const OPERATOR_SYMBOLS: [&str; 2] = ["||", "&&"];

/// Split `text` into non-empty words.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    SEPARATORS.split(text).filter(|w| !w.is_empty())
}

/// Prefix operator words with a backslash so they are searched literally.
pub fn escape_special_word(word: &str) -> String {
    let is_operator = OPERATOR_WORDS.iter().any(|op| word.eq_ignore_ascii_case(op))
        || OPERATOR_SYMBOLS.contains(&word);
    if is_operator {
        format!("\\{word}")
    } else {
        word.to_string()
    }
}
