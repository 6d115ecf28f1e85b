// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Licence type, five digits, four digits, with any mix of spaces, slashes,
/// underscores or dashes between the parts.
static LICENCE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\s?)(PLGB|PLNI|PL|THR|NR)[\s/_-]*([0-9]{5})[\s/_-]*([0-9]{4})")
        .expect("licence number pattern is valid")
});

/// Rewrite every licence number in `text` as `TYPE` + 5 digits + 4 digits.
///
/// `"pl 12345 6789"` becomes `"PL123456789"`. No separator is kept between
/// the digit groups: a `/` would split the number during tokenization.
pub fn canonicalize_licence_numbers(text: &str) -> Cow<'_, str> {
    LICENCE_NUMBER.replace_all(text, |caps: &Captures<'_>| {
        format!(
            "{}{}{}{}",
            &caps[1],
            caps[2].to_ascii_uppercase(),
            &caps[3],
            &caps[4]
        )
    })
}
