// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pagination windows.
//!
//! Any result count, page size and current page (including zero and values
//! past the last page) must produce strictly ascending groups that start at
//! page 1, end at the last page and show the clamped current page.

#![no_main]

use libfuzzer_sys::fuzz_target;
use medsearch::{page_count, pagination_window};

fuzz_target!(|input: (u32, u16, u32)| {
    let (results, page_size, current) = input;
    let (results, page_size, current) = (results as usize, page_size as usize, current as usize);

    let pages = page_count(results, page_size);
    let groups = pagination_window(results, page_size, current);
    let shown: Vec<usize> = groups.groups().flatten().copied().collect();

    assert!(shown.windows(2).all(|w| w[0] < w[1]), "{:?}", groups);
    assert_eq!(shown.first(), Some(&1));
    assert_eq!(shown.last(), Some(&pages));
    assert!(shown.contains(&current.clamp(1, pages)), "{:?}", groups);
});
