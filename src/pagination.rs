// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pagination windowing for search result pages.
//!
//! Listing every page number stops working past a handful of pages. Instead
//! the control shows the first page, the last page, and a small window
//! around the current one, with an ellipsis wherever groups are not
//! adjacent:
//!
//! ```text
//! current = 2   →  1 2 3 … 20
//! current = 10  →  1 … 9 10 11 … 20
//! current = 19  →  1 … 18 19 20
//! ```
//!
//! Everything here is recomputed on each render, so it has to be pure.

use crate::contracts::check_pagination_groups;
use crate::types::PaginationGroups;

/// Below this many pages, every page is listed.
pub const MIN_WINDOWED_PAGES: usize = 6;

/// Number of pages for `result_count` results.
///
/// `floor(result_count / page_size) + 1`, so an exact multiple still gets a
/// trailing page. A zero page size is treated as one. Saturates at
/// `usize::MAX`.
pub fn page_count(result_count: usize, page_size: usize) -> usize {
    (result_count / page_size.max(1)).saturating_add(1)
}

/// Offset of the first record on `page` (1-based); the index's `$skip`.
///
/// Saturates at `usize::MAX` for pages past any real result set.
pub fn page_start_record(page: usize, page_size: usize) -> usize {
    page_size.saturating_mul(page.max(1) - 1)
}

/// Page groups for a control showing `current_page` of `page_count`.
///
/// `current_page` is clamped into `1..=page_count`.
pub fn pagination_groups(page_count: usize, current_page: usize) -> PaginationGroups {
    let page_count = page_count.max(1);
    let current = current_page.clamp(1, page_count);

    let groups = if page_count < MIN_WINDOWED_PAGES {
        PaginationGroups {
            first_group: (1..=page_count).collect(),
            ..PaginationGroups::default()
        }
    } else if current <= 3 {
        PaginationGroups {
            first_group: (1..=current + 1).collect(),
            middle_group: Vec::new(),
            last_group: vec![page_count],
        }
    } else if current >= page_count - 2 {
        PaginationGroups {
            first_group: vec![1],
            middle_group: Vec::new(),
            last_group: (current - 1..=page_count).collect(),
        }
    } else {
        PaginationGroups {
            first_group: vec![1],
            middle_group: vec![current - 1, current, current + 1],
            last_group: vec![page_count],
        }
    };

    check_pagination_groups(&groups, page_count);
    groups
}

/// [`pagination_groups`] straight from a result count.
pub fn pagination_window(
    result_count: usize,
    page_size: usize,
    current_page: usize,
) -> PaginationGroups {
    pagination_groups(page_count(result_count, page_size), current_page)
}
