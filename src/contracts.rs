// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the wizard and pagination engines.
//!
//! Debug-mode assertions for the invariants callers are trusted to uphold.
//! They cost nothing in release builds (`debug_assert!`), where the engines
//! clamp instead of panicking.
//!
//! | Contract Function           | Invariant                                       |
//! |-----------------------------|-------------------------------------------------|
//! | `check_step_index`          | `index < steps.len()` for navigation/deletion   |
//! | `check_step_ids_unique`     | no two live steps share an id                   |
//! | `check_current_in_bounds`   | `current <= steps.len()`                        |
//! | `check_pagination_groups`   | groups ascending, disjoint, within `1..=count`  |
//!
//! # Usage
//!
//! ```ignore
//! use medsearch::contracts::*;
//!
//! // In debug builds, this panics if the index is out of range
//! check_step_index("go_to_page", index, steps.len());
//! ```

use crate::types::{PaginationGroups, StepId};

// ============================================================================
// WIZARD CONTRACTS
// ============================================================================

/// Check that `index` addresses an existing step.
///
/// # Panics (debug builds only)
/// Panics if `index >= len`.
#[inline]
pub fn check_step_index(operation: &str, index: usize, len: usize) {
    debug_assert!(
        index < len,
        "Contract violation: {} - step index {} >= steps.len() {}",
        operation,
        index,
        len
    );
}

/// Check that the current pointer is at most one past the last step.
#[inline]
pub fn check_current_in_bounds(current: usize, len: usize) {
    debug_assert!(
        current <= len,
        "Contract violation: current index {} > steps.len() {}",
        current,
        len
    );
}

/// Check that no two steps share an id.
#[inline]
pub fn check_step_ids_unique(ids: &[StepId]) {
    for (i, id) in ids.iter().enumerate() {
        debug_assert!(
            !ids[..i].contains(id),
            "Contract violation: step id {} appears more than once",
            id
        );
    }
}

// ============================================================================
// PAGINATION CONTRACTS
// ============================================================================

/// Check that page groups are ascending, disjoint and inside `1..=page_count`.
///
/// # Panics (debug builds only)
/// Panics if a page number is out of range or the flattened groups are not
/// strictly increasing.
#[inline]
pub fn check_pagination_groups(groups: &PaginationGroups, page_count: usize) {
    let pages: Vec<usize> = groups.groups().flatten().copied().collect();

    for page in &pages {
        debug_assert!(
            (1..=page_count).contains(page),
            "Contract violation: page {} outside 1..={}",
            page,
            page_count
        );
    }

    for pair in pages.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: pages not strictly increasing ({} then {})",
            pair[0],
            pair[1]
        );
    }
}
