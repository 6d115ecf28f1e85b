// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::step::{Step, StepKind};
use crate::types::FormRecord;

/// Merge the captured data of every submitting step into one record.
///
/// Steps whose kind opts out of submission are skipped, as are steps that
/// were never submitted. Nothing is overwritten: entries are concatenated in
/// step order, then in the order each step recorded them, so a key repeated
/// across steps (one product name per product step) keeps every value.
pub fn combine_step_data<K: StepKind>(steps: &[Step<K>]) -> FormRecord {
    let mut combined = FormRecord::new();
    for step in steps {
        if !step.kind.participates_in_submission() {
            continue;
        }
        if let Some(data) = &step.data {
            combined.extend(data);
        }
    }
    combined
}
