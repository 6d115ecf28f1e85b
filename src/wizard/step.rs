// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::types::{FormRecord, StepId};
use serde::Serialize;
use std::fmt;

/// Tag identifying what a step renders and captures.
///
/// Implemented by the flow's own enum (see [`super::pars::ParStep`]) so each
/// flow gets a closed set of kinds instead of free-form strings.
pub trait StepKind: Clone + PartialEq + fmt::Debug {
    /// Stable name, used in logs and serialized output.
    fn name(&self) -> &str;

    /// Whether this step's data ends up in the combined submission.
    ///
    /// Lookup steps that only locate an existing record return `false`.
    fn participates_in_submission(&self) -> bool {
        true
    }
}

/// One page of a wizard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step<K> {
    pub id: StepId,
    #[serde(rename = "type")]
    pub kind: K,
    /// `None` until the step is submitted.
    pub data: Option<FormRecord>,
}

impl<K: StepKind> Step<K> {
    /// Fresh, unsubmitted step with a newly allocated id.
    pub fn new(kind: K) -> Self {
        Self {
            id: StepId::next(),
            kind,
            data: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.data.is_some()
    }
}
