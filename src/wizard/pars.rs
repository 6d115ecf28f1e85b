// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Step kinds for the PARs upload flow.
//!
//! Uploading a Public Assessment Report is one or more product pages, a file
//! page and a review page. Updating an existing report adds a lookup page in
//! front that finds the report to replace; its data only drives the lookup
//! and is never uploaded.

use super::step::{Step, StepKind};
use crate::error::ValidationError;
use crate::types::FormRecord;
use crate::validation::{require_fields, validate_product_step, validate_upload_name};
use serde::{Deserialize, Serialize};

/// Field holding the URL of the report being updated.
pub const PAR_URL_FIELD: &str = "par_url";
/// Field holding the uploaded file name.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParStep {
    /// Find the existing report to update.
    GetPar,
    /// One product covered by the report.
    Product,
    /// The report PDF.
    File,
    /// Summary before upload.
    Review,
}

impl StepKind for ParStep {
    fn name(&self) -> &str {
        match self {
            ParStep::GetPar => "get_par",
            ParStep::Product => "product",
            ParStep::File => "file",
            ParStep::Review => "review",
        }
    }

    fn participates_in_submission(&self) -> bool {
        !matches!(self, ParStep::GetPar)
    }
}

impl std::str::FromStr for ParStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get_par" => Ok(ParStep::GetPar),
            "product" => Ok(ParStep::Product),
            "file" => Ok(ParStep::File),
            "review" => Ok(ParStep::Review),
            other => Err(format!("unknown step type '{}'", other)),
        }
    }
}

/// Which upload flow the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParFlow {
    New,
    Update,
}

impl ParFlow {
    /// Initial step sequence for this flow.
    pub fn steps(self) -> Vec<Step<ParStep>> {
        match self {
            ParFlow::New => new_par_steps(),
            ParFlow::Update => update_par_steps(),
        }
    }
}

/// Product, file, review.
pub fn new_par_steps() -> Vec<Step<ParStep>> {
    [ParStep::Product, ParStep::File, ParStep::Review]
        .into_iter()
        .map(Step::new)
        .collect()
}

/// Lookup, then the new-report flow.
pub fn update_par_steps() -> Vec<Step<ParStep>> {
    std::iter::once(Step::new(ParStep::GetPar))
        .chain(new_par_steps())
        .collect()
}

/// Validation for whichever PARs page sits at `index`.
pub fn validate_par_step(
    steps: &[Step<ParStep>],
    index: usize,
    data: &FormRecord,
) -> Result<(), ValidationError> {
    match steps.get(index).map(|s| s.kind) {
        Some(ParStep::GetPar) => require_fields(data, &[PAR_URL_FIELD]),
        Some(ParStep::Product) => validate_product_step(steps, index, data),
        Some(ParStep::File) => {
            require_fields(data, &[FILE_FIELD])?;
            data.get_all(FILE_FIELD).try_for_each(validate_upload_name)
        }
        Some(ParStep::Review) | None => Ok(()),
    }
}
