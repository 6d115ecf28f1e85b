// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Step validation that runs before a wizard step is submitted.
//!
//! The wizard accepts whatever it is given; these checks are what the UI
//! runs first. The interesting one is the duplicate licence check, which
//! looks across steps rather than at a single field: each product page holds
//! one licence number, and two product pages may not hold the same one.

use crate::error::ValidationError;
use crate::types::FormRecord;
use crate::wizard::{Step, StepKind};
use tracing::debug;

/// Field holding the licence type (`PL`, `PLGB`, `PLNI`, `THR`, `NR`).
pub const LICENCE_TYPE_FIELD: &str = "product_licence_type";
/// Field holding the five-digit licence part.
pub const LICENCE_PART_ONE_FIELD: &str = "product_licence_part_one";
/// Field holding the four-digit licence part.
pub const LICENCE_PART_TWO_FIELD: &str = "product_licence_part_two";

const LICENCE_FIELDS: [&str; 3] = [
    LICENCE_TYPE_FIELD,
    LICENCE_PART_ONE_FIELD,
    LICENCE_PART_TWO_FIELD,
];

/// Composite identity of a licence number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenceKey {
    pub kind: String,
    pub part_one: String,
    pub part_two: String,
}

impl LicenceKey {
    /// Read the key from a product record. `None` unless all three parts
    /// are present; comparison ignores case and surrounding whitespace.
    pub fn from_record(record: &FormRecord) -> Option<Self> {
        let part = |field: &str| {
            record
                .get(field)
                .map(|v| v.trim().to_ascii_uppercase())
                .filter(|v| !v.is_empty())
        };
        Some(Self {
            kind: part(LICENCE_TYPE_FIELD)?,
            part_one: part(LICENCE_PART_ONE_FIELD)?,
            part_two: part(LICENCE_PART_TWO_FIELD)?,
        })
    }
}

impl std::fmt::Display for LicenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/{}", self.kind, self.part_one, self.part_two)
    }
}

/// Reject `candidate` if another step of the same kind already recorded the
/// same licence number.
///
/// `index` is the position of the step being submitted; its own previously
/// recorded data is ignored so resubmitting an unchanged page passes.
pub fn check_duplicate_licence<K: StepKind>(
    steps: &[Step<K>],
    index: usize,
    candidate: &FormRecord,
) -> Result<(), ValidationError> {
    let Some(kind) = steps.get(index).map(|s| &s.kind) else {
        return Ok(());
    };
    let Some(key) = LicenceKey::from_record(candidate) else {
        return Ok(());
    };

    let collision = steps
        .iter()
        .enumerate()
        .filter(|(i, s)| *i != index && &s.kind == kind)
        .filter_map(|(i, s)| s.data.as_ref().map(|d| (i, d)))
        .find(|(_, data)| LicenceKey::from_record(data).as_ref() == Some(&key));

    match collision {
        Some((other, _)) => {
            debug!(licence = %key, index, other, "duplicate licence number");
            Err(ValidationError::DuplicateLicence {
                fields: LICENCE_FIELDS.to_vec(),
            })
        }
        None => Ok(()),
    }
}

/// First of `fields` that is absent or blank in `record`.
pub fn require_fields(record: &FormRecord, fields: &[&str]) -> Result<(), ValidationError> {
    for field in fields {
        let present = record.get_all(field).any(|v| !v.trim().is_empty());
        if !present {
            return Err(ValidationError::MissingField {
                field: (*field).to_string(),
            });
        }
    }
    Ok(())
}

/// Only PDF uploads are accepted.
pub fn validate_upload_name(name: &str) -> Result<(), ValidationError> {
    let is_pdf = std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFileType {
            name: name.to_string(),
        })
    }
}

/// Everything a product page must pass before it is submitted or repeated.
pub fn validate_product_step<K: StepKind>(
    steps: &[Step<K>],
    index: usize,
    candidate: &FormRecord,
) -> Result<(), ValidationError> {
    require_fields(candidate, &["product_name"])?;
    require_fields(candidate, &LICENCE_FIELDS)?;
    check_duplicate_licence(steps, index, candidate)
}
