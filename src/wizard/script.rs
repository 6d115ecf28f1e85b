// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serializable wizard actions.
//!
//! UI events arrive as data (from the browser bindings, or a JSON script fed
//! to the CLI). Each one maps onto exactly one wizard operation; submits and
//! repeats run the caller's validation first and are dropped when it fails.

use super::session::{Navigation, Wizard};
use super::step::{Step, StepKind};
use crate::error::ValidationError;
use crate::types::FormRecord;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WizardAction<K> {
    Submit {
        #[serde(default)]
        data: FormRecord,
    },
    RepeatPage {
        #[serde(default)]
        data: FormRecord,
    },
    GoBack,
    DeletePage {
        index: usize,
    },
    GoToPage {
        index: usize,
    },
    GoToFirstPageOfType {
        #[serde(rename = "type")]
        kind: K,
    },
}

/// Apply `action`, running `validate` on the data of submits and repeats.
///
/// `DeletePage` reports where the wizard stands afterwards as `Stayed`.
/// `DeletePage` and `GoToPage` with an index past the last step are
/// rejected with [`ValidationError::NoSuchStep`] and change nothing.
pub fn apply<K, V>(
    wizard: &mut Wizard<'_, K>,
    action: WizardAction<K>,
    validate: V,
) -> Result<Navigation, ValidationError>
where
    K: StepKind,
    V: Fn(&[Step<K>], usize, &FormRecord) -> Result<(), ValidationError>,
{
    match action {
        WizardAction::Submit { data } => {
            validate(wizard.steps(), wizard.current_index(), &data)?;
            Ok(wizard.submit(data))
        }
        WizardAction::RepeatPage { data } => {
            validate(wizard.steps(), wizard.current_index(), &data)?;
            Ok(wizard.repeat_page(data))
        }
        WizardAction::GoBack => Ok(wizard.go_back()),
        WizardAction::DeletePage { index } => {
            step_in_range(wizard, index)?;
            wizard.delete_page(index);
            Ok(Navigation::Stayed(wizard.current_index()))
        }
        WizardAction::GoToPage { index } => {
            step_in_range(wizard, index)?;
            Ok(wizard.go_to_page(index))
        }
        WizardAction::GoToFirstPageOfType { kind } => Ok(wizard.go_to_first_page_of_type(&kind)),
    }
}

fn step_in_range<K>(wizard: &Wizard<'_, K>, index: usize) -> Result<(), ValidationError>
where
    K: StepKind,
{
    let len = wizard.steps().len();
    if index >= len {
        return Err(ValidationError::NoSuchStep { index, len });
    }
    Ok(())
}

/// Outcome of replaying a script against a fresh wizard.
#[derive(Debug)]
pub struct Replay<K> {
    /// One entry per action, in order.
    pub outcomes: Vec<Result<Navigation, ValidationError>>,
    /// Steps handed to the completion callback, if the wizard completed.
    pub completed: Option<Vec<Step<K>>>,
    /// Steps as they stood after the last action.
    pub steps: Vec<Step<K>>,
}

/// Run `actions` in order against a wizard over `steps`.
///
/// Actions after completion are still applied; the wizard ignores submits
/// once complete, but navigation can reopen it.
pub fn replay<K, V>(steps: Vec<Step<K>>, actions: Vec<WizardAction<K>>, validate: V) -> Replay<K>
where
    K: StepKind,
    V: Fn(&[Step<K>], usize, &FormRecord) -> Result<(), ValidationError>,
{
    let completed: RefCell<Option<Vec<Step<K>>>> = RefCell::new(None);
    let mut wizard = Wizard::from_steps(steps, |steps: &[Step<K>]| {
        *completed.borrow_mut() = Some(steps.to_vec());
    });

    let mut outcomes = Vec::with_capacity(actions.len());
    for (i, action) in actions.into_iter().enumerate() {
        let outcome = apply(&mut wizard, action, &validate);
        if let Err(err) = &outcome {
            debug!(action = i, error = %err, "action rejected");
        }
        outcomes.push(outcome);
    }

    let steps = wizard.steps().to_vec();
    drop(wizard);
    Replay {
        outcomes,
        completed: completed.into_inner(),
        steps,
    }
}
