// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::step::{Step, StepKind};
use crate::contracts::{check_current_in_bounds, check_step_ids_unique, check_step_index};
use crate::types::{FormRecord, StepId};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// Where an operation left the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Navigation {
    /// The step at this index is now current.
    Moved(usize),
    /// Nothing changed; the index is the (unchanged) current position.
    Stayed(usize),
    /// The last step was submitted and the completion callback has run.
    Completed,
}

type CompletionCallback<'a, K> = Box<dyn FnMut(&[Step<K>]) + 'a>;

/// One form-fill attempt.
///
/// Owns the step sequence, the current position and the callback that
/// receives the full sequence once the final step is submitted. All
/// operations are synchronous and infallible; index misuse is caught by
/// debug contracts and clamped in release builds.
///
/// `go_back` at the first step stays on the first step rather than leaving
/// the wizard.
pub struct Wizard<'a, K: StepKind> {
    steps: Vec<Step<K>>,
    current: usize,
    completed: bool,
    on_complete: CompletionCallback<'a, K>,
}

impl<'a, K: StepKind> Wizard<'a, K> {
    /// Start a wizard with one fresh step per kind.
    pub fn new<I, F>(kinds: I, on_complete: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: FnMut(&[Step<K>]) + 'a,
    {
        Self::from_steps(kinds.into_iter().map(Step::new).collect(), on_complete)
    }

    /// Start a wizard from prepared steps (e.g. [`super::pars::ParFlow::steps`]).
    pub fn from_steps<F>(steps: Vec<Step<K>>, on_complete: F) -> Self
    where
        F: FnMut(&[Step<K>]) + 'a,
    {
        check_step_ids_unique(&steps.iter().map(|s| s.id).collect::<Vec<StepId>>());
        debug!(steps = steps.len(), "wizard started");
        Self {
            steps,
            current: 0,
            completed: false,
            on_complete: Box::new(on_complete),
        }
    }

    /// Discard all progress and start over with new steps.
    pub fn reset(&mut self, steps: Vec<Step<K>>) {
        debug!(steps = steps.len(), "wizard reset");
        self.steps = steps;
        self.current = 0;
        self.completed = false;
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn steps(&self) -> &[Step<K>] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Step on screen, or `None` once the wizard has completed.
    pub fn current(&self) -> Option<&Step<K>> {
        if self.completed {
            return None;
        }
        self.steps.get(self.current)
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Record `data` on the current step and move to the next one.
    ///
    /// Submitting the last step fires the completion callback with every
    /// step, submitted or not, and leaves the wizard with no current step.
    pub fn submit(&mut self, data: FormRecord) -> Navigation {
        if self.completed {
            trace!("submit ignored, wizard already complete");
            return Navigation::Stayed(self.current);
        }
        let Some(step) = self.steps.get_mut(self.current) else {
            trace!(index = self.current, "submit ignored, no current step");
            return Navigation::Stayed(self.current);
        };

        debug!(
            step = %step.id,
            kind = step.kind.name(),
            index = self.current,
            fields = data.len(),
            "step submitted"
        );
        step.data = Some(data);
        self.advance()
    }

    /// Insert a fresh step of the current kind after the current one, then
    /// submit `data` so the new step becomes current.
    pub fn repeat_page(&mut self, data: FormRecord) -> Navigation {
        let Some(kind) = self.current().map(|s| s.kind.clone()) else {
            trace!("repeat ignored, no current step");
            return Navigation::Stayed(self.current);
        };

        let step = Step::new(kind);
        debug!(
            step = %step.id,
            kind = step.kind.name(),
            at = self.current + 1,
            "step repeated"
        );
        self.steps.insert(self.current + 1, step);
        self.submit(data)
    }

    /// Move one step back. At the first step this stays put.
    pub fn go_back(&mut self) -> Navigation {
        if self.current == 0 {
            return Navigation::Stayed(0);
        }
        self.completed = false;
        self.current -= 1;
        debug!(index = self.current, "went back");
        Navigation::Moved(self.current)
    }

    /// Remove the step at `index`.
    ///
    /// The current index is left alone; callers that delete the step on
    /// screen navigate afterwards, usually with
    /// [`go_to_first_page_of_type`](Self::go_to_first_page_of_type).
    pub fn delete_page(&mut self, index: usize) -> Option<Step<K>> {
        check_step_index("delete_page", index, self.steps.len());
        if index >= self.steps.len() {
            return None;
        }
        let removed = self.steps.remove(index);
        debug!(step = %removed.id, kind = removed.kind.name(), index, "step deleted");
        Some(removed)
    }

    /// Delete the step at `index`, then move to the first remaining step of
    /// the same kind via [`Wizard::go_to_first_page_of_type`].
    pub fn delete_page_and_relocate(&mut self, index: usize) -> Option<Navigation> {
        let removed = self.delete_page(index)?;
        Some(self.go_to_first_page_of_type(&removed.kind))
    }

    /// Jump straight to the step at `index`.
    pub fn go_to_page(&mut self, index: usize) -> Navigation {
        check_step_index("go_to_page", index, self.steps.len());
        self.jump(index)
    }

    /// Jump to the first step of `kind`, but never further back than one
    /// step before the current position.
    ///
    /// With no step of that kind left, this lands one step back. That keeps
    /// deleting the last product from sending the user off the end.
    pub fn go_to_first_page_of_type(&mut self, kind: &K) -> Navigation {
        let first = self.steps.iter().position(|s| &s.kind == kind);
        let target = first.unwrap_or(0).max(self.current.saturating_sub(1));
        trace!(kind = kind.name(), ?first, target, "go to first page of type");
        self.jump(target)
    }

    fn jump(&mut self, index: usize) -> Navigation {
        if self.steps.is_empty() {
            self.current = 0;
            return Navigation::Stayed(0);
        }
        let index = index.min(self.steps.len() - 1);
        self.completed = false;
        self.current = index;
        debug!(index, "jumped");
        Navigation::Moved(index)
    }

    fn advance(&mut self) -> Navigation {
        self.current += 1;
        check_current_in_bounds(self.current, self.steps.len());

        if self.current >= self.steps.len() {
            self.completed = true;
            debug!(steps = self.steps.len(), "wizard complete");
            (self.on_complete)(&self.steps);
            return Navigation::Completed;
        }
        Navigation::Moved(self.current)
    }
}

impl<K: StepKind> fmt::Debug for Wizard<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("steps", &self.steps)
            .field("current", &self.current)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}
