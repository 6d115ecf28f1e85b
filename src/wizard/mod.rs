// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-step form wizard.
//!
//! A wizard is an ordered list of steps plus a pointer to the one on screen.
//! The list is not fixed: "add another product" inserts a fresh step of the
//! same kind, and "remove this product" deletes one. When the last step is
//! submitted the whole sequence goes to a completion callback, and
//! [`combine_step_data`] flattens it into the record that gets uploaded.

mod combine;
pub mod pars;
pub mod script;
mod session;
mod step;

pub use combine::combine_step_data;
pub use script::WizardAction;
pub use session::{Navigation, Wizard};
pub use step::{Step, StepKind};
