// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for wizard action sequences.
//!
//! Random submits, repeats and in-range navigation against the PARs flows.
//! The wizard must never panic, its current index must stay inside the step
//! list until completion, and step ids must stay unique.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use medsearch::wizard::pars::{ParFlow, ParStep};
use medsearch::{FormRecord, Step, Wizard};
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
enum Action {
    Submit,
    Repeat,
    GoBack,
    GoToPage(u8),
    Delete(u8),
    FirstProduct,
}

fuzz_target!(|input: (bool, Vec<Action>)| {
    let (update, actions) = input;
    let flow = if update { ParFlow::Update } else { ParFlow::New };
    let mut wizard = Wizard::from_steps(flow.steps(), |_: &[Step<ParStep>]| {});

    for (i, action) in actions.into_iter().take(256).enumerate() {
        let len = wizard.steps().len();
        let data = FormRecord::from_pairs([("n", i.to_string())]);
        match action {
            Action::Submit => {
                wizard.submit(data);
            }
            Action::Repeat => {
                wizard.repeat_page(data);
            }
            Action::GoBack => {
                wizard.go_back();
            }
            Action::GoToPage(index) if (index as usize) < len => {
                wizard.go_to_page(index as usize);
            }
            Action::Delete(index) if (index as usize) < len && len > 1 => {
                wizard.delete_page(index as usize);
                if wizard.current_index() >= wizard.steps().len() {
                    wizard.go_to_first_page_of_type(&ParStep::Product);
                }
            }
            Action::FirstProduct => {
                wizard.go_to_first_page_of_type(&ParStep::Product);
            }
            _ => {}
        }

        if !wizard.is_complete() {
            assert!(wizard.current_index() < wizard.steps().len());
        }
        let ids: HashSet<_> = wizard.steps().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), wizard.steps().len());
    }
});
