//! Wizard transition properties.
//!
//! 1. **Completion length**: the callback receives one step per submit or
//!    repeat made before completion
//! 2. **Repeat placement**: a repeat inserts a fresh step of the same kind
//!    right after the one being left
//! 3. **Bounds**: no sequence of navigation leaves the current index outside
//!    the step list

use proptest::prelude::*;
use std::cell::RefCell;

use medsearch::wizard::pars::ParStep;
use medsearch::{FormRecord, Navigation, Step, Wizard};

// ============================================================================
// STRATEGIES
// ============================================================================

fn kind_strategy() -> impl Strategy<Value = ParStep> {
    prop::sample::select(vec![
        ParStep::GetPar,
        ParStep::Product,
        ParStep::File,
        ParStep::Review,
    ])
}

fn kinds_strategy() -> impl Strategy<Value = Vec<ParStep>> {
    prop::collection::vec(kind_strategy(), 1..6)
}

fn record(i: usize) -> FormRecord {
    FormRecord::from_pairs([("n", i.to_string())])
}

#[derive(Debug, Clone)]
enum Op {
    Submit,
    Repeat,
    GoBack,
    GoToPage(usize),
    Delete(usize),
    FirstOfType(ParStep),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Submit),
        2 => Just(Op::Repeat),
        2 => Just(Op::GoBack),
        1 => (0usize..8).prop_map(Op::GoToPage),
        1 => (0usize..8).prop_map(Op::Delete),
        1 => kind_strategy().prop_map(Op::FirstOfType),
    ]
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_completion_length_counts_submits_and_repeats(
        kinds in kinds_strategy(),
        repeats in prop::collection::vec(any::<bool>(), 0..30),
    ) {
        let completed: RefCell<Option<Vec<Step<ParStep>>>> = RefCell::new(None);
        let mut wizard = Wizard::new(kinds.clone(), |steps: &[Step<ParStep>]| {
            *completed.borrow_mut() = Some(steps.to_vec());
        });

        // Planned repeats first, then plain submits until the wizard completes.
        let mut actions = 0;
        let mut plan = repeats.into_iter();
        loop {
            let navigation = match plan.next() {
                Some(true) => wizard.repeat_page(record(actions)),
                _ => wizard.submit(record(actions)),
            };
            actions += 1;
            if navigation == Navigation::Completed {
                break;
            }
            prop_assert!(actions <= kinds.len() + 30, "wizard never completed");
        }
        drop(wizard);

        let steps = completed.into_inner().expect("callback fired");
        prop_assert_eq!(steps.len(), actions);
        prop_assert!(steps.iter().all(|s| s.data.is_some()));
    }

    #[test]
    fn prop_repeat_inserts_same_kind_after_current(
        kinds in kinds_strategy(),
        advance in 0usize..5,
    ) {
        let mut wizard = Wizard::new(kinds.clone(), |_: &[Step<ParStep>]| {});
        for i in 0..advance.min(kinds.len() - 1) {
            wizard.submit(record(i));
        }

        let at = wizard.current_index();
        let kind = wizard.steps()[at].kind;
        let before = wizard.steps().len();

        let navigation = wizard.repeat_page(record(99));
        prop_assert_eq!(navigation, Navigation::Moved(at + 1));
        prop_assert_eq!(wizard.steps().len(), before + 1);

        let inserted = &wizard.steps()[at + 1];
        prop_assert_eq!(inserted.kind, kind);
        prop_assert!(inserted.data.is_none());
        prop_assert_eq!(wizard.steps()[at].data.as_ref(), Some(&record(99)));
        prop_assert!(wizard.steps().iter().filter(|s| s.id == inserted.id).count() == 1);
    }

    #[test]
    fn prop_first_page_of_type_never_jumps_far_back(
        kinds in kinds_strategy(),
        advance in 0usize..5,
        target in kind_strategy(),
    ) {
        let mut wizard = Wizard::new(kinds.clone(), |_: &[Step<ParStep>]| {});
        for i in 0..advance.min(kinds.len() - 1) {
            wizard.submit(record(i));
        }
        let current = wizard.current_index();
        let first = kinds.iter().position(|k| *k == target);

        wizard.go_to_first_page_of_type(&target);

        let expected = first.unwrap_or(0).max(current.saturating_sub(1));
        prop_assert_eq!(wizard.current_index(), expected);
    }

    #[test]
    fn prop_navigation_stays_in_bounds(
        kinds in kinds_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut wizard = Wizard::new(kinds, |_: &[Step<ParStep>]| {});

        for (i, op) in ops.into_iter().enumerate() {
            let len = wizard.steps().len();
            match op {
                Op::Submit => { wizard.submit(record(i)); }
                Op::Repeat => { wizard.repeat_page(record(i)); }
                Op::GoBack => { wizard.go_back(); }
                Op::GoToPage(index) if index < len => { wizard.go_to_page(index); }
                // Keep at least one step so there is always somewhere to be.
                Op::Delete(index) if index < len && len > 1 => {
                    let removed_current = index == wizard.current_index();
                    wizard.delete_page(index);
                    if removed_current || wizard.current_index() >= wizard.steps().len() {
                        wizard.go_to_first_page_of_type(&ParStep::Product);
                    }
                }
                Op::FirstOfType(kind) => { wizard.go_to_first_page_of_type(&kind); }
                _ => {}
            }

            if !wizard.is_complete() {
                prop_assert!(
                    wizard.current_index() < wizard.steps().len(),
                    "index {} out of {} steps",
                    wizard.current_index(),
                    wizard.steps().len()
                );
                prop_assert!(wizard.current().is_some());
            } else {
                prop_assert!(wizard.current().is_none());
            }
        }
    }
}
