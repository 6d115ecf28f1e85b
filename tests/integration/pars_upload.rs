//! PARs upload journeys, driven the way the upload pages drive the wizard:
//! validate, then submit or repeat.

use std::cell::RefCell;

use crate::common::{kinds, lookup, product, product_with_type, repeat, submit, upload};
use medsearch::wizard::pars::{validate_par_step, ParFlow, ParStep};
use medsearch::wizard::script::{replay, WizardAction};
use medsearch::{combine_step_data, FormRecord, Navigation, Step, ValidationError, Wizard};

fn validated(
    wizard: &mut Wizard<'_, ParStep>,
    data: FormRecord,
    again: bool,
) -> Result<Navigation, ValidationError> {
    validate_par_step(wizard.steps(), wizard.current_index(), &data)?;
    Ok(if again {
        wizard.repeat_page(data)
    } else {
        wizard.submit(data)
    })
}

#[test]
fn test_new_report_with_two_products() {
    let uploaded: RefCell<Option<FormRecord>> = RefCell::new(None);
    let mut wizard = Wizard::from_steps(ParFlow::New.steps(), |steps: &[Step<ParStep>]| {
        *uploaded.borrow_mut() = Some(combine_step_data(steps));
    });

    validated(&mut wizard, product("Nurofen", "12345", "0001"), true).unwrap();
    validated(&mut wizard, product("Nurofen Express", "12345", "0002"), false).unwrap();
    validated(&mut wizard, upload("par.pdf"), false).unwrap();
    assert_eq!(
        kinds(wizard.steps()),
        vec![ParStep::Product, ParStep::Product, ParStep::File, ParStep::Review]
    );
    assert_eq!(validated(&mut wizard, FormRecord::new(), false), Ok(Navigation::Completed));
    assert!(wizard.current().is_none());
    drop(wizard);

    let combined = uploaded.into_inner().unwrap();
    let names: Vec<&str> = combined.get_all("product_name").collect();
    assert_eq!(names, vec!["Nurofen", "Nurofen Express"]);
    let part_two: Vec<&str> = combined.get_all("product_licence_part_two").collect();
    assert_eq!(part_two, vec!["0001", "0002"]);
    assert_eq!(combined.get("file"), Some("par.pdf"));
}

#[test]
fn test_duplicate_licence_blocks_until_changed() {
    let mut wizard = Wizard::from_steps(ParFlow::New.steps(), |_: &[Step<ParStep>]| {});
    validated(&mut wizard, product("Nurofen", "12345", "6789"), true).unwrap();

    let err = validated(&mut wizard, product("Other", "12345", "6789"), false).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate licence numbers are not allowed");
    assert_eq!(
        err.fields(),
        vec![
            "product_licence_type",
            "product_licence_part_one",
            "product_licence_part_two"
        ]
    );
    assert_eq!(wizard.current_index(), 1);

    // Whitespace and case do not make a licence number different.
    assert!(validated(&mut wizard, product_with_type("Other", "pl", " 12345", "6789 "), false).is_err());

    // Changing any one of the three parts clears it.
    for changed in [
        product_with_type("Other", "THR", "12345", "6789"),
        product("Other", "12346", "6789"),
        product("Other", "12345", "6780"),
    ] {
        assert!(validate_par_step(wizard.steps(), 1, &changed).is_ok());
    }
}

#[test]
fn test_resubmitting_an_edited_product_does_not_collide_with_itself() {
    let mut wizard = Wizard::from_steps(ParFlow::New.steps(), |_: &[Step<ParStep>]| {});
    validated(&mut wizard, product("Nurofen", "12345", "6789"), true).unwrap();
    validated(&mut wizard, product("Nurofen Plus", "12345", "1111"), false).unwrap();

    // "Change" link on the summary for the first product.
    wizard.go_to_page(0);
    assert_eq!(
        validated(&mut wizard, product("Nurofen", "12345", "6789"), false),
        Ok(Navigation::Moved(1))
    );
}

#[test]
fn test_deleting_the_open_product_falls_back_to_a_neighbour() {
    let mut wizard = Wizard::from_steps(ParFlow::New.steps(), |_: &[Step<ParStep>]| {});
    validated(&mut wizard, product("A", "10000", "0001"), true).unwrap();
    validated(&mut wizard, product("B", "10000", "0002"), true).unwrap();
    assert_eq!(wizard.current_index(), 2);

    let removed = wizard.delete_page(2).unwrap();
    assert_eq!(removed.kind, ParStep::Product);
    assert_eq!(
        wizard.go_to_first_page_of_type(&ParStep::Product),
        Navigation::Moved(1)
    );
    assert_eq!(
        kinds(wizard.steps()),
        vec![ParStep::Product, ParStep::Product, ParStep::File, ParStep::Review]
    );
}

#[test]
fn test_update_flow_uploads_everything_but_the_lookup() {
    let actions: Vec<WizardAction<ParStep>> = vec![
        submit(lookup("https://products.example/par/42")),
        repeat(product("A", "10000", "0001")),
        submit(product("B", "10000", "0002")),
        submit(upload("updated.PDF")),
        submit(FormRecord::new()),
    ];
    let result = replay(ParFlow::Update.steps(), actions, validate_par_step);
    assert!(result.outcomes.iter().all(Result::is_ok), "{:?}", result.outcomes);

    let steps = result.completed.unwrap();
    assert_eq!(steps.len(), 5);
    let combined = combine_step_data(&steps);
    assert!(!combined.contains_key("par_url"));
    assert_eq!(combined.get_all("product_name").count(), 2);
}

#[test]
fn test_non_pdf_upload_is_rejected() {
    let actions = vec![
        submit(product("A", "10000", "0001")),
        submit(upload("par.docx")),
    ];
    let result = replay(ParFlow::New.steps(), actions, validate_par_step);
    assert_eq!(
        result.outcomes[1],
        Err(ValidationError::UnsupportedFileType {
            name: "par.docx".to_string()
        })
    );
    assert_eq!(result.steps[1].data, None);
}

#[test]
fn test_script_from_json() {
    let script = r#"[
        {"action": "submit", "data": {"par_url": "https://products.example/par/7"}},
        {"action": "go_back"},
        {"action": "go_back"},
        {"action": "submit", "data": {"par_url": "https://products.example/par/8"}},
        {"action": "submit", "data": {
            "product_name": "A",
            "product_licence_type": "PL",
            "product_licence_part_one": "10000",
            "product_licence_part_two": "0001"
        }},
        {"action": "submit", "data": {"file": ["a.pdf", "b.pdf"]}},
        {"action": "submit"}
    ]"#;
    let actions: Vec<WizardAction<ParStep>> = serde_json::from_str(script).unwrap();
    let result = replay(ParFlow::Update.steps(), actions, validate_par_step);

    assert_eq!(result.outcomes[1], Ok(Navigation::Moved(0)));
    assert_eq!(result.outcomes[2], Ok(Navigation::Stayed(0)));
    assert_eq!(result.outcomes[6], Ok(Navigation::Completed));

    let steps = result.completed.unwrap();
    assert_eq!(steps[0].data.as_ref().unwrap().get("par_url"), Some("https://products.example/par/8"));
    let combined = combine_step_data(&steps);
    let files: Vec<&str> = combined.get_all("file").collect();
    assert_eq!(files, vec!["a.pdf", "b.pdf"]);
}
