use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Value, json};

use crate::{
    domain::{FieldSpec, FormSpec, OptionRecord},
    form::{ControlEvent, FormError, HostForm, SubmitOutcome, ValidationErrors},
};

fn type_into(form: &mut HostForm, text: &str) {
    for ch in text.chars() {
        form.handle_key(&KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }
}

fn enter(form: &mut HostForm) -> ControlEvent<OptionRecord> {
    form.handle_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
}

#[test]
fn demo_form_declares_two_required_fields() {
    let form = HostForm::demo();
    let names: Vec<_> = form.fields().iter().map(|field| field.name()).collect();
    assert_eq!(names, ["country", "weekDay"]);
    assert!(form.fields().iter().all(|field| field.slot().is_required()));
    assert!(!form.is_valid());
    assert_eq!(form.error_count(), 2);
}

#[test]
fn full_selection_flow_submits_snapshot() {
    let mut form = HostForm::demo();
    type_into(&mut form, "fr");
    let shown: Vec<_> = form
        .focused()
        .unwrap()
        .control()
        .filtered()
        .map(|record| record.get("name").cloned().unwrap())
        .collect();
    assert_eq!(shown, [json!("France")]);

    match enter(&mut form) {
        ControlEvent::Selection(change) => {
            assert_eq!(change.record().unwrap().get("capital"), Some(&json!("Paris")));
        }
        other => panic!("expected a selection, got {other:?}"),
    }

    form.focus_next();
    type_into(&mut form, "fri");
    enter(&mut form);

    let outcome = form.submit();
    let SubmitOutcome::Submitted(snapshot) = outcome else {
        panic!("form should be valid");
    };
    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        json!({"country": "France", "weekDay": "Friday"})
    );
    assert_eq!(form.last_submitted(), Some(&snapshot));
    assert!(!form.is_dirty());
}

#[test]
fn submitting_without_country_marks_everything_touched() {
    let mut form = HostForm::demo();
    form.focus_next();
    type_into(&mut form, "mon");
    enter(&mut form);

    let outcome = form.submit();
    let SubmitOutcome::Invalid { errors } = outcome else {
        panic!("country is missing");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("country"), Some(&ValidationErrors::required()));

    let country = form.field("country").unwrap();
    assert!(country.slot().is_touched());
    assert_eq!(country.error_message(), Some("This field is required."));

    let week_day = form.field("weekDay").unwrap();
    assert!(week_day.slot().is_touched());
    assert_eq!(week_day.slot().value(), Some(&json!("Monday")));
    assert_eq!(week_day.error_message(), None);
    assert!(form.last_submitted().is_none());
}

#[test]
fn free_text_does_not_satisfy_required() {
    let mut form = HostForm::demo();
    type_into(&mut form, "India");
    assert_eq!(form.field("country").unwrap().slot().value(), None);
    assert!(!form.submit().is_submitted());
}

#[test]
fn typing_over_a_selection_drops_the_value() {
    let mut form = HostForm::demo();
    type_into(&mut form, "jap");
    enter(&mut form);
    assert_eq!(form.field("country").unwrap().slot().value(), Some(&json!("Japan")));
    form.handle_key(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    let country = form.field("country").unwrap();
    assert_eq!(country.slot().value(), None);
    assert!(country.slot().is_invalid());
}

#[test]
fn clearing_resets_slot_to_null() {
    let mut form = HostForm::demo();
    type_into(&mut form, "uni");
    enter(&mut form);
    let event = form.handle_key(&KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
    assert!(matches!(event, ControlEvent::Selection(ref change) if change.is_cleared()));
    assert_eq!(form.value()["country"], Value::Null);
}

#[test]
fn disabled_field_keeps_value_and_rejects_keys() {
    let mut form = HostForm::demo();
    form.set_value("country", json!("Brazil")).unwrap();
    form.set_disabled("country", true).unwrap();
    type_into(&mut form, "x");
    let country = form.field("country").unwrap();
    assert_eq!(country.control().display_text(), "Brazil");
    assert_eq!(country.slot().value(), Some(&json!("Brazil")));
    assert!(!country.slot().is_dirty());
}

#[test]
fn host_writes_are_not_user_changes() {
    let mut form = HostForm::demo();
    form.set_value("weekDay", json!("Tuesday")).unwrap();
    let week_day = form.field("weekDay").unwrap();
    assert!(!week_day.slot().is_dirty());
    assert!(!week_day.slot().is_touched());
    assert!(!week_day.slot().is_invalid());
}

#[test]
fn reset_clears_values_and_flags() {
    let mut form = HostForm::demo();
    type_into(&mut form, "ind");
    enter(&mut form);
    form.submit();
    form.reset();
    assert_eq!(
        serde_json::to_value(form.value()).unwrap(),
        json!({"country": null, "weekDay": null})
    );
    assert!(form.fields().iter().all(|f| !f.slot().is_touched()));
    assert!(form.last_submitted().is_none());
    assert_eq!(form.focus_index(), 0);
}

#[test]
fn unknown_fields_are_reported() {
    let mut form = HostForm::demo();
    assert_eq!(
        form.set_options("city", Vec::new()),
        Err(FormError::unknown_field("city"))
    );
}

#[test]
fn duplicate_names_are_rejected() {
    let spec = FormSpec {
        title: None,
        fields: vec![
            FieldSpec::new("color", Vec::new()),
            FieldSpec::new("color", Vec::new()),
        ],
    };
    let err = HostForm::from_spec(spec).unwrap_err();
    assert_eq!(err, FormError::duplicate_field("color"));
}

#[test]
fn optional_fields_submit_as_null() {
    let spec = FormSpec {
        title: Some("Colors".into()),
        fields: vec![FieldSpec::new(
            "color",
            vec![OptionRecord::new().with("id", "r").with("label", "Red")],
        )],
    };
    let mut form = HostForm::from_spec(spec).unwrap();
    assert_eq!(form.title(), Some("Colors"));
    let SubmitOutcome::Submitted(snapshot) = form.submit() else {
        panic!("optional field should not block submit");
    };
    assert_eq!(snapshot["color"], Value::Null);
}

#[test]
fn selection_on_label_stores_canonical_value() {
    let spec = FormSpec {
        title: None,
        fields: vec![
            FieldSpec::new(
                "color",
                vec![
                    OptionRecord::new().with("id", "r").with("label", "Red"),
                    OptionRecord::new().with("id", "g").with("label", "Green"),
                ],
            )
            .with_required(true),
        ],
    };
    let mut form = HostForm::from_spec(spec).unwrap();
    type_into(&mut form, "gr");
    enter(&mut form);
    let color = form.field("color").unwrap();
    assert_eq!(color.slot().value(), Some(&json!("g")));
    assert_eq!(color.control().display_text(), "g");
}

#[test]
fn swapping_options_keeps_previous_selection() {
    let mut form = HostForm::demo();
    type_into(&mut form, "fra");
    enter(&mut form);
    form.set_options("country", vec![OptionRecord::new().with("name", "Peru")])
        .unwrap();
    assert_eq!(form.field("country").unwrap().slot().value(), Some(&json!("France")));
    assert!(form.field("country").unwrap().collect_errors().is_none());
}

#[test]
fn numeric_ids_are_submitted_with_their_type() {
    let spec = FormSpec {
        title: None,
        fields: vec![
            FieldSpec::new(
                "color",
                vec![
                    OptionRecord::new().with("id", 7).with("label", "Red"),
                    OptionRecord::new().with("id", "7").with("label", "Seven-string"),
                ],
            )
            .with_required(true),
        ],
    };
    let mut form = HostForm::from_spec(spec).unwrap();
    type_into(&mut form, "red");
    let ControlEvent::Selection(change) = enter(&mut form) else {
        panic!("Red should be picked");
    };
    assert_eq!(change.record().unwrap().get("id"), Some(&json!(7)));
    let SubmitOutcome::Submitted(snapshot) = form.submit() else {
        panic!("color is set");
    };
    assert_eq!(snapshot["color"], json!(7));

    form.handle_key(&KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
    type_into(&mut form, "seven");
    enter(&mut form);
    let SubmitOutcome::Submitted(snapshot) = form.submit() else {
        panic!("color is set");
    };
    assert_eq!(snapshot["color"], json!("7"));
}

#[test]
fn disabled_required_field_does_not_block_submit() {
    let mut form = HostForm::demo();
    form.set_disabled("country", true).unwrap();
    form.set_value("weekDay", json!("Monday")).unwrap();
    assert!(form.is_valid());
    assert_eq!(form.error_count(), 0);
    let SubmitOutcome::Submitted(snapshot) = form.submit() else {
        panic!("disabled fields are not validated");
    };
    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        json!({"weekDay": "Monday"})
    );
    assert_eq!(form.field("country").unwrap().error_message(), None);

    form.set_disabled("country", false).unwrap();
    assert!(!form.submit().is_submitted());
    assert_eq!(
        form.field("country").unwrap().error_message(),
        Some("This field is required.")
    );
}

#[test]
fn demo_form_is_built_like_any_spec() {
    let demo = HostForm::demo();
    let built = HostForm::from_spec(crate::domain::demo_form_spec()).unwrap();
    assert_eq!(demo.value(), built.value());
    assert_eq!(demo.error_count(), built.error_count());
    assert_eq!(demo.title(), built.title());
}
