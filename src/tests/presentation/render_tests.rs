use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::{
    domain::{FieldSpec, FormSpec, OptionRecord},
    form::HostForm,
    presentation::{UiContext, draw},
};

fn render(form: &HostForm, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            draw(
                frame,
                UiContext {
                    form,
                    status_message: "Ready",
                    dirty: form.is_dirty(),
                    error_count: form.error_count(),
                    help: None,
                    show_snapshot: true,
                },
            )
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(form: &mut HostForm, code: KeyCode) {
    form.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn empty_field_shows_placeholder_and_required_marker() {
    let form = HostForm::demo();
    let screen = render(&form, 60, 30);
    assert!(screen.contains("Select Country Name"), "{screen}");
    assert!(screen.contains("Country *"));
    assert!(screen.contains("Choose an option"));
}

#[test]
fn focused_field_lists_filtered_suggestions() {
    let mut form = HostForm::demo();
    for ch in "an".chars() {
        press(&mut form, KeyCode::Char(ch));
    }
    let screen = render(&form, 60, 30);
    assert!(screen.contains("» France"), "{screen}");
    assert!(screen.contains("Japan"));
    assert!(!screen.contains("India"));
}

#[test]
fn no_matches_row_when_filter_misses() {
    let mut form = HostForm::demo();
    for ch in "zz".chars() {
        press(&mut form, KeyCode::Char(ch));
    }
    let screen = render(&form, 60, 30);
    assert!(screen.contains("No matches"), "{screen}");
}

#[test]
fn loading_row_precedes_options() {
    let spec = FormSpec {
        title: None,
        fields: vec![FieldSpec {
            is_loading: true,
            ..FieldSpec::new("color", vec![OptionRecord::new().with("label", "Red")])
        }],
    };
    let mut form = HostForm::from_spec(spec).unwrap();
    press(&mut form, KeyCode::Char('r'));
    let screen = render(&form, 40, 20);
    let loading = screen.find("Loading options…").expect("loading row");
    let red = screen.find("Red").expect("option row");
    assert!(loading < red);
}

#[test]
fn required_message_appears_after_failed_submit() {
    let mut form = HostForm::demo();
    assert!(!render(&form, 60, 30).contains("This field is required."));
    form.submit();
    let screen = render(&form, 60, 30);
    assert_eq!(screen.matches("This field is required.").count(), 2, "{screen}");
}

#[test]
fn submitted_snapshot_is_rendered() {
    let mut form = HostForm::demo();
    form.set_value("country", serde_json::json!("France")).unwrap();
    form.set_value("weekDay", serde_json::json!("Monday")).unwrap();
    assert!(form.submit().is_submitted());
    let screen = render(&form, 60, 30);
    assert!(screen.contains("Submitted value"));
    assert!(screen.contains("\"country\": \"France\""), "{screen}");
    assert!(screen.contains("\"weekDay\": \"Monday\""));
}

#[test]
fn disabled_field_is_labelled() {
    let mut form = HostForm::demo();
    form.set_disabled("weekDay", true).unwrap();
    let screen = render(&form, 60, 30);
    assert!(screen.contains("Week day * (disabled)"), "{screen}");
}
