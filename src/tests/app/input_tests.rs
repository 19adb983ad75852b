use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::input::{KeyCommand, classify};

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn ctrl_shortcuts_map_to_form_commands() {
    let submit = classify(&key(KeyCode::Char('s'), KeyModifiers::CONTROL));
    let quit = classify(&key(KeyCode::Char('Q'), KeyModifiers::CONTROL));
    let reset = classify(&key(KeyCode::Char('r'), KeyModifiers::CONTROL));
    let disable = classify(&key(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert!(matches!(submit, KeyCommand::Submit));
    assert!(matches!(quit, KeyCommand::Quit));
    assert!(matches!(reset, KeyCommand::Reset));
    assert!(matches!(disable, KeyCommand::ToggleDisabled));
}

#[test]
fn tab_and_backtab_move_between_fields() {
    assert!(matches!(
        classify(&key(KeyCode::Tab, KeyModifiers::NONE)),
        KeyCommand::NextField
    ));
    assert!(matches!(
        classify(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
        KeyCommand::PrevField
    ));
}

#[test]
fn control_keys_reach_the_focused_field() {
    for code in [
        KeyCode::Char('f'),
        KeyCode::Backspace,
        KeyCode::Delete,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Enter,
    ] {
        assert!(
            matches!(classify(&key(code, KeyModifiers::NONE)), KeyCommand::Edit(_)),
            "{code:?} should be routed to the control"
        );
    }
    assert!(matches!(
        classify(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        KeyCommand::Edit(_)
    ));
}

#[test]
fn unknown_ctrl_combos_are_dropped() {
    assert!(matches!(
        classify(&key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
        KeyCommand::None
    ));
    assert!(matches!(
        classify(&key(KeyCode::Esc, KeyModifiers::NONE)),
        KeyCommand::ResetStatus
    ));
}
