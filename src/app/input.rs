use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const HELP_TEXT: &str = "Type to filter • ↑/↓ move • Enter pick • Del clear • Tab/Shift+Tab field • Ctrl+D disable • Ctrl+R reset • Ctrl+S submit • Ctrl+Q quit";

#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Submit,
    Quit,
    Reset,
    ToggleDisabled,
    NextField,
    PrevField,
    ResetStatus,
    Edit(KeyEvent),
    None,
}

/// Splits form-level shortcuts from keys meant for the focused control.
pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyCommand::Reset,
            KeyCode::Char('d') | KeyCode::Char('D') => KeyCommand::ToggleDisabled,
            KeyCode::Char('u') | KeyCode::Char('U') => KeyCommand::Edit(*key),
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab => KeyCommand::NextField,
        KeyCode::BackTab => KeyCommand::PrevField,
        KeyCode::Esc => KeyCommand::ResetStatus,
        _ => KeyCommand::Edit(*key),
    }
}
