use std::borrow::Cow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::domain::{DEFAULT_PLACEHOLDER, FieldSelectors, Selectable};

use super::{
    binding::{FieldBinding, FieldChange},
    error::ValidationErrors,
    filter::{Filtered, filter_options},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Empty,
    Filtering,
    Selected,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Empty,
    Filtering,
    Selected,
}

/// Payload of the selection event: the picked record, or `None` on clear.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange<T>(pub Option<T>);

impl<T> SelectionChange<T> {
    pub fn record(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn is_cleared(&self) -> bool {
        self.0.is_none()
    }
}

/// Result of feeding a key to the control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent<T> {
    Ignored,
    Edited,
    Navigated,
    Selection(SelectionChange<T>),
}

/// Searchable select input bound to a host field.
#[derive(Debug, Clone)]
pub struct SelectControl<T, B> {
    options: Vec<T>,
    selectors: FieldSelectors,
    required: bool,
    is_loading: bool,
    placeholder: String,
    input: Value,
    phase: Phase,
    disabled: bool,
    highlight: usize,
    binding: B,
}

impl<T, B> SelectControl<T, B>
where
    T: Selectable,
    B: FieldBinding<T>,
{
    pub fn new(options: Vec<T>, selectors: FieldSelectors, binding: B) -> Self {
        Self {
            options,
            selectors,
            required: false,
            is_loading: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            input: Value::String(String::new()),
            phase: Phase::Empty,
            disabled: false,
            highlight: 0,
            binding,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Swaps the option list. An earlier selection is left untouched.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        self.clamp_highlight();
    }

    pub fn selectors(&self) -> &FieldSelectors {
        &self.selectors
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    /// Replaces the host binding, returning the previous one.
    pub fn register_binding(&mut self, binding: B) -> B {
        std::mem::replace(&mut self.binding, binding)
    }

    pub fn into_binding(self) -> B {
        self.binding
    }

    pub fn state(&self) -> ControlState {
        if self.disabled {
            return ControlState::Disabled;
        }
        match self.phase {
            Phase::Empty => ControlState::Empty,
            Phase::Filtering => ControlState::Filtering,
            Phase::Selected => ControlState::Selected,
        }
    }

    /// Raw value of the input: typed text, a picked value or whatever the host wrote.
    pub fn value(&self) -> &Value {
        &self.input
    }

    pub fn display_text(&self) -> Cow<'_, str> {
        match &self.input {
            Value::String(text) => Cow::Borrowed(text.as_str()),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Host-to-control write. Never reported back through the binding.
    pub fn write_value(&mut self, value: Value) {
        self.phase = if is_empty_value(&value) {
            Phase::Empty
        } else {
            Phase::Selected
        };
        self.input = value;
        self.highlight = 0;
    }

    pub fn set_disabled_state(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Required check against the value held by the host field.
    pub fn validate(&self, value: Option<&Value>) -> Option<ValidationErrors> {
        let empty = value.is_none_or(is_empty_value);
        (self.required && empty).then(ValidationErrors::required)
    }

    pub fn filtered(&self) -> Filtered<'_, T> {
        filter_options(&self.options, &self.selectors, &self.input)
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight
    }

    pub fn highlighted(&self) -> Option<&T> {
        self.filtered().nth(self.highlight)
    }

    pub fn move_highlight(&mut self, delta: i32) -> bool {
        let len = self.filtered().count();
        if len == 0 {
            return false;
        }
        let len = len as i32;
        let next = ((self.highlight as i32 + delta) % len + len) % len;
        self.highlight = next as usize;
        true
    }

    /// Replaces the typed text. Ignored while disabled.
    pub fn input_text(&mut self, text: &str) -> bool {
        if self.disabled {
            return false;
        }
        self.input = Value::String(text.to_string());
        self.phase = Phase::Filtering;
        self.highlight = 0;
        self.binding.on_change(FieldChange::Edited(text));
        self.binding.on_touched();
        true
    }

    pub fn push_char(&mut self, ch: char) -> bool {
        let mut text = self.input.as_str().map(str::to_string).unwrap_or_default();
        text.push(ch);
        self.input_text(&text)
    }

    pub fn backspace(&mut self) -> bool {
        let mut text = self.input.as_str().map(str::to_string).unwrap_or_default();
        if text.pop().is_none() {
            return false;
        }
        self.input_text(&text)
    }

    /// Picks the option whose canonical value equals `value`, JSON type included.
    ///
    /// A value that is not in the list leaves everything as it was.
    pub fn pick(&mut self, value: &Value) -> Option<SelectionChange<T>> {
        if self.disabled {
            return None;
        }
        let record = self
            .options
            .iter()
            .find(|option| self.selectors.value_of(*option).as_deref() == Some(value))
            .cloned()?;
        self.commit(record)
    }

    /// Picks the highlighted suggestion itself, even when another option shares its value.
    pub fn pick_highlighted(&mut self) -> Option<SelectionChange<T>> {
        if self.disabled {
            return None;
        }
        let record = self.highlighted().cloned()?;
        self.commit(record)
    }

    fn commit(&mut self, record: T) -> Option<SelectionChange<T>> {
        let value = self.selectors.value_of(&record)?.into_owned();
        self.input = value;
        self.phase = Phase::Selected;
        self.highlight = 0;
        self.binding.on_touched();
        self.binding.on_change(FieldChange::Selected {
            value: &self.input,
            record: &record,
        });
        Some(SelectionChange(Some(record)))
    }

    /// Empties the input from any state and reports the absent selection.
    pub fn clear(&mut self) -> SelectionChange<T> {
        self.input = Value::String(String::new());
        self.phase = Phase::Empty;
        self.highlight = 0;
        self.binding.on_change(FieldChange::Cleared);
        SelectionChange(None)
    }

    pub fn blur(&mut self) {
        if !self.disabled {
            self.binding.on_touched();
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> ControlEvent<T> {
        if self.disabled {
            return ControlEvent::Ignored;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') | KeyCode::Char('U') if ctrl => {
                ControlEvent::Selection(self.clear())
            }
            KeyCode::Delete => ControlEvent::Selection(self.clear()),
            KeyCode::Char(ch) if !ctrl => edited(self.push_char(ch)),
            KeyCode::Backspace => edited(self.backspace()),
            KeyCode::Up => self.navigate(-1),
            KeyCode::Down => self.navigate(1),
            KeyCode::Enter => self
                .pick_highlighted()
                .map(ControlEvent::Selection)
                .unwrap_or(ControlEvent::Ignored),
            _ => ControlEvent::Ignored,
        }
    }

    /// Arrow keys on an empty input open the full list.
    fn navigate(&mut self, delta: i32) -> ControlEvent<T> {
        if self.phase == Phase::Empty {
            self.phase = Phase::Filtering;
        }
        navigated(self.move_highlight(delta))
    }

    fn clamp_highlight(&mut self) {
        let len = self.filtered().count();
        if self.highlight >= len {
            self.highlight = len.saturating_sub(1);
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn edited<T>(changed: bool) -> ControlEvent<T> {
    if changed {
        ControlEvent::Edited
    } else {
        ControlEvent::Ignored
    }
}

fn navigated<T>(moved: bool) -> ControlEvent<T> {
    if moved {
        ControlEvent::Navigated
    } else {
        ControlEvent::Ignored
    }
}
