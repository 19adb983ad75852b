use serde_json::Value;

use crate::domain::Selectable;

use super::{
    binding::{FieldBinding, FieldChange},
    error::ValidationErrors,
};

/// Host-side state of one form field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSlot {
    value: Option<Value>,
    required: bool,
    touched: bool,
    dirty: bool,
    errors: Option<ValidationErrors>,
}

impl FieldSlot {
    pub fn new(required: bool) -> Self {
        let mut slot = Self {
            required,
            ..Self::default()
        };
        slot.update_validity();
        slot
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The stored value as submitted, `null` when nothing is picked.
    pub fn json_value(&self) -> Value {
        self.value.clone().unwrap_or(Value::Null)
    }

    /// Host-driven write; leaves touched/dirty alone. `null` reads as no value.
    pub fn set_value(&mut self, value: Option<Value>) {
        self.value = value.filter(|value| !value.is_null());
        self.update_validity();
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    pub fn set_errors(&mut self, errors: Option<ValidationErrors>) {
        self.errors = errors;
    }

    pub fn is_invalid(&self) -> bool {
        self.errors.is_some()
    }

    /// Inline messages only appear once the user had a chance to fill the field.
    pub fn should_show_error(&self) -> bool {
        self.touched && self.is_invalid()
    }

    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn reset(&mut self) {
        self.value = None;
        self.touched = false;
        self.dirty = false;
        self.update_validity();
    }

    /// The slot's own `required` validator.
    pub fn validate_required(&self) -> Option<ValidationErrors> {
        let empty = self
            .value
            .as_ref()
            .is_none_or(|value| value.as_str() == Some(""));
        (self.required && empty).then(ValidationErrors::required)
    }

    fn update_validity(&mut self) {
        self.errors = self.validate_required();
    }
}

impl<T: Selectable> FieldBinding<T> for FieldSlot {
    fn on_change(&mut self, change: FieldChange<'_, T>) {
        self.value = match change {
            FieldChange::Selected { value, .. } => Some(value.clone()),
            FieldChange::Edited(_) | FieldChange::Cleared => None,
        };
        self.dirty = true;
        self.update_validity();
    }

    fn on_touched(&mut self) {
        self.touched = true;
    }
}
