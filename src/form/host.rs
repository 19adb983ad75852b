use crossterm::event::KeyEvent;
use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::{FieldSpec, FormSpec, OptionRecord, Selectable, demo_form_spec};

use super::{
    control::{ControlEvent, SelectControl},
    error::{FormError, ValidationErrors},
    slot::FieldSlot,
};

pub type SlotControl = SelectControl<OptionRecord, FieldSlot>;

/// Submitted values keyed by field name, in declaration order.
pub type Snapshot = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(Snapshot),
    Invalid {
        errors: IndexMap<String, ValidationErrors>,
    },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// A named slot together with the control rendered for it.
#[derive(Debug, Clone)]
pub struct FormField {
    name: String,
    label: String,
    control: SlotControl,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, control: SlotControl) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            control,
        }
    }

    pub fn from_spec(spec: FieldSpec) -> Self {
        let label = spec.display_label();
        let selectors = spec.selectors();
        let missing_display = spec
            .options
            .iter()
            .filter(|option| option.attribute(&selectors.display_field).is_none())
            .count();
        if missing_display > 0 {
            log::warn!(
                "{missing_display} option(s) of field '{}' lack the '{}' attribute",
                spec.name,
                selectors.display_field
            );
        }
        let mut control = SelectControl::new(spec.options, selectors, FieldSlot::new(spec.required))
            .with_required(spec.required)
            .with_placeholder(spec.placeholder)
            .with_loading(spec.is_loading);
        control.set_disabled_state(spec.disabled);
        Self::new(spec.name, label, control)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn control(&self) -> &SlotControl {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut SlotControl {
        &mut self.control
    }

    pub fn slot(&self) -> &FieldSlot {
        self.control.binding()
    }

    pub fn slot_mut(&mut self) -> &mut FieldSlot {
        self.control.binding_mut()
    }

    /// Message rendered under the input, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        let slot = self.slot();
        if self.is_disabled() || !slot.should_show_error() {
            return None;
        }
        slot.errors()
            .and_then(ValidationErrors::first)
            .map(|error| error.message())
    }

    pub fn is_disabled(&self) -> bool {
        self.control.is_disabled()
    }

    /// Slot validator plus the control's own check. A disabled field is never invalid.
    pub fn collect_errors(&self) -> Option<ValidationErrors> {
        if self.is_disabled() {
            return None;
        }
        let slot = self.slot();
        let mut errors = slot.validate_required().unwrap_or_default();
        if let Some(control_errors) = self.control.validate(slot.value()) {
            errors.merge(control_errors);
        }
        errors.into_option()
    }

    fn refresh_validity(&mut self) {
        let errors = self.collect_errors();
        self.slot_mut().set_errors(errors);
    }
}

#[derive(Debug, Clone, Default)]
pub struct HostForm {
    title: Option<String>,
    fields: Vec<FormField>,
    focus: usize,
    last_submitted: Option<Snapshot>,
}

impl HostForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spec(spec: FormSpec) -> Result<Self, FormError> {
        let mut form = HostForm {
            title: spec.title,
            ..Self::default()
        };
        for field in spec.fields {
            form.add_field(FormField::from_spec(field))?;
        }
        Ok(form)
    }

    /// Country and week-day sample form.
    pub fn demo() -> Self {
        Self::from_spec(demo_form_spec()).unwrap_or_else(|err| {
            log::warn!("demo form rejected: {err}");
            Self::default()
        })
    }

    pub fn add_field(&mut self, mut field: FormField) -> Result<(), FormError> {
        if self.field(field.name()).is_some() {
            return Err(FormError::duplicate_field(field.name()));
        }
        field.refresh_validity();
        self.fields.push(field);
        Ok(())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    fn require_field_mut(&mut self, name: &str) -> Result<&mut FormField, FormError> {
        self.field_mut(name)
            .ok_or_else(|| FormError::unknown_field(name))
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focus)
    }

    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() && index != self.focus {
            self.blur_focused();
            self.focus = index;
        }
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: i32) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len() as i32;
        let next = ((self.focus as i32 + delta) % len + len) % len;
        self.set_focus(next as usize);
    }

    fn blur_focused(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.control.blur();
            field.refresh_validity();
        }
    }

    /// Swaps a field's options; a value picked from the old list stays.
    pub fn set_options(&mut self, name: &str, options: Vec<OptionRecord>) -> Result<(), FormError> {
        self.require_field_mut(name)?.control.set_options(options);
        Ok(())
    }

    pub fn set_loading(&mut self, name: &str, is_loading: bool) -> Result<(), FormError> {
        self.require_field_mut(name)?.control.set_loading(is_loading);
        Ok(())
    }

    /// Disabled fields keep their value but drop out of validation and the snapshot.
    pub fn set_disabled(&mut self, name: &str, disabled: bool) -> Result<(), FormError> {
        let field = self.require_field_mut(name)?;
        field.control.set_disabled_state(disabled);
        field.refresh_validity();
        Ok(())
    }

    /// Host write into a field: slot and control both take the value, nothing is reported.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), FormError> {
        let field = self.require_field_mut(name)?;
        field.control.write_value(value.clone());
        field.slot_mut().set_value(Some(value));
        field.refresh_validity();
        Ok(())
    }

    /// Feeds a key to the focused control.
    pub fn handle_key(&mut self, key: &KeyEvent) -> ControlEvent<OptionRecord> {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return ControlEvent::Ignored;
        };
        let event = field.control.handle_key(key);
        match &event {
            ControlEvent::Selection(change) => {
                log::debug!("selection on '{}': {:?}", field.name, change.record());
                field.refresh_validity();
            }
            ControlEvent::Edited => field.refresh_validity(),
            ControlEvent::Navigated | ControlEvent::Ignored => {}
        }
        event
    }

    pub fn validate_all(&mut self) {
        for field in &mut self.fields {
            field.refresh_validity();
        }
    }

    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|field| field.collect_errors().is_none())
    }

    pub fn error_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| !field.is_disabled() && field.slot().is_invalid())
            .count()
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| field.slot().is_dirty())
    }

    pub fn mark_all_as_touched(&mut self) {
        for field in &mut self.fields {
            field.slot_mut().mark_as_touched();
        }
    }

    /// Values of the enabled fields, keyed by name.
    pub fn value(&self) -> Snapshot {
        self.fields
            .iter()
            .filter(|field| !field.is_disabled())
            .map(|field| (field.name.clone(), field.slot().json_value()))
            .collect()
    }

    /// Snapshot of the form, or the per-field errors when it is not valid yet.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.validate_all();
        if !self.is_valid() {
            self.mark_all_as_touched();
            let errors = self
                .fields
                .iter()
                .filter_map(|field| {
                    field
                        .collect_errors()
                        .map(|errors| (field.name.clone(), errors))
                })
                .collect::<IndexMap<_, _>>();
            log::info!("submit rejected: {} invalid field(s)", errors.len());
            return SubmitOutcome::Invalid { errors };
        }
        let snapshot = self.value();
        for field in &mut self.fields {
            field.slot_mut().mark_clean();
        }
        log::info!("submitted {} field(s)", snapshot.len());
        self.last_submitted = Some(snapshot.clone());
        SubmitOutcome::Submitted(snapshot)
    }

    pub fn last_submitted(&self) -> Option<&Snapshot> {
        self.last_submitted.as_ref()
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.control.write_value(Value::Null);
            field.slot_mut().reset();
            field.refresh_validity();
        }
        self.focus = 0;
        self.last_submitted = None;
    }
}
