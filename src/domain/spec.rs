use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::option::{DEFAULT_DISPLAY_FIELD, DEFAULT_VALUE_FIELD, FieldSelectors, OptionRecord};

pub const DEFAULT_PLACEHOLDER: &str = "Choose an option";

/// Declarative description of a whole host form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSpec {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// One field slot plus the inputs of the control rendered for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_display_field")]
    pub display_field: String,
    #[serde(default = "default_value_field")]
    pub value_field: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub options: Vec<OptionRecord>,
    /// Separate option-list document, resolved relative to the spec file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_file: Option<PathBuf>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, options: Vec<OptionRecord>) -> Self {
        Self {
            name: name.into(),
            label: None,
            display_field: default_display_field(),
            value_field: default_value_field(),
            required: false,
            placeholder: default_placeholder(),
            is_loading: false,
            disabled: false,
            options,
            options_file: None,
        }
    }

    pub fn with_selectors(mut self, display_field: &str, value_field: &str) -> Self {
        self.display_field = display_field.to_string();
        self.value_field = value_field.to_string();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn selectors(&self) -> FieldSelectors {
        FieldSelectors::new(&self.display_field, &self.value_field)
    }

    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.name.clone())
    }
}

fn default_display_field() -> String {
    DEFAULT_DISPLAY_FIELD.to_string()
}

fn default_value_field() -> String {
    DEFAULT_VALUE_FIELD.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}
