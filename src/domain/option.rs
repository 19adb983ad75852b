use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_DISPLAY_FIELD: &str = "label";
pub const DEFAULT_VALUE_FIELD: &str = "id";

/// Anything a select control can offer: attributes are looked up by name.
pub trait Selectable: Clone + std::fmt::Debug {
    /// Attribute as text, for display and filtering.
    fn attribute(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Attribute as stored. Canonical values are compared on this, never on text.
    fn attribute_value(&self, name: &str) -> Option<Cow<'_, Value>>;
}

/// Open-ended option record. Attribute order is kept as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionRecord(IndexMap<String, Value>);

impl OptionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for OptionRecord
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Selectable for OptionRecord {
    fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    fn attribute_value(&self, name: &str) -> Option<Cow<'_, Value>> {
        match self.0.get(name)? {
            Value::Null => None,
            value => Some(Cow::Borrowed(value)),
        }
    }
}

/// Plain strings are their own display text and value.
impl Selectable for String {
    fn attribute(&self, _name: &str) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }

    fn attribute_value(&self, _name: &str) -> Option<Cow<'_, Value>> {
        Some(Cow::Owned(Value::String(self.clone())))
    }
}

/// Which attribute is shown and which one is the canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSelectors {
    pub display_field: String,
    pub value_field: String,
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            display_field: DEFAULT_DISPLAY_FIELD.to_string(),
            value_field: DEFAULT_VALUE_FIELD.to_string(),
        }
    }
}

impl FieldSelectors {
    pub fn new(display_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            display_field: display_field.into(),
            value_field: value_field.into(),
        }
    }

    /// Display text of an option; a missing attribute reads as empty.
    pub fn display_of<'a, T: Selectable>(&self, option: &'a T) -> Cow<'a, str> {
        option
            .attribute(&self.display_field)
            .unwrap_or(Cow::Borrowed(""))
    }

    pub fn value_of<'a, T: Selectable>(&self, option: &'a T) -> Option<Cow<'a, Value>> {
        option.attribute_value(&self.value_field)
    }
}
