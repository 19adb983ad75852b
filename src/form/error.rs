use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// The only user-facing validation condition of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    RequiredFieldEmpty,
}

impl ValidationError {
    /// Key under which the error is reported in the error object.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::RequiredFieldEmpty => "required",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::RequiredFieldEmpty => "This field is required.",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Set of errors attached to a field, rendered as `{"required": true}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn single(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn required() -> Self {
        Self::single(ValidationError::RequiredFieldEmpty)
    }

    pub fn has(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.errors.iter().any(|error| error.key() == key)
    }

    pub fn push(&mut self, error: ValidationError) {
        if !self.has(error) {
            self.errors.push(error);
        }
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for error in other.errors {
            self.push(error);
        }
    }

    pub fn first(&self) -> Option<ValidationError> {
        self.errors.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `None` when nothing was collected.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .errors
            .iter()
            .map(|error| (error.key().to_string(), Value::Bool(true)))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(error.key(), &true)?;
        }
        map.end()
    }
}

/// Problems building or addressing a form, reported per field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub field: String,
    pub message: String,
}

impl FormError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unknown_field(field: &str) -> Self {
        Self::new(field, "no such field in form")
    }

    pub fn duplicate_field(field: &str) -> Self {
        Self::new(field, "field declared more than once")
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FormError {}
