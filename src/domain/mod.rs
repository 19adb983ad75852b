mod demo;
mod option;
mod spec;

pub use demo::{country_options, demo_form_spec, week_day_options};
pub use option::{
    DEFAULT_DISPLAY_FIELD, DEFAULT_VALUE_FIELD, FieldSelectors, OptionRecord, Selectable,
};
pub use spec::{DEFAULT_PLACEHOLDER, FieldSpec, FormSpec};
