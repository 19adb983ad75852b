#![deny(rust_2018_idioms)]

mod app;
pub mod domain;
pub mod form;
mod io;
mod presentation;

#[cfg(test)]
mod tests;

pub use app::{SelectFormUI, UiOptions};
pub use domain::{FieldSelectors, FieldSpec, FormSpec, OptionRecord, Selectable};
pub use form::{
    ControlEvent, ControlState, FieldBinding, FieldChange, FieldSlot, HostForm, SelectControl,
    SelectionChange, Snapshot, SubmitOutcome, ValidationError, ValidationErrors,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, load_form_spec, parse_document_str,
    parse_form_spec_str, parse_options_str, resolve_option_files,
};

pub mod prelude {
    pub use super::{
        FieldSelectors, HostForm, OptionRecord, SelectControl, SelectFormUI, UiOptions,
    };
}
