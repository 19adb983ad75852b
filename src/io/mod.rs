mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{
    load_form_spec, parse_document_str, parse_form_spec_str, parse_options_str,
    resolve_option_files,
};
pub use output::{OutputDestination, OutputOptions, emit};
