pub(crate) mod input;
mod options;
mod runtime;
mod select_form;
mod status;
mod terminal;

pub use options::UiOptions;
pub use select_form::SelectFormUI;
