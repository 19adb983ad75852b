use anyhow::{Context, Result};

use crate::{
    domain::FormSpec,
    form::{HostForm, Snapshot},
    io::{self, OutputOptions},
};

use super::{options::UiOptions, runtime::App};

/// Entry point: runs a host form in the terminal and returns what was submitted.
#[derive(Debug)]
pub struct SelectFormUI {
    form: HostForm,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl SelectFormUI {
    pub fn new(form: HostForm) -> Self {
        Self {
            form,
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn from_spec(spec: FormSpec) -> Result<Self> {
        let form = HostForm::from_spec(spec).context("invalid form spec")?;
        Ok(Self::new(form))
    }

    pub fn demo() -> Self {
        Self::new(HostForm::demo())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.form.set_title(title);
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Also write the snapshot out after the UI closes.
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    pub fn form(&self) -> &HostForm {
        &self.form
    }

    pub fn run(self) -> Result<Snapshot> {
        let SelectFormUI {
            form,
            options,
            output,
        } = self;

        log::info!(
            "starting form '{}' with {} field(s)",
            form.title().unwrap_or("<untitled>"),
            form.len()
        );
        let mut app = App::new(form, options);
        let snapshot = app.run()?;

        if let Some(output) = output {
            io::emit(&snapshot, &output)?;
        }
        Ok(snapshot)
    }
}
