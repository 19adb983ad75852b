use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::domain::{FormSpec, OptionRecord};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Parse a form spec document. Option files are not resolved here.
pub fn parse_form_spec_str(contents: &str, format: DocumentFormat) -> Result<FormSpec> {
    let value = parse_document_str(contents, format)?;
    serde_json::from_value(value).context("document is not a valid form spec")
}

/// Parse an option list: either a bare array or an object with an `options` array.
pub fn parse_options_str(contents: &str, format: DocumentFormat) -> Result<Vec<OptionRecord>> {
    let value = parse_document_str(contents, format)?;
    let list = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("options") {
            Some(options @ Value::Array(_)) => options,
            _ => bail!("expected an array of options or an object with an 'options' array"),
        },
        _ => bail!("expected an array of options or an object with an 'options' array"),
    };
    serde_json::from_value(list).context("options must be objects")
}

/// Read a form spec from disk and pull in every referenced option file.
pub fn load_form_spec(path: &Path) -> Result<FormSpec> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read form spec {}", path.display()))?;
    let format = DocumentFormat::from_extension(path).unwrap_or_default();
    let mut spec = parse_form_spec_str(&contents, format)
        .with_context(|| format!("failed to load form spec {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    resolve_option_files(&mut spec, base)?;
    Ok(spec)
}

/// Load every `optionsFile` reference relative to `base` into its field.
pub fn resolve_option_files(spec: &mut FormSpec, base: &Path) -> Result<()> {
    for field in &mut spec.fields {
        let Some(relative) = field.options_file.take() else {
            continue;
        };
        let options_path = base.join(&relative);
        let contents = fs::read_to_string(&options_path).with_context(|| {
            format!(
                "failed to read options for field '{}' from {}",
                field.name,
                options_path.display()
            )
        })?;
        let format = DocumentFormat::from_extension(&options_path).unwrap_or_default();
        let options = parse_options_str(&contents, format).with_context(|| {
            format!("failed to parse options for field '{}'", field.name)
        })?;
        log::debug!(
            "loaded {} option(s) for field '{}' from {}",
            options.len(),
            field.name,
            options_path.display()
        );
        field.options.extend(options);
    }
    Ok(())
}
