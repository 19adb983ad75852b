use serde_json::Value;

use crate::domain::{FieldSelectors, Selectable};

/// Lower-cased filter text for a raw input value; non-text input filters as "".
pub fn filter_text(input: &Value) -> String {
    input.as_str().map(str::to_lowercase).unwrap_or_default()
}

/// Lazily filtered view over an option list. Cloning restarts it.
#[derive(Debug, Clone)]
pub struct Filtered<'a, T> {
    options: std::slice::Iter<'a, T>,
    selectors: &'a FieldSelectors,
    needle: String,
}

impl<'a, T: Selectable> Iterator for Filtered<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let selectors = self.selectors;
        let needle = self.needle.as_str();
        self.options.by_ref().find(|option| {
            needle.is_empty()
                || selectors
                    .display_of(*option)
                    .to_lowercase()
                    .contains(needle)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.options.size_hint().1)
    }
}

/// Keeps the options whose display attribute contains the input, ignoring case.
pub fn filter_options<'a, T: Selectable>(
    options: &'a [T],
    selectors: &'a FieldSelectors,
    input: &Value,
) -> Filtered<'a, T> {
    Filtered {
        options: options.iter(),
        selectors,
        needle: filter_text(input),
    }
}
