//! The host form contract.
//!
//! Mirrors the host's form-building surface with plain Rust types: an
//! element registers select fields, help keys, and conditional visibility
//! rules; the host renders the actual widgets.

use std::collections::BTreeMap;

/// One option in a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Form-building surface supplied by the host designer UI.
pub trait FormSurface {
    /// Registers a select field with the given options.
    fn add_select(&mut self, name: &str, label: &str, options: Vec<SelectOption>);

    /// Attaches localized help text to a previously added field.
    fn add_help(&mut self, field: &str, help: &str);

    /// Shows `field` only while `controller` holds exactly `value`.
    fn hide_unless_equals(&mut self, field: &str, controller: &str, value: &str);
}

/// Submitted form values, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    values: BTreeMap<String, String>,
}

impl FormSubmission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}
