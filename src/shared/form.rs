// src/shared/form.rs
use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `Ok(value)` when no field has collected a message.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Trimmed, required text. Pushes the required message when blank.
pub fn clean_required_text(field: &str, raw: &str, errors: &mut FormErrors) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        errors.add(field, REQUIRED_MESSAGE);
    }
    cleaned.to_string()
}

/// Length is counted in characters, not bytes.
pub fn check_max_chars(field: &str, value: &str, max: usize, errors: &mut FormErrors) {
    let count = value.chars().count();
    if count > max {
        errors.add(
            field,
            format!("Ensure this value has at most {max} characters (it has {count})."),
        );
    }
}
