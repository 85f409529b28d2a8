//! Per-field form validation results.

use std::collections::BTreeMap;

use super::ValidationError;

/// Field errors collected while validating a submitted form.
///
/// Every failing field is reported, not just the first one, so a
/// re-rendered form can show all messages at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_default().push(message.into());
    }

    pub fn push(&mut self, error: ValidationError) {
        let field = error.field().to_string();
        self.add(field, error.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages for one field, empty if the field passed.
    pub fn for_field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `Ok(value)` when no errors were collected.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, msgs)| format!("{}: {}", field, msgs.join("; ")))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Trims `value` and checks it is present and within `max` characters.
pub fn required_text(
    errors: &mut FormErrors,
    field: &str,
    value: &str,
    max: usize,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::empty_field(field));
    } else if trimmed.chars().count() > max {
        errors.push(ValidationError::too_long(field, max, trimmed.chars().count()));
    }
    trimmed.to_string()
}

/// Checks `value` is an absolute http(s) URL with a host, at most `max` long.
pub fn http_url(errors: &mut FormErrors, field: &str, value: &str, max: usize) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::empty_field(field));
        return String::new();
    }
    if trimmed.chars().count() > max {
        errors.push(ValidationError::too_long(field, max, trimmed.chars().count()));
        return trimmed.to_string();
    }
    match url::Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {}
        Ok(parsed) => errors.push(ValidationError::invalid_format(
            field,
            format!("unsupported URL scheme '{}'", parsed.scheme()),
        )),
        Err(e) => errors.push(ValidationError::invalid_format(field, e.to_string())),
    }
    trimmed.to_string()
}
