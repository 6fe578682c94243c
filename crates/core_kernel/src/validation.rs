//! Helpers for reporting input validation failures

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Rejects text that is empty or consists only of whitespace
///
/// Use next to a `length` rule on required text fields:
/// `#[validate(custom(function = "not_blank"))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("is verplicht"));
        return Err(error);
    }
    Ok(())
}

/// Flattens `validator` errors into stable, human-readable messages
///
/// Each message has the form `field: reason`. Messages are sorted so the
/// output does not depend on hash map iteration order.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let reason = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{}: {}", field, reason)
            })
        })
        .collect();
    messages.sort();
    messages
}
