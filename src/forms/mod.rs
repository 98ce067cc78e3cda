//! Form definitions and submit-time validation backing the customer views.
//!
//! Each form reports at most one message per submit attempt: fields are
//! checked in their declared order and the first violated rule wins.

use validator::{ValidationError, ValidationErrors};

pub mod address;
pub mod customer;

/// Builds a coded rule failure carrying its display message.
pub(crate) fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Rejects values that are empty after trimming.
pub(crate) fn require(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error("required", message));
    }
    Ok(())
}

/// Walks fields in declared order and returns the first violation's message.
pub(crate) fn first_violation(errors: &ValidationErrors, fields: &[&str]) -> Option<String> {
    let by_field = errors.field_errors();
    for field in fields {
        if let Some(field_errors) = by_field.get(*field) {
            if let Some(err) = field_errors.first() {
                return Some(
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                );
            }
        }
    }
    None
}
