use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::customer::{AccountType, NewCustomer, UpdateCustomer};
use crate::forms::{first_violation, require, rule_error};

/// Fields in the order the form presents them; the first violated rule is
/// the one reported.
const FIELD_ORDER: &[&str] = &["first_name", "last_name", "phone", "email"];

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for creating or editing a customer.
pub struct CustomerForm {
    #[validate(custom(function = first_name_rules))]
    pub first_name: String,
    #[validate(custom(function = last_name_rules))]
    pub last_name: String,
    #[validate(custom(function = phone_rules))]
    pub phone: String,
    #[validate(custom(function = email_rules))]
    pub email: String,
    #[serde(default)]
    pub account_type: AccountType,
}

impl CustomerForm {
    /// Returns the first violated rule's message, or `None` when the form is
    /// ready to submit.
    pub fn first_error(&self) -> Option<String> {
        self.validate()
            .err()
            .and_then(|errors| first_violation(&errors, FIELD_ORDER))
    }
}

fn first_name_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "First name is required.")
}

fn last_name_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "Last name is required.")
}

fn phone_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "Phone number is required.")?;
    if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(rule_error("phone_format", "Phone must be 10 digits."));
    }
    Ok(())
}

fn email_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "Email is required.")?;
    if !email_shape_ok(value) {
        return Err(rule_error("email_format", "Invalid email format."));
    }
    Ok(())
}

/// Submit-time shape check: no whitespace, a single `@` with a non-empty
/// local part, and a dot with characters on both sides in the domain.
fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

impl From<&CustomerForm> for NewCustomer {
    /// Converts a validated form into the create payload.
    fn from(form: &CustomerForm) -> Self {
        NewCustomer::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.account_type,
        )
    }
}

impl From<&CustomerForm> for UpdateCustomer {
    /// Converts a validated form into the edit payload.
    fn from(form: &CustomerForm) -> Self {
        UpdateCustomer::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.account_type,
        )
    }
}
