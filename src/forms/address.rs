use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::address::{AddressStatus, NewAddress, UpdateAddress};
use crate::forms::{first_violation, require};

const FIELD_ORDER: &[&str] = &["line1", "city", "state", "country", "pincode"];

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for adding or editing a postal address. The second line is
/// optional; every other text field is required.
pub struct AddressForm {
    #[validate(custom(function = line1_rules))]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[validate(custom(function = city_rules))]
    pub city: String,
    #[validate(custom(function = state_rules))]
    pub state: String,
    #[validate(custom(function = country_rules))]
    pub country: String,
    #[validate(custom(function = pincode_rules))]
    pub pincode: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub status: AddressStatus,
}

impl AddressForm {
    /// Returns the first violated rule's message, or `None` when the form is
    /// ready to submit.
    pub fn first_error(&self) -> Option<String> {
        self.validate()
            .err()
            .and_then(|errors| first_violation(&errors, FIELD_ORDER))
    }

    fn line2(&self) -> Option<String> {
        let line2 = self.line2.trim();
        if line2.is_empty() {
            None
        } else {
            Some(line2.to_string())
        }
    }
}

fn line1_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "Address Line 1 is required.")
}

fn city_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "City is required.")
}

fn state_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "State is required.")
}

fn country_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "Country is required.")
}

fn pincode_rules(value: &str) -> Result<(), ValidationError> {
    require(value, "Pincode is required.")
}

impl From<&AddressForm> for NewAddress {
    /// Converts a validated form into the add payload.
    fn from(form: &AddressForm) -> Self {
        NewAddress::new(
            form.line1.clone(),
            form.line2(),
            form.city.clone(),
            form.state.clone(),
            form.country.clone(),
            form.pincode.clone(),
            form.is_primary,
            form.status,
        )
    }
}

impl From<&AddressForm> for UpdateAddress {
    /// Converts a validated form into the edit payload.
    fn from(form: &AddressForm) -> Self {
        UpdateAddress::new(
            form.line1.clone(),
            form.line2(),
            form.city.clone(),
            form.state.clone(),
            form.country.clone(),
            form.pincode.clone(),
            form.is_primary,
            form.status,
        )
    }
}
