use serde::{Deserialize, Serialize};

/// Whether an address is currently usable for deliveries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressStatus {
    #[default]
    Active,
    Inactive,
}

impl AddressStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for AddressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for AddressStatus {
    fn from(value: &str) -> Self {
        match value {
            "inactive" => Self::Inactive,
            _ => Self::Active,
        }
    }
}

/// A postal address attached to a customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    /// Marks the customer's preferred delivery address.
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub status: AddressStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub is_primary: bool,
    pub status: AddressStatus,
}

impl NewAddress {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        line1: String,
        line2: Option<String>,
        city: String,
        state: String,
        country: String,
        pincode: String,
        is_primary: bool,
        status: AddressStatus,
    ) -> Self {
        Self {
            line1: line1.trim().to_string(),
            line2: line2
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            city: city.trim().to_string(),
            state: state.trim().to_string(),
            country: country.trim().to_string(),
            pincode: pincode.trim().to_string(),
            is_primary,
            status,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddress {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub is_primary: bool,
    pub status: AddressStatus,
}

impl UpdateAddress {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        line1: String,
        line2: Option<String>,
        city: String,
        state: String,
        country: String,
        pincode: String,
        is_primary: bool,
        status: AddressStatus,
    ) -> Self {
        Self {
            line1: line1.trim().to_string(),
            line2: line2
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            city: city.trim().to_string(),
            state: state.trim().to_string(),
            country: country.trim().to_string(),
            pincode: pincode.trim().to_string(),
            is_primary,
            status,
        }
    }
}
