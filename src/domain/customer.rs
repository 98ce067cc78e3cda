use serde::{Deserialize, Serialize};

use crate::domain::address::Address;

/// Billing tier of a customer account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Standard,
    Premium,
    Enterprise,
}

impl AccountType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Enterprise => "enterprise",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for AccountType {
    fn from(value: &str) -> Self {
        match value {
            "premium" => Self::Premium,
            "enterprise" => Self::Enterprise,
            _ => Self::Standard,
        }
    }
}

/// A customer record as the directory returns it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub account_type: AccountType,
    /// Postal addresses on file, in directory order.
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Directory-side bookkeeping flag; see the only-one-address toggle.
    #[serde(default)]
    pub has_only_one_address: bool,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub account_type: AccountType,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        phone: String,
        email: String,
        account_type: AccountType,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            account_type,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub account_type: AccountType,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        phone: String,
        email: String,
        account_type: AccountType,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            account_type,
        }
    }
}
