//! The only-one-address flag and its guarded toggle transition.

use crate::directory::AddressWriter;
use crate::domain::address::Address;
use crate::domain::customer::Customer;
use crate::services::{ServiceError, ServiceResult, display_message};

/// Fallback shown when the directory rejects a flag write without a message.
pub const UPDATE_FLAG_FALLBACK: &str = "Failed to update flag.";

/// The flag may only change while the customer has exactly one address.
pub fn can_toggle(addresses: &[Address]) -> bool {
    addresses.len() == 1
}

/// Requests the inverse flag value from the directory.
///
/// The guard is re-checked here even though callers disable the control when
/// it does not hold: a violating call fails fast without touching the
/// directory. On success the returned value is the one to display; the flag
/// must not flip before the directory confirms.
pub async fn toggle_only_one_address<D>(
    directory: &D,
    customer_id: i64,
    addresses: &[Address],
    current_value: bool,
) -> ServiceResult<bool>
where
    D: AddressWriter + ?Sized,
{
    if !can_toggle(addresses) {
        return Err(ServiceError::InvariantViolation);
    }

    let requested = !current_value;

    directory
        .mark_only_one_address(customer_id, requested)
        .await
        .map_err(|err| {
            log::error!("Failed to update only-one-address flag: {err}");
            ServiceError::UpdateFailed(display_message(&err, UPDATE_FLAG_FALLBACK))
        })?;

    Ok(requested)
}

/// Per-customer toggle state: the confirmed flag value plus the address
/// collection that scopes the guard.
#[derive(Debug, Clone)]
pub struct OnlyOneAddressToggle {
    customer_id: i64,
    value: bool,
    addresses: Vec<Address>,
}

impl OnlyOneAddressToggle {
    /// Seeds the toggle from a freshly loaded customer.
    pub fn for_customer(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id,
            value: customer.has_only_one_address,
            addresses: customer.addresses.clone(),
        }
    }

    /// The last directory-confirmed flag value.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Whether the control should be enabled at all.
    pub fn can_toggle(&self) -> bool {
        can_toggle(&self.addresses)
    }

    /// Runs the guarded transition, adopting the new value only after the
    /// directory confirms it.
    pub async fn toggle<D>(&mut self, directory: &D) -> ServiceResult<bool>
    where
        D: AddressWriter + ?Sized,
    {
        let confirmed =
            toggle_only_one_address(directory, self.customer_id, &self.addresses, self.value)
                .await?;
        self.value = confirmed;
        Ok(confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::errors::DirectoryError;
    use crate::directory::mock::MockDirectory;
    use crate::domain::address::AddressStatus;

    fn address(id: i64) -> Address {
        Address {
            id,
            line1: format!("{id} Lake Road"),
            line2: None,
            city: "Pune".to_string(),
            state: "MH".to_string(),
            country: "India".to_string(),
            pincode: "411001".to_string(),
            is_primary: false,
            status: AddressStatus::Active,
        }
    }

    fn customer_with_addresses(addresses: Vec<Address>) -> Customer {
        Customer {
            id: 5,
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            addresses,
            ..Customer::default()
        }
    }

    #[test]
    fn guard_holds_only_for_exactly_one_address() {
        assert!(!can_toggle(&[]));
        assert!(can_toggle(&[address(1)]));
        assert!(!can_toggle(&[address(1), address(2)]));

        let many: Vec<Address> = (1..=4).map(address).collect();
        assert!(!can_toggle(&many));
    }

    /// A violating call must fail fast without reaching the directory.
    #[tokio::test]
    async fn toggle_with_two_addresses_never_calls_the_directory() {
        let mut directory = MockDirectory::new();
        directory.expect_mark_only_one_address().times(0);

        let result =
            toggle_only_one_address(&directory, 5, &[address(1), address(2)], false).await;

        assert!(matches!(result, Err(ServiceError::InvariantViolation)));
    }

    #[tokio::test]
    async fn toggle_with_no_addresses_never_calls_the_directory() {
        let mut directory = MockDirectory::new();
        directory.expect_mark_only_one_address().times(0);

        let result = toggle_only_one_address(&directory, 5, &[], true).await;

        assert!(matches!(result, Err(ServiceError::InvariantViolation)));
    }

    #[tokio::test]
    async fn toggle_requests_the_inverse_value() {
        let mut directory = MockDirectory::new();
        directory
            .expect_mark_only_one_address()
            .withf(|customer_id, value| *customer_id == 5 && *value)
            .times(1)
            .returning(|_, _| Ok(()));

        let confirmed = toggle_only_one_address(&directory, 5, &[address(1)], false)
            .await
            .expect("toggle should succeed");

        assert!(confirmed);
    }

    #[tokio::test]
    async fn toggle_state_flips_only_after_confirmation() {
        let customer = customer_with_addresses(vec![address(1)]);
        let mut toggle = OnlyOneAddressToggle::for_customer(&customer);
        assert!(toggle.can_toggle());
        assert!(!toggle.value());

        let mut directory = MockDirectory::new();
        directory
            .expect_mark_only_one_address()
            .returning(|_, _| Ok(()));

        toggle.toggle(&directory).await.expect("toggle should succeed");

        assert!(toggle.value());
    }

    #[tokio::test]
    async fn failed_write_keeps_the_displayed_value() {
        let customer = customer_with_addresses(vec![address(1)]);
        let mut toggle = OnlyOneAddressToggle::for_customer(&customer);

        let mut directory = MockDirectory::new();
        directory.expect_mark_only_one_address().returning(|_, _| {
            Err(DirectoryError::Api {
                status: 500,
                message: None,
            })
        });

        let result = toggle.toggle(&directory).await;

        assert_eq!(
            result,
            Err(ServiceError::UpdateFailed("Failed to update flag.".to_string()))
        );
        assert!(!toggle.value());
    }

    #[tokio::test]
    async fn failed_write_surfaces_the_server_message() {
        let mut directory = MockDirectory::new();
        directory.expect_mark_only_one_address().returning(|_, _| {
            Err(DirectoryError::Api {
                status: 409,
                message: Some("Flag is locked by billing.".to_string()),
            })
        });

        let result = toggle_only_one_address(&directory, 5, &[address(1)], true).await;

        assert_eq!(
            result,
            Err(ServiceError::UpdateFailed(
                "Flag is locked by billing.".to_string()
            ))
        );
    }

    /// Disabling the flag goes through the same guard as enabling it.
    #[tokio::test]
    async fn disabling_requests_false() {
        let mut directory = MockDirectory::new();
        directory
            .expect_mark_only_one_address()
            .withf(|_, value| !*value)
            .times(1)
            .returning(|_, _| Ok(()));

        let confirmed = toggle_only_one_address(&directory, 5, &[address(1)], true)
            .await
            .expect("toggle should succeed");

        assert!(!confirmed);
    }
}
