//! Submit services for customer and address mutations.

use crate::directory::{AddressWriter, CustomerReader, CustomerWriter};
use crate::domain::address::{NewAddress, UpdateAddress};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::forms::address::AddressForm;
use crate::forms::customer::CustomerForm;
use crate::services::{ServiceError, ServiceResult, display_message};

/// Success message for a completed create submit.
pub const CUSTOMER_CREATED: &str = "Customer created successfully.";
/// Success message for a completed edit submit.
pub const CUSTOMER_UPDATED: &str = "Customer updated successfully.";
/// Success message shown after an address is added.
pub const ADDRESS_ADDED: &str = "Address added successfully!";

/// Validates and submits a new customer record.
pub async fn create_customer<D>(directory: &D, form: &CustomerForm) -> ServiceResult<()>
where
    D: CustomerWriter + ?Sized,
{
    if let Some(message) = form.first_error() {
        return Err(ServiceError::ValidationFailed(message));
    }

    let new_customer = NewCustomer::from(form);
    directory
        .create_customer(&new_customer)
        .await
        .map_err(|err| {
            log::error!("Failed to create customer: {err}");
            ServiceError::SubmitFailed(display_message(&err, "Failed to create customer."))
        })
}

/// Validates and submits edits to an existing customer.
pub async fn update_customer<D>(
    directory: &D,
    customer_id: i64,
    form: &CustomerForm,
) -> ServiceResult<()>
where
    D: CustomerWriter + ?Sized,
{
    if let Some(message) = form.first_error() {
        return Err(ServiceError::ValidationFailed(message));
    }

    let updates = UpdateCustomer::from(form);
    directory
        .update_customer(customer_id, &updates)
        .await
        .map_err(|err| {
            log::error!("Failed to update customer {customer_id}: {err}");
            ServiceError::SubmitFailed(display_message(&err, "Failed to update customer."))
        })
}

/// Loads one customer for the details view.
pub async fn get_customer<D>(directory: &D, customer_id: i64) -> ServiceResult<Customer>
where
    D: CustomerReader + ?Sized,
{
    directory
        .get_customer_by_id(customer_id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch customer {customer_id}: {err}");
            ServiceError::FetchFailed(display_message(&err, "Failed to fetch customer."))
        })
}

/// Validates and submits a new address for the customer.
pub async fn add_address<D>(
    directory: &D,
    customer_id: i64,
    form: &AddressForm,
) -> ServiceResult<()>
where
    D: AddressWriter + ?Sized,
{
    if let Some(message) = form.first_error() {
        return Err(ServiceError::ValidationFailed(message));
    }

    let address = NewAddress::from(form);
    directory
        .add_address(customer_id, &address)
        .await
        .map_err(|err| {
            log::error!("Failed to add address for customer {customer_id}: {err}");
            ServiceError::SubmitFailed(display_message(&err, "Failed to add address."))
        })
}

/// Validates and submits edits to an existing address.
pub async fn update_address<D>(
    directory: &D,
    customer_id: i64,
    address_id: i64,
    form: &AddressForm,
) -> ServiceResult<()>
where
    D: AddressWriter + ?Sized,
{
    if let Some(message) = form.first_error() {
        return Err(ServiceError::ValidationFailed(message));
    }

    let updates = UpdateAddress::from(form);
    directory
        .update_address(customer_id, address_id, &updates)
        .await
        .map_err(|err| {
            log::error!("Failed to update address {address_id} for customer {customer_id}: {err}");
            ServiceError::SubmitFailed(display_message(&err, "Failed to update address."))
        })
}

/// Removes one address from the customer.
pub async fn delete_address<D>(
    directory: &D,
    customer_id: i64,
    address_id: i64,
) -> ServiceResult<()>
where
    D: AddressWriter + ?Sized,
{
    directory
        .delete_address(customer_id, address_id)
        .await
        .map_err(|err| {
            log::error!("Failed to delete address {address_id} for customer {customer_id}: {err}");
            ServiceError::DeleteFailed(display_message(&err, "Failed to delete address."))
        })
}
