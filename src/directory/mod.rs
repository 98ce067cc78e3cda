//! Boundary to the customer directory backend.
//!
//! The service layer talks to these traits only; the `http` feature supplies
//! the reqwest-backed implementation used by real deployments.

use async_trait::async_trait;

use crate::domain::address::{NewAddress, UpdateAddress};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::pagination::ResultMeta;
use crate::query::CustomerListQuery;

pub mod errors;
#[cfg(feature = "http")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

use errors::DirectoryResult;

#[async_trait]
pub trait CustomerReader {
    /// Fetches one page of customers matching the query, together with the
    /// listing metadata for the full result set.
    async fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> DirectoryResult<(ResultMeta, Vec<Customer>)>;

    async fn get_customer_by_id(&self, id: i64) -> DirectoryResult<Customer>;
}

#[async_trait]
pub trait CustomerWriter {
    async fn create_customer(&self, new_customer: &NewCustomer) -> DirectoryResult<()>;
    async fn update_customer(
        &self,
        customer_id: i64,
        updates: &UpdateCustomer,
    ) -> DirectoryResult<()>;
    async fn remove_customer(&self, customer_id: i64) -> DirectoryResult<()>;
}

#[async_trait]
pub trait AddressWriter {
    async fn add_address(&self, customer_id: i64, address: &NewAddress) -> DirectoryResult<()>;
    async fn update_address(
        &self,
        customer_id: i64,
        address_id: i64,
        updates: &UpdateAddress,
    ) -> DirectoryResult<()>;
    async fn delete_address(&self, customer_id: i64, address_id: i64) -> DirectoryResult<()>;

    /// Writes the customer's only-one-address flag. Callers are expected to
    /// check the single-address guard first.
    async fn mark_only_one_address(&self, customer_id: i64, value: bool) -> DirectoryResult<()>;
}
