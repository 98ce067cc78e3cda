//! Mock directory implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::directory::errors::DirectoryResult;
use crate::directory::{AddressWriter, CustomerReader, CustomerWriter};
use crate::domain::address::{NewAddress, UpdateAddress};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::pagination::ResultMeta;
use crate::query::CustomerListQuery;

mock! {
    pub Directory {}

    #[async_trait]
    impl CustomerReader for Directory {
        async fn list_customers(
            &self,
            query: CustomerListQuery,
        ) -> DirectoryResult<(ResultMeta, Vec<Customer>)>;
        async fn get_customer_by_id(&self, id: i64) -> DirectoryResult<Customer>;
    }

    #[async_trait]
    impl CustomerWriter for Directory {
        async fn create_customer(&self, new_customer: &NewCustomer) -> DirectoryResult<()>;
        async fn update_customer(
            &self,
            customer_id: i64,
            updates: &UpdateCustomer,
        ) -> DirectoryResult<()>;
        async fn remove_customer(&self, customer_id: i64) -> DirectoryResult<()>;
    }

    #[async_trait]
    impl AddressWriter for Directory {
        async fn add_address(&self, customer_id: i64, address: &NewAddress) -> DirectoryResult<()>;
        async fn update_address(
            &self,
            customer_id: i64,
            address_id: i64,
            updates: &UpdateAddress,
        ) -> DirectoryResult<()>;
        async fn delete_address(&self, customer_id: i64, address_id: i64) -> DirectoryResult<()>;
        async fn mark_only_one_address(&self, customer_id: i64, value: bool) -> DirectoryResult<()>;
    }
}
