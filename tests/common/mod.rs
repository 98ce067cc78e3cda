//! Shared in-memory directory stub for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use custodesk::directory::errors::{DirectoryError, DirectoryResult};
use custodesk::directory::{CustomerReader, CustomerWriter};
use custodesk::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use custodesk::pagination::ResultMeta;
use custodesk::query::CustomerListQuery;

/// Scripted directory double: queues one outcome per expected call and
/// records what the caller asked for. With no queued outcome, listing
/// answers an empty result set and removals succeed.
#[derive(Default)]
pub struct StubDirectory {
    list_outcomes: Mutex<VecDeque<DirectoryResult<(ResultMeta, Vec<Customer>)>>>,
    remove_outcomes: Mutex<VecDeque<DirectoryResult<()>>>,
    pub list_queries: Mutex<Vec<CustomerListQuery>>,
    pub removed_ids: Mutex<Vec<i64>>,
}

impl StubDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, outcome: DirectoryResult<(ResultMeta, Vec<Customer>)>) {
        self.list_outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn push_remove(&self, outcome: DirectoryResult<()>) {
        self.remove_outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn list_calls(&self) -> usize {
        self.list_queries.lock().unwrap().len()
    }
}

#[async_trait]
impl CustomerReader for StubDirectory {
    async fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> DirectoryResult<(ResultMeta, Vec<Customer>)> {
        self.list_queries.lock().unwrap().push(query);
        self.list_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok((ResultMeta::default(), Vec::new())))
    }

    async fn get_customer_by_id(&self, _id: i64) -> DirectoryResult<Customer> {
        Err(DirectoryError::NotFound)
    }
}

#[async_trait]
impl CustomerWriter for StubDirectory {
    async fn create_customer(&self, _new_customer: &NewCustomer) -> DirectoryResult<()> {
        Ok(())
    }

    async fn update_customer(
        &self,
        _customer_id: i64,
        _updates: &UpdateCustomer,
    ) -> DirectoryResult<()> {
        Ok(())
    }

    async fn remove_customer(&self, customer_id: i64) -> DirectoryResult<()> {
        self.removed_ids.lock().unwrap().push(customer_id);
        self.remove_outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

pub fn customer(id: i64, first_name: &str, last_name: &str) -> Customer {
    Customer {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: "9876543210".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        ..Customer::default()
    }
}

pub fn listing(
    total_count: usize,
    page_count: usize,
    customers: Vec<Customer>,
) -> DirectoryResult<(ResultMeta, Vec<Customer>)> {
    Ok((
        ResultMeta {
            total_count,
            page_count,
        },
        customers,
    ))
}
