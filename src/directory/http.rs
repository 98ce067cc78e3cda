//! Reqwest-backed customer directory client.
//!
//! Every directory response is wrapped in a JSON envelope:
//! `{"success": bool, "data": ..., "meta": {...}, "message": "..."}`.
//! Listing responses carry `meta`; failure responses carry `message`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::DirectoryConfig;
use crate::directory::errors::{DirectoryError, DirectoryResult};
use crate::directory::{AddressWriter, CustomerReader, CustomerWriter};
use crate::domain::address::{NewAddress, UpdateAddress};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::pagination::ResultMeta;
use crate::query::CustomerListQuery;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    meta: Option<ResultMeta>,
    message: Option<String>,
}

/// HTTP client for the customer directory REST collection.
#[derive(Clone)]
pub struct HttpCustomerDirectory {
    client: Client,
    base_url: String,
}

impl HttpCustomerDirectory {
    /// Builds a directory client from the given configuration. The base URL
    /// should point at the customer collection itself, e.g.
    /// `https://directory.example.com/api/customers`.
    pub fn new(config: &DirectoryConfig) -> DirectoryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DirectoryError::Unexpected(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a non-success response to an error, keeping any envelope
    /// message for display. Only a 404 without one is a plain `NotFound`.
    async fn fail_from(response: Response) -> DirectoryError {
        let status = response.status();
        let message = response
            .json::<Envelope<serde_json::Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.message);

        if status == StatusCode::NOT_FOUND && message.is_none() {
            return DirectoryError::NotFound;
        }

        DirectoryError::Api {
            status: status.as_u16(),
            message,
        }
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> DirectoryResult<Envelope<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::fail_from(response).await);
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| DirectoryError::Decode(e.to_string()))?;

        if !envelope.success {
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                message: envelope.message,
            });
        }

        Ok(envelope)
    }

    /// Sends a mutation and checks the envelope, discarding any payload.
    async fn read_ack(response: Response) -> DirectoryResult<()> {
        Self::read_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }
}

#[async_trait]
impl CustomerReader for HttpCustomerDirectory {
    async fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> DirectoryResult<(ResultMeta, Vec<Customer>)> {
        let response = self.client.get(self.url("")).query(&query).send().await?;
        let envelope: Envelope<Vec<Customer>> = Self::read_envelope(response).await?;

        Ok((
            envelope.meta.unwrap_or_default(),
            envelope.data.unwrap_or_default(),
        ))
    }

    async fn get_customer_by_id(&self, id: i64) -> DirectoryResult<Customer> {
        let response = self.client.get(self.url(&format!("/{id}"))).send().await?;
        let envelope: Envelope<Customer> = Self::read_envelope(response).await?;

        envelope
            .data
            .ok_or_else(|| DirectoryError::Decode("missing customer payload".to_string()))
    }
}

#[async_trait]
impl CustomerWriter for HttpCustomerDirectory {
    async fn create_customer(&self, new_customer: &NewCustomer) -> DirectoryResult<()> {
        let response = self
            .client
            .post(self.url(""))
            .json(new_customer)
            .send()
            .await?;
        Self::read_ack(response).await
    }

    async fn update_customer(
        &self,
        customer_id: i64,
        updates: &UpdateCustomer,
    ) -> DirectoryResult<()> {
        let response = self
            .client
            .patch(self.url(&format!("/{customer_id}")))
            .json(updates)
            .send()
            .await?;
        Self::read_ack(response).await
    }

    async fn remove_customer(&self, customer_id: i64) -> DirectoryResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/{customer_id}")))
            .send()
            .await?;
        Self::read_ack(response).await
    }
}

#[async_trait]
impl AddressWriter for HttpCustomerDirectory {
    async fn add_address(&self, customer_id: i64, address: &NewAddress) -> DirectoryResult<()> {
        let response = self
            .client
            .post(self.url(&format!("/{customer_id}/addresses")))
            .json(address)
            .send()
            .await?;
        Self::read_ack(response).await
    }

    async fn update_address(
        &self,
        customer_id: i64,
        address_id: i64,
        updates: &UpdateAddress,
    ) -> DirectoryResult<()> {
        let response = self
            .client
            .patch(self.url(&format!("/{customer_id}/addresses/{address_id}")))
            .json(updates)
            .send()
            .await?;
        Self::read_ack(response).await
    }

    async fn delete_address(&self, customer_id: i64, address_id: i64) -> DirectoryResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/{customer_id}/addresses/{address_id}")))
            .send()
            .await?;
        Self::read_ack(response).await
    }

    async fn mark_only_one_address(&self, customer_id: i64, value: bool) -> DirectoryResult<()> {
        let response = self
            .client
            .post(self.url(&format!("/{customer_id}/only-one-address")))
            .json(&serde_json::json!({ "value": value }))
            .send()
            .await?;
        Self::read_ack(response).await
    }
}
