//! Remote Contact Repository
//!
//! Pass-through to an HTTP collection at `{base_url}/users`.
//! No retries, no caching.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::records::decode_contacts;
use super::traits::Repository;
use crate::domain::{Contact, ContactId, DomainError, DomainResult};

/// Contacts held by a REST service
#[derive(Clone, Debug)]
pub struct RemoteContactRepository {
    client: Client,
    base_url: String,
}

impl RemoteContactRepository {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn item_url(&self, id: ContactId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

fn read_error(e: reqwest::Error) -> DomainError {
    DomainError::StoreRead(e.to_string())
}

fn write_error(e: reqwest::Error) -> DomainError {
    DomainError::StoreWrite(e.to_string())
}

/// Non-2xx responses are failures
fn checked(response: Response, to_error: fn(reqwest::Error) -> DomainError) -> DomainResult<Response> {
    response.error_for_status().map_err(to_error)
}

#[async_trait(?Send)]
impl Repository<Contact> for RemoteContactRepository {
    async fn create(&self, entity: &Contact) -> DomainResult<Contact> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&entity.fields())
            .send()
            .await
            .map_err(write_error)?;
        checked(response, write_error)?
            .json::<Contact>()
            .await
            .map_err(write_error)
    }

    async fn list(&self) -> DomainResult<Vec<Contact>> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(read_error)?;
        let records = checked(response, read_error)?
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(read_error)?;
        Ok(decode_contacts(records))
    }

    async fn update(&self, entity: &Contact) -> DomainResult<Contact> {
        let response = self
            .client
            .put(self.item_url(entity.id))
            .json(entity)
            .send()
            .await
            .map_err(write_error)?;
        checked(response, write_error)?
            .json::<Contact>()
            .await
            .map_err(write_error)
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(write_error)?;
        checked(response, write_error)?;
        Ok(())
    }
}
