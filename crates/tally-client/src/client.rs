use crate::{ApiEndpoint, Error, OwnerLookup, RecordFetcher, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tally_core::{Owner, Task};

const USER_AGENT: &str = concat!("tally/", env!("CARGO_PKG_VERSION"));

/// [`RecordFetcher`] backed by the remote REST collections.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    endpoint: ApiEndpoint,
}

impl HttpFetcher {
    pub fn new(endpoint: ApiEndpoint) -> Result<Self> {
        Self::with_timeout(endpoint, None)
    }

    /// `None` keeps the transport default (no timeout).
    pub fn with_timeout(endpoint: ApiEndpoint, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    async fn get_collection<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::error!("Collection fetch failed: {} ({})", url, status);
            return Err(Error::Status { url, status });
        }

        let body = response.text().await?;
        let records: Vec<T> = serde_json::from_str(&body)?;

        tracing::debug!("Fetched {} records from {}", records.len(), url);

        Ok(records)
    }
}

#[async_trait]
impl RecordFetcher for HttpFetcher {
    async fn fetch_owner(&self, id: i64) -> Result<OwnerLookup> {
        let url = self.endpoint.user_url(id);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::info!("Owner {} not found ({})", id, response.status());
            return Ok(OwnerLookup::NotFound);
        }

        let body = response.text().await?;
        let owner: Owner = serde_json::from_str(&body)?;

        Ok(OwnerLookup::Found(owner))
    }

    async fn fetch_tasks(&self, owner_id: Option<i64>) -> Result<Vec<Task>> {
        let url = match owner_id {
            Some(id) => self.endpoint.todos_for_user_url(id),
            None => self.endpoint.todos_url(),
        };

        self.get_collection(url).await
    }

    async fn fetch_all_owners(&self) -> Result<Vec<Owner>> {
        self.get_collection(self.endpoint.users_url()).await
    }
}
