//! HTTP client for the material snapshot
//!
//! Fetches the static JSON array of materials used to seed local storage the
//! first time the catalog is loaded.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::services::SnapshotSource;
use shared::{Material, StoreError};

use crate::config::SnapshotConfig;
use crate::error::AppResult;

/// Snapshot API client
#[derive(Clone)]
pub struct HttpSnapshotClient {
    client: Client,
    url: String,
}

impl HttpSnapshotClient {
    /// Create a new client for `url`
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &SnapshotConfig) -> AppResult<Self> {
        Self::new(config.url.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotClient {
    async fn fetch_materials(&self) -> Result<Vec<Material>, StoreError> {
        tracing::info!(url = %self.url, "Fetching material snapshot");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StoreError::Fetch(format!("Request to {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(StoreError::Fetch(format!(
                "{} returned status {}",
                self.url,
                response.status()
            )));
        }

        response
            .json::<Vec<Material>>()
            .await
            .map_err(|e| StoreError::Fetch(format!("Invalid snapshot from {}: {}", self.url, e)))
    }
}
