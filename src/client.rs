//! HTTP client for the inventory service
//!
//! Typed wrapper over the five inventory routes, used by `inventory-cli` and
//! usable from any other Rust program that needs to talk to a running
//! service.
//!
//! # Example
//!
//! ```rust,no_run
//! use server_inventory::client::InventoryClient;
//! use server_inventory::models::ServerPayload;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = InventoryClient::new("http://127.0.0.1:46664")?;
//! let server = client
//!     .create(&ServerPayload::new("srv1", "10.0.0.1", "up"))
//!     .await?;
//! println!("Created server {}", server.id);
//! # Ok(())
//! # }
//! ```

use crate::models::{Server, ServerPayload};
use crate::routes;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Errors returned by [`InventoryClient`]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Non-success status; `message` is the plain-text reason the service sent
    #[error("Server responded with {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    message: String,
}

#[derive(Clone)]
pub struct InventoryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl InventoryClient {
    /// Creates a client for the service at `base_url` with a 30 second timeout
    ///
    /// A path in `base_url` (e.g. `http://host/inventory`) is kept as a prefix
    /// of every route.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        // Route paths are joined relative to the base, so keep its path as a directory
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    pub async fn create(&self, payload: &ServerPayload) -> Result<Server, ClientError> {
        let response = self
            .client
            .post(self.url(routes::INPUT_SERVER_DATA)?)
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn list(&self) -> Result<Vec<Server>, ClientError> {
        let response = self
            .client
            .get(self.url(routes::GET_ALL_SERVER_DATA)?)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get(&self, id: i64) -> Result<Server, ClientError> {
        let path = routes::by_id_path(routes::GET_SERVER_BY_ID, id);
        let response = self.client.get(self.url(&path)?).send().await?;
        decode(response).await
    }

    pub async fn update(&self, id: i64, payload: &ServerPayload) -> Result<Server, ClientError> {
        let path = routes::by_id_path(routes::UPDATE_SERVER_BY_ID, id);
        let response = self
            .client
            .put(self.url(&path)?)
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    /// Deletes a server and returns the service's confirmation message
    pub async fn delete(&self, id: i64) -> Result<String, ClientError> {
        let path = routes::by_id_path(routes::DELETE_SERVER_BY_ID, id);
        let response = self.client.delete(self.url(&path)?).send().await?;
        let body: DeleteResponse = decode(response).await?;
        Ok(body.message)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default().trim().to_string();
        return Err(ClientError::Status { status, message });
    }

    Ok(response.json::<T>().await?)
}
