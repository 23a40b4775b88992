//! Hacker News API client
//!
//! Thin wrapper over the public Firebase v0 endpoints. Items and users that
//! do not exist come back from the API as the JSON literal `null`, which this
//! client surfaces as `Ok(None)` so callers can tell absence apart from
//! transport failure.

use crate::error::Result;
use crate::types::{Item, User};
use futures::future::join_all;

/// Base URL of the public Hacker News Firebase API
const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Client for the Hacker News item and user endpoints
#[derive(Clone, Debug)]
pub struct HnClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for HnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HnClient {
    /// Create a client against the public API
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against an alternative base URL
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch a single item by id
    ///
    /// Returns `Ok(None)` when the API reports no such item. HTTP and decode
    /// failures surface as [`crate::Error::Network`].
    pub async fn item(&self, id: u64) -> Result<Option<Item>> {
        let url = format!("{}/item/{id}.json", self.base_url);
        let item = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Option<Item>>()
            .await?;
        Ok(item)
    }

    /// Fetch a user profile by username
    ///
    /// Returns `Ok(None)` when the API reports no such user.
    pub async fn user(&self, name: &str) -> Result<Option<User>> {
        let url = format!("{}/user/{name}.json", self.base_url);
        let user = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Option<User>>()
            .await?;
        Ok(user)
    }

    /// Fetch a batch of items concurrently
    ///
    /// All ids are requested at once and every request settles before the
    /// batch returns. Ids that fail to fetch or do not exist are logged at
    /// warn level and dropped; one bad id never fails the batch.
    pub async fn items(&self, ids: &[u64]) -> Vec<Item> {
        let fetches = ids.iter().map(|&id| async move {
            match self.item(id).await {
                Ok(Some(item)) => Some(item),
                Ok(None) => {
                    tracing::warn!(id, "item not found, skipping");
                    None
                }
                Err(error) => {
                    tracing::warn!(id, %error, "failed to fetch item, skipping");
                    None
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}
