use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::converter::is_absolute_url;
use crate::error::{ClientError, ConfigError};
use crate::models::RawItem;

pub const BASE_URL: &str = "https://hacker-news.firebaseio.com";
pub const API_VERSION: &str = "v0";
pub const TOP_STORIES_ENDPOINT: &str = "topstories.json";

/// Bounds on how many top stories can be requested in one call.
pub const MIN_AMOUNT: usize = 1;
pub const MAX_AMOUNT: usize = 500;

/// Read-only source of raw items, keyed by identifier. Implemented by
/// [`HackerNewsClient`] for the live API and by in-memory fixtures in tests.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn item(&self, id: i64) -> Result<RawItem, ClientError>;
}

/// Thin client for the Hacker News API. Each call performs exactly one
/// outbound request; there is no caching and no retry.
pub struct HackerNewsClient {
    client: Client,
    api_url: String,
}

impl HackerNewsClient {
    /// Creates a client against the live API with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self, ConfigError> {
        Self::with_base_url(&format!("{BASE_URL}/{API_VERSION}"), timeout_secs)
    }

    /// Creates a client against an explicit API base. Used for mirrors and
    /// for pointing tests at a local mock server.
    pub fn with_base_url(base: &str, timeout_secs: u64) -> Result<Self, ConfigError> {
        if !is_absolute_url(base) {
            return Err(ConfigError::InvalidBaseUrl(base.to_string()));
        }
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches at most `amount` top story ids, in rank order. `amount` must
    /// be within [`MIN_AMOUNT`]..=[`MAX_AMOUNT`]; the range is checked before
    /// any network access. A shorter upstream list is returned in full.
    pub async fn fetch_top_ids(&self, amount: usize) -> Result<Vec<i64>, ClientError> {
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
            return Err(ClientError::AmountOutOfRange {
                min: MIN_AMOUNT,
                max: MAX_AMOUNT,
                actual: amount,
            });
        }

        let endpoint = format!("{}/{}", self.api_url, TOP_STORIES_ENDPOINT);
        let mut ids: Vec<i64> = self
            .client
            .get(&endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        ids.truncate(amount);
        Ok(ids)
    }

    /// Fetches one raw item by id. The API answers `null` for ids that do
    /// not resolve to an item; that surfaces as [`ClientError::NotFound`].
    pub async fn fetch_item(&self, id: i64) -> Result<RawItem, ClientError> {
        let endpoint = format!("{}/item/{}.json", self.api_url, id);
        let item: Option<RawItem> = self
            .client
            .get(&endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        item.ok_or(ClientError::NotFound(id))
    }
}

#[async_trait]
impl ItemSource for HackerNewsClient {
    async fn item(&self, id: i64) -> Result<RawItem, ClientError> {
        self.fetch_item(id).await
    }
}
