//! Client for the search-shops edge function.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::{Client, Url};
use shopfinder_core::{
    generate_mock_shops, ApiEndpoint, AppConfig, ProductDetails, SearchHistoryRecord,
    SearchShopsRequest, SearchShopsResponse, ShopResult,
};
use tokio::task::JoinHandle;

use crate::error::LookupError;
use crate::history::HistorySink;

const SEARCH_SHOPS_PATH: &str = "functions/v1/search-shops";

/// Where a [`ShopLookup`]'s shops came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Returned by the edge function.
    Live,
    /// Generated locally because the edge function could not be reached.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopLookup {
    pub shops: Vec<ShopResult>,
    pub source: ResultSource,
}

/// Builds the free-text search query for a product.
///
/// Non-empty `brand`, `name` and `category` are joined in that order, then
/// `" stores near {location}"` is appended.
#[must_use]
pub fn build_search_query(product: &ProductDetails, location: &str) -> String {
    let parts: Vec<&str> = [
        product.brand.as_deref(),
        Some(product.name.as_str()),
        product.category.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect();

    format!("{} stores near {location}", parts.join(" "))
}

pub struct ShopLookupClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    history: Arc<dyn HistorySink>,
    pending_history: Mutex<Vec<JoinHandle<()>>>,
}

impl std::fmt::Debug for ShopLookupClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopLookupClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl ShopLookupClient {
    /// Creates a client for the edge function hosted at `endpoint.url`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`LookupError::InvalidApiUrl`] if the URL does not parse.
    pub fn new(
        endpoint: &ApiEndpoint,
        timeout_secs: u64,
        user_agent: &str,
        history: Arc<dyn HistorySink>,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base = format!("{}/", endpoint.url.trim_end_matches('/'));
        let endpoint_url = Url::parse(&base)
            .and_then(|base| base.join(SEARCH_SHOPS_PATH))
            .map_err(|e| LookupError::InvalidApiUrl {
                url: endpoint.url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint_url,
            api_key: endpoint.key.clone(),
            history,
            pending_history: Mutex::new(Vec::new()),
        })
    }

    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Config`] when `SHOPFINDER_API_URL` or
    /// `SHOPFINDER_API_KEY` is unset, plus the errors of [`Self::new`].
    pub fn from_app_config(
        config: &AppConfig,
        history: Arc<dyn HistorySink>,
    ) -> Result<Self, LookupError> {
        let endpoint = config.require_api_endpoint()?;
        Self::new(
            &endpoint,
            config.request_timeout_secs,
            &config.user_agent,
            history,
        )
    }

    /// Finds shops for `product` near `location`.
    ///
    /// Never fails: any error from the edge function is logged and replaced by
    /// generated mock shops tagged [`ResultSource::Fallback`]. A live result
    /// schedules a history save and returns without waiting for it.
    pub async fn lookup(&self, product: &ProductDetails, location: &str) -> ShopLookup {
        let query = build_search_query(product, location);

        match self.fetch_shops(&query, location).await {
            Ok(response) => {
                if let Some(error) = response.error.as_deref() {
                    tracing::warn!(%error, query, "shop search degraded");
                }
                let shops = response.shops;
                self.spawn_history_save(SearchHistoryRecord::new(product, location, shops.len()));
                ShopLookup {
                    shops,
                    source: ResultSource::Live,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, query, "shop search failed; using mock results");
                ShopLookup {
                    shops: generate_mock_shops(product, location),
                    source: ResultSource::Fallback,
                }
            }
        }
    }

    /// Same as [`Self::lookup`] without the provenance tag.
    pub async fn find_nearby_shops(
        &self,
        product: &ProductDetails,
        location: &str,
    ) -> Vec<ShopResult> {
        self.lookup(product, location).await.shops
    }

    /// Waits up to `grace` for history saves that are still running.
    ///
    /// Saves that outlive the grace period keep running detached.
    pub async fn flush_history(&self, grace: Duration) {
        let pending = std::mem::take(
            &mut *self
                .pending_history
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        if pending.is_empty() {
            return;
        }

        let count = pending.len();
        if tokio::time::timeout(grace, futures::future::join_all(pending))
            .await
            .is_err()
        {
            tracing::debug!(count, "history saves still running after grace period");
        }
    }

    async fn fetch_shops(
        &self,
        query: &str,
        location: &str,
    ) -> Result<SearchShopsResponse, LookupError> {
        let request = SearchShopsRequest {
            query: query.to_string(),
            location: location.to_string(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn spawn_history_save(&self, record: SearchHistoryRecord) {
        let sink = Arc::clone(&self.history);
        let handle = tokio::spawn(async move {
            if let Err(e) = sink.save(&record).await {
                tracing::error!(error = %e, product = %record.product_name, "failed to save search history");
            }
        });

        let mut pending = self
            .pending_history
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }
}
