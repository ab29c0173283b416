//! HTTP client for the upstream web search API (Tavily-compatible).
//!
//! One `POST /search` per call. Non-2xx statuses and undecodable bodies are
//! surfaced as typed errors; nothing is retried.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::{SearchDepth, SearchRequest, SearchResponse, SearchResult};

const DEFAULT_BASE_URL: &str = "https://api.tavily.com/";

/// Upper bound on hits requested from the provider.
pub const MAX_RESULTS: u32 = 10;

/// Client for the upstream search provider.
///
/// Use [`SearchClient::new`] for production or [`SearchClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SearchClient {
    /// Creates a client pointed at the production search API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join("search")` appends rather than
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SearchError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs a basic-depth search capped at [`MAX_RESULTS`] hits.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::UnexpectedStatus`] on any non-2xx status.
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.search_url()?;
        let request = SearchRequest {
            api_key: &self.api_key,
            query,
            search_depth: SearchDepth::Basic,
            max_results: MAX_RESULTS,
        };

        let response = self.client.post(url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
            SearchError::Deserialize {
                context: format!("search(query={query})"),
                source: e,
            }
        })?;

        let results = parsed.results.unwrap_or_default();
        tracing::debug!(query, hits = results.len(), "upstream search completed");
        Ok(results)
    }

    fn search_url(&self) -> Result<Url, SearchError> {
        self.base_url
            .join("search")
            .map_err(|e| SearchError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}
