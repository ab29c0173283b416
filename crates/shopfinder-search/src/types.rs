//! Wire types for the upstream web search API.

use serde::{Deserialize, Serialize};

/// Provider search depth. Only the cheaper `basic` tier is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
}

/// Request body for `POST /search`.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub search_depth: SearchDepth,
    pub max_results: u32,
}

/// Response body for `POST /search`. A missing or `null` `results` field is
/// treated as no hits.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}

/// One upstream hit. Every field is optional; snippets with missing pieces
/// still produce a shop via the extraction defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
