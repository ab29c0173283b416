use shopfinder_core::ConfigError;
use thiserror::Error;

/// Failures of the remote shop search call. Never surfaced past
/// [`crate::ShopLookupClient::lookup`], which degrades them to mock results.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("shop search returned status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("failed to decode shop search response: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Db(#[from] shopfinder_db::DbError),

    #[error("history store unavailable: {0}")]
    Unavailable(String),
}
