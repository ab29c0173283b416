use std::net::SocketAddr;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Postgres URL for the search history store. Optional: the edge
    /// function works without it.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// Base URL of the host serving `/functions/v1/search-shops`.
    pub api_url: Option<String>,
    /// Bearer key the lookup client presents to `api_url`.
    pub api_key: Option<String>,
    /// Upstream web search key. `None` puts the edge function in its
    /// "not configured" soft-degrade mode.
    pub search_api_key: Option<String>,
    pub search_api_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

/// Resolved endpoint for the shop lookup client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub url: String,
    pub key: String,
}

impl AppConfig {
    /// Returns the lookup endpoint, failing if either half is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the first missing variable.
    pub fn require_api_endpoint(&self) -> Result<ApiEndpoint, ConfigError> {
        let url = self
            .api_url
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPFINDER_API_URL".to_string()))?;
        let key = self
            .api_key
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPFINDER_API_KEY".to_string()))?;
        Ok(ApiEndpoint { url, key })
    }

    /// Returns the database URL, failing if `DATABASE_URL` is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when no database is configured.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[redacted]"),
            )
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field(
                "search_api_key",
                &self.search_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_api_url", &self.search_api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
