pub mod app_config;
pub mod config;
pub mod extract;
pub mod identify;
pub mod mock;
pub mod types;

pub use app_config::{ApiEndpoint, AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use extract::parse_text_input;
pub use identify::{identify_product, identify_product_from_image, ProductInput};
pub use mock::{generate_mock_shops, generate_mock_shops_with_rng};
pub use types::{
    ProductDetails, SearchHistoryRecord, SearchShopsRequest, SearchShopsResponse, ShopResult,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
