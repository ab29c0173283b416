pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use extract::{extract_address, extract_phone, shop_from_result, shops_from_results};
pub use types::{SearchDepth, SearchRequest, SearchResponse, SearchResult};
