use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured attributes of a product, derived once from a text description
/// or an image and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A candidate retailer returned by a shop search.
///
/// Real and fallback results share this exact shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopResult {
    pub name: String,
    /// Free-text phone number, or the `"Contact for details"` placeholder.
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Free-text distance such as `"2.4 miles"`. Never parsed or sorted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

/// One completed search, as written to the history store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryRecord {
    pub product_name: String,
    pub product_brand: Option<String>,
    pub product_category: Option<String>,
    pub location: String,
    pub results_count: i32,
    pub searched_at: DateTime<Utc>,
}

impl SearchHistoryRecord {
    /// Builds a record stamped with the current time.
    #[must_use]
    pub fn new(product: &ProductDetails, location: &str, results_count: usize) -> Self {
        Self {
            product_name: product.name.clone(),
            product_brand: product.brand.clone(),
            product_category: product.category.clone(),
            location: location.to_string(),
            results_count: i32::try_from(results_count).unwrap_or(i32::MAX),
            searched_at: Utc::now(),
        }
    }
}

/// Request body of `POST /functions/v1/search-shops`.
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchShopsRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: String,
}

/// Response body of `POST /functions/v1/search-shops`.
///
/// `error` is set on soft-degraded responses, which always carry an empty
/// `shops` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchShopsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub shops: Vec<ShopResult>,
}

impl SearchShopsResponse {
    #[must_use]
    pub fn found(shops: Vec<ShopResult>) -> Self {
        Self { error: None, shops }
    }

    #[must_use]
    pub fn degraded(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            shops: Vec::new(),
        }
    }
}
