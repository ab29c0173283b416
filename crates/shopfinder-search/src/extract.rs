//! Turns free-text search snippets into shop records.
//!
//! Phone numbers and street addresses are pulled out of each hit's
//! `content` with North-American-style patterns; anything not found falls
//! back to a fixed placeholder.

use std::sync::LazyLock;

use regex::Regex;
use shopfinder_core::ShopResult;

use crate::types::SearchResult;

/// Number of upstream hits converted into shops.
pub const MAX_SHOPS: usize = 8;

pub const PHONE_PLACEHOLDER: &str = "Contact for details";
pub const DEFAULT_SHOP_NAME: &str = "Local Store";

/// `(###) ###-####` and looser variants with optional `-`, `.` or space
/// separators.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").expect("valid phone regex")
});

/// A house number, street words, then a recognized suffix. Anything after
/// the suffix up to a newline, comma, or period is kept.
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[0-9]+\s+[A-Za-z\s,]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Way|Court|Ct)[^\n,.]*",
    )
    .expect("valid address regex")
});

/// Returns the first phone-like substring of `text`, verbatim.
#[must_use]
pub fn extract_phone(text: &str) -> Option<&str> {
    PHONE_RE.find(text).map(|m| m.as_str())
}

/// Returns the first street address in `text`, trimmed, or an empty string.
#[must_use]
pub fn extract_address(text: &str) -> String {
    ADDRESS_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Converts one search hit into a shop record.
#[must_use]
pub fn shop_from_result(result: &SearchResult) -> ShopResult {
    let content = result.content.as_deref().filter(|c| !c.is_empty());

    let phone = content
        .and_then(extract_phone)
        .unwrap_or(PHONE_PLACEHOLDER)
        .to_string();

    let address_source = content.or(result.url.as_deref()).unwrap_or_default();

    let name = result
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_SHOP_NAME)
        .to_string();

    ShopResult {
        name,
        phone,
        address: Some(extract_address(address_source)),
        distance: None,
    }
}

/// Converts the first [`MAX_SHOPS`] hits into shop records, in order.
#[must_use]
pub fn shops_from_results(results: &[SearchResult]) -> Vec<ShopResult> {
    results.iter().take(MAX_SHOPS).map(shop_from_result).collect()
}
