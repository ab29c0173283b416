//! Rule-based product attribute extraction from free text.
//!
//! Recognition is driven entirely by the ordered tables below. Earlier
//! entries win when several match, so extending the rule set means editing a
//! table, not the matching code.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ProductDetails;

/// Known brands, matched as case-insensitive substrings in table order.
pub const BRAND_KEYWORDS: &[&str] = &[
    "nike",
    "adidas",
    "samsung",
    "apple",
    "sony",
    "lg",
    "dell",
    "hp",
    "lenovo",
    "asus",
    "microsoft",
    "google",
    "amazon",
    "puma",
    "reebok",
    "under armour",
    "new balance",
    "vans",
];

/// Known colors, matched as case-insensitive substrings in table order.
pub const COLOR_KEYWORDS: &[&str] = &[
    "black", "white", "red", "blue", "green", "yellow", "orange", "pink", "purple", "gray",
    "grey", "brown", "silver", "gold",
];

/// Maps a set of keywords to a fixed category label.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        label: "Footwear",
        keywords: &["shoe", "sneaker", "boot", "sandal"],
    },
    CategoryRule {
        label: "Electronics - Smartphones",
        keywords: &["phone", "smartphone", "mobile"],
    },
    CategoryRule {
        label: "Electronics - Computers",
        keywords: &["laptop", "computer", "notebook"],
    },
    CategoryRule {
        label: "Electronics - TV",
        keywords: &["tv", "television"],
    },
    CategoryRule {
        label: "Clothing - Tops",
        keywords: &["shirt", "tshirt", "t-shirt", "blouse"],
    },
    CategoryRule {
        label: "Clothing - Bottoms",
        keywords: &["pant", "jeans", "trouser"],
    },
    CategoryRule {
        label: "Accessories - Watches",
        keywords: &["watch"],
    },
    CategoryRule {
        label: "Accessories - Bags",
        keywords: &["bag", "backpack", "purse"],
    },
];

/// Number of leading words kept as the product name.
const NAME_WORD_LIMIT: usize = 5;

static LABELLED_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)size\s*:?\s*([A-Za-z0-9_]+)").expect("valid labelled size regex")
});

static BARE_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(xs|s|m|l|xl|xxl|[0-9]+(?:\.[0-9]+)?)\b").expect("valid bare size regex")
});

/// Extracts structured product attributes from a free-text description.
///
/// Never fails: fields without a recognized token are `None`, and `name`
/// falls back to the whole input when it has no words. The result depends
/// only on `text`.
#[must_use]
pub fn parse_text_input(text: &str) -> ProductDetails {
    let lower = text.to_lowercase();

    let brand = first_keyword(&lower, BRAND_KEYWORDS).map(capitalize_first);
    let color = first_keyword(&lower, COLOR_KEYWORDS).map(capitalize_first);
    let category = match_category(&lower).map(str::to_string);
    let size = parse_size(text);

    let name = text
        .split_whitespace()
        .take(NAME_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join(" ");

    ProductDetails {
        name: if name.is_empty() {
            text.to_string()
        } else {
            name
        },
        brand,
        model: None,
        size,
        color,
        category,
    }
}

/// Returns the first category label with any keyword present in `lower`.
#[must_use]
pub fn match_category(lower: &str) -> Option<&'static str> {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| rule.label)
}

/// Parses a size token, preferring an explicit `size: <token>` label over a
/// bare letter size or number.
#[must_use]
pub fn parse_size(text: &str) -> Option<String> {
    LABELLED_SIZE_RE
        .captures(text)
        .or_else(|| BARE_SIZE_RE.captures(text))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

fn first_keyword<'a>(lower: &str, table: &[&'a str]) -> Option<&'a str> {
    table.iter().copied().find(|kw| lower.contains(kw))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
