//! Plain-text rendering of identified products and shop results.

use shopfinder_core::ProductDetails;
use shopfinder_db::SearchHistoryRow;
use shopfinder_lookup::{ResultSource, ShopLookup};

const EM_DASH: &str = "\u{2014}";

pub fn format_product(product: &ProductDetails) -> String {
    let mut out = String::from("Identified Product\n");
    out.push_str(&format!("  {:<10}{}\n", "Name:", product.name));
    let optional = [
        ("Brand:", &product.brand),
        ("Model:", &product.model),
        ("Category:", &product.category),
        ("Size:", &product.size),
        ("Color:", &product.color),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            out.push_str(&format!("  {label:<10}{value}\n"));
        }
    }
    out
}

pub fn format_shops(lookup: &ShopLookup) -> String {
    if lookup.shops.is_empty() {
        return "No shops found for this product in your area. Try a different location or product.\n"
            .to_string();
    }

    let mut out = format!("Nearby Shops ({})\n", lookup.shops.len());
    if lookup.source == ResultSource::Fallback {
        out.push_str("  (live search unavailable; showing sample results)\n");
    }
    for (index, shop) in lookup.shops.iter().enumerate() {
        out.push_str(&format!("\n{}. {}\n", index + 1, shop.name));
        out.push_str(&format!("   Phone: {}\n", shop.phone));
        if let Some(address) = shop.address.as_deref().filter(|a| !a.is_empty()) {
            out.push_str(&format!("   Address: {address}\n"));
        }
        if let Some(distance) = shop.distance.as_deref() {
            out.push_str(&format!("   Distance: {distance}\n"));
        }
    }
    out
}

pub fn format_history(rows: &[SearchHistoryRow]) -> String {
    if rows.is_empty() {
        return "no searches recorded yet; run `find` first\n".to_string();
    }

    let mut out = format!(
        "{:<18}{:<30}{:<14}{:<24}RESULTS\n",
        "SEARCHED AT", "PRODUCT", "BRAND", "LOCATION"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<18}{:<30}{:<14}{:<24}{}\n",
            row.searched_at.format("%Y-%m-%d %H:%M"),
            truncate(&row.product_name, 28),
            row.product_brand.as_deref().unwrap_or(EM_DASH),
            truncate(&row.location, 22),
            row.results_count
        ));
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars - 3).collect::<String>())
    } else {
        text.to_string()
    }
}
