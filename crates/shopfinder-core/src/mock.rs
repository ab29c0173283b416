//! Synthetic shop list used when the real lookup is unavailable.

use rand::Rng;

use crate::types::{ProductDetails, ShopResult};

/// Shop-type labels, one generated shop per entry, in output order.
pub const MOCK_SHOP_TYPES: [&str; 5] = [
    "Electronics Store",
    "Retail Shop",
    "Department Store",
    "Specialty Store",
    "Brand Outlet",
];

/// Generates the fallback shop list for `location` using the thread RNG.
#[must_use]
pub fn generate_mock_shops(product: &ProductDetails, location: &str) -> Vec<ShopResult> {
    generate_mock_shops_with_rng(product, location, &mut rand::rng())
}

/// Generates the fallback shop list with a caller-supplied RNG.
///
/// Always returns exactly [`MOCK_SHOP_TYPES`]`.len()` shops. Phone suffixes are
/// four random digits; distances are drawn from `[0.5, 5.5)` miles.
pub fn generate_mock_shops_with_rng<R: Rng>(
    _product: &ProductDetails,
    location: &str,
    rng: &mut R,
) -> Vec<ShopResult> {
    MOCK_SHOP_TYPES
        .iter()
        .zip(0u32..)
        .map(|(shop_type, index)| {
            let phone_suffix: u32 = rng.random_range(1000..10000);
            let distance: f64 = rng.random_range(0.5..5.5);
            ShopResult {
                name: format!("{shop_type} - {location}"),
                phone: format!("+1-555-{phone_suffix}"),
                address: Some(format!("{} Main Street, {location}", 100 + index * 50)),
                distance: Some(format!("{distance:.1} miles")),
            }
        })
        .collect()
}
