//! Filter engine deriving the visible subset of the catalog.
//!
//! Category filtering and text search are two independent transforms over
//! the full catalog. They are intentionally not composed: selecting a
//! category rebuilds the working set from the full catalog, and a search is
//! evaluated against the full catalog regardless of the selected category.
//! This mirrors the upstream behavior the browser reproduces.

use crate::state::Product;

/// Synthetic category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// What: Restrict the catalog to a single category.
///
/// Inputs:
/// - `products`: Full catalog in original order.
/// - `category`: Selected category name, or [`ALL_CATEGORIES`].
///
/// Output:
/// - For [`ALL_CATEGORIES`], a clone of the input in the same order;
///   otherwise every product whose `category` equals `category` exactly,
///   relative order preserved.
pub fn apply_category(products: &[Product], category: &str) -> Vec<Product> {
    if category == ALL_CATEGORIES {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// What: Restrict the catalog to products whose title matches a query.
///
/// Inputs:
/// - `products`: Full catalog in original order.
/// - `query`: Raw search text; surrounding whitespace is ignored.
///
/// Output:
/// - The input unchanged when the trimmed query is empty; otherwise every
///   product whose title, compared case-insensitively, contains the trimmed
///   query as a contiguous substring, relative order preserved.
pub fn apply_query(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
