//! Core data types shared by the networking, event, and UI layers.

use serde::{Deserialize, Serialize};

/// What: A single product record as returned by the Fake Store API.
///
/// Inputs:
/// - Decoded from the `GET /products` JSON array at startup.
///
/// Output:
/// - Immutable once fetched; cloned into the filtered view and page slices.
///
/// Details:
/// - `id` uniquely identifies a product within a fetch and is used as the
///   row key when rendering.
/// - `rating` is optional on the wire and defaults to zeros when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Aggregate customer rating attached to a [`Product`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score on a 0–5 scale.
    #[serde(default)]
    pub rate: f64,
    /// Number of ratings the average is based on.
    #[serde(default)]
    pub count: u64,
}

/// Which pane currently receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The search input field.
    #[default]
    Search,
    /// The category selector row.
    Categories,
    /// The paginated results table.
    Results,
}

/// What: User-visible error states of the catalog browser.
///
/// Details:
/// - `FetchFailed` replaces the product grid entirely and is never retried.
/// - `NoMatches` is the inline zero-results state of a search; it clears on
///   the next search or category change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The product list fetch failed (network error or non-2xx).
    FetchFailed,
    /// A search query matched zero products.
    NoMatches,
}

impl CatalogError {
    /// Message shown to the user for this error state.
    pub fn message(self) -> &'static str {
        match self {
            CatalogError::FetchFailed => "Failed to fetch product data.",
            CatalogError::NoMatches => "No products found.",
        }
    }
}

/// Completion of one of the two startup fetches, delivered to the event
/// loop over a channel. Failures carry a human-readable message.
#[derive(Clone, Debug)]
pub enum FetchEvent {
    Products(Result<Vec<Product>, String>),
    Categories(Result<Vec<String>, String>),
}
