//! Fixed-size pagination over the filtered view.

use crate::state::Product;

/// Number of products shown per page; fixed for the session.
pub const ITEMS_PER_PAGE: usize = 12;

/// What: Slice a filtered list into one page and report the page count.
///
/// Inputs:
/// - `items`: The filtered view, in display order.
/// - `page`: 1-based page number requested by the user.
/// - `page_size`: Items per page (normally [`ITEMS_PER_PAGE`]).
///
/// Output:
/// - `(page_items, page_count)` where `page_count = ceil(len / page_size)`
///   (0 when `items` is empty) and `page_items` is the requested slice,
///   clamped to the available range. An out-of-range page yields an empty
///   slice rather than an error.
pub fn paginate(items: &[Product], page: usize, page_size: usize) -> (&[Product], usize) {
    let page_count = items.len().div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return (&[], page_count);
    }
    let end = (start + page_size).min(items.len());
    (&items[start..end], page_count)
}
