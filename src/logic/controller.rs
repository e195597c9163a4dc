//! State transitions of the interaction controller.
//!
//! All mutations of [`AppState`] triggered by user input or fetch
//! completions live here, so the event layer stays a thin key-to-transition
//! mapping and the transitions stay testable without a terminal.

use std::time::Instant;

use crate::logic::{ITEMS_PER_PAGE, apply_category, apply_query, paginate};
use crate::state::{AppState, CatalogError, DEBOUNCE, FetchEvent, TOAST_TTL};
use crate::theme::Theme;

/// What: Apply a fetch completion delivered over the startup channel.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `ev`: Products or categories outcome, in whichever order it arrived.
///
/// Details:
/// - Products success stores the catalog and initializes the filtered view
///   to the full list. Products failure sets the fatal fetch error; there
///   is no retry.
/// - Categories success stores the list with the "All" sentinel prepended.
///   Categories failure only records a footer diagnostic; browsing
///   continues with the sentinel alone.
pub fn apply_fetch(app: &mut AppState, ev: FetchEvent) {
    match ev {
        FetchEvent::Products(Ok(products)) => {
            app.filtered = products.clone();
            app.catalog = products;
            app.loading = false;
        }
        FetchEvent::Products(Err(_)) => {
            app.loading = false;
            app.error = Some(CatalogError::FetchFailed);
        }
        FetchEvent::Categories(Ok(list)) => {
            let mut categories = vec![crate::logic::ALL_CATEGORIES.to_string()];
            for c in list {
                if !categories.contains(&c) {
                    categories.push(c);
                }
            }
            app.categories = categories;
        }
        FetchEvent::Categories(Err(msg)) => {
            app.status_text = Some(format!("categories unavailable: {msg}"));
        }
    }
}

/// What: Select a category and rebuild the filtered view from the catalog.
///
/// Details:
/// - Resets the page to 1 and the row highlight to the top.
/// - Clears any search error; the search input text is kept as typed but a
///   category selection replaces the working set wholesale (category and
///   query filters do not compose, matching the upstream behavior).
pub fn select_category(app: &mut AppState, category: &str) {
    app.selected_category = category.to_string();
    app.current_page = 1;
    app.selected_row = 0;
    app.error = None;
    app.filtered = apply_category(&app.catalog, category);
}

/// What: Record a keystroke in the search input and arm the debounce.
///
/// Details:
/// - The input text updates immediately for display; the filtered view is
///   not touched. The single-slot deadline is replaced on every call, so a
///   burst of edits results in exactly one pending search.
pub fn set_query(app: &mut AppState, input: String) {
    app.input = input;
    app.debounce_deadline = Some(Instant::now() + DEBOUNCE);
}

/// What: Run the search now, against the full catalog.
///
/// Details:
/// - Called when the debounce deadline fires, or directly on Enter; either
///   way any pending deadline is consumed first.
/// - A blank query restores the full catalog. Zero matches set the
///   "No products found." error and an empty view; the error clears on the
///   next search or category change.
/// - The page is deliberately not reset here (the upstream browser resets
///   it only on category changes).
pub fn commit_search(app: &mut AppState) {
    app.debounce_deadline = None;
    app.error = None;
    app.selected_row = 0;
    if app.input.trim().is_empty() {
        app.filtered = app.catalog.clone();
        return;
    }
    let matched = apply_query(&app.catalog, &app.input);
    if matched.is_empty() {
        app.error = Some(CatalogError::NoMatches);
        app.filtered = Vec::new();
    } else {
        app.filtered = matched;
    }
}

/// Set the current page directly; only re-slicing happens at render time.
pub fn change_page(app: &mut AppState, page: usize) {
    app.current_page = page.max(1);
    app.selected_row = 0;
}

/// Advance one page, saturating at the last page.
pub fn next_page(app: &mut AppState) {
    let (_, count) = paginate(&app.filtered, app.current_page, ITEMS_PER_PAGE);
    if app.current_page < count {
        change_page(app, app.current_page + 1);
    }
}

/// Go back one page, saturating at page 1.
pub fn prev_page(app: &mut AppState) {
    if app.current_page > 1 {
        change_page(app, app.current_page - 1);
    }
}

/// Flip the light/dark flag and swap the active palette. Data is untouched.
pub fn toggle_theme(app: &mut AppState) {
    app.dark_mode = !app.dark_mode;
    app.theme = Theme::for_mode(app.dark_mode);
}

/// What: Surface the transient "Coming Soon!" notice for a card activation.
///
/// Details:
/// - Purely presentational; auto-dismisses after [`TOAST_TTL`] or on the
///   next keypress. Re-triggering replaces the expiry deadline.
pub fn card_interaction(app: &mut AppState) {
    app.toast_message = Some("Coming Soon!".to_string());
    app.toast_expires_at = Some(Instant::now() + TOAST_TTL);
}

/// Hide the toast and drop its expiry deadline.
pub fn dismiss_toast(app: &mut AppState) {
    app.toast_message = None;
    app.toast_expires_at = None;
}
