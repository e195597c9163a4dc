//! Core non-UI logic: the filter engine, the paginator, and the
//! interaction-controller transitions over [`crate::state::AppState`].

pub mod controller;
pub mod filter;
pub mod paginate;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use controller::{
    apply_fetch, card_interaction, change_page, commit_search, dismiss_toast, next_page,
    prev_page, select_category, set_query, toggle_theme,
};
pub use filter::{ALL_CATEGORIES, apply_category, apply_query};
pub use paginate::{ITEMS_PER_PAGE, paginate};
