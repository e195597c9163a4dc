//! Central `AppState` container for one browsing session.

use std::time::{Duration, Instant};

use crate::logic::ALL_CATEGORIES;
use crate::state::types::{CatalogError, Focus, Product};
use crate::theme::Theme;

/// Quiet period after the last keystroke before a search runs.
pub const DEBOUNCE: Duration = Duration::from_millis(300);
/// How long the transient toast stays visible before auto-dismissing.
pub const TOAST_TTL: Duration = Duration::from_millis(3000);

/// Global application state shared by the event, networking, and UI layers.
///
/// This structure is mutated in response to input and fetch completions.
/// Everything is session-scoped; nothing is persisted across runs.
#[derive(Debug)]
pub struct AppState {
    /// Full catalog as fetched at startup, in API order. Never mutated
    /// after the products fetch completes.
    pub catalog: Vec<Product>,
    /// Derived subset of `catalog` currently eligible for display, before
    /// pagination. Always recomputed whole, never patched.
    pub filtered: Vec<Product>,
    /// Category names with the synthetic "All" sentinel first.
    pub categories: Vec<String>,
    /// Currently selected category; one of `categories`.
    pub selected_category: String,
    /// Highlight position within the category selector row.
    pub category_cursor: usize,
    /// Current search input text, displayed as typed.
    pub input: String,
    /// 1-based page within `filtered`.
    pub current_page: usize,
    /// Highlighted row within the visible page.
    pub selected_row: usize,
    /// Which pane currently receives keyboard input.
    pub focus: Focus,
    /// `true` until the products fetch completes either way.
    pub loading: bool,
    /// Active user-visible error state, if any.
    pub error: Option<CatalogError>,
    /// Diagnostic note shown dimly in the footer (e.g. the categories
    /// fetch failing); never blocks product browsing.
    pub status_text: Option<String>,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// Resolved palette for `dark_mode`.
    pub theme: Theme,
    /// Single-slot debounce deadline for the pending search, if any.
    /// Re-arming replaces the previous deadline, so at most one search is
    /// ever pending.
    pub debounce_deadline: Option<Instant>,
    /// Optional short-lived notice rendered at the bottom-right corner.
    pub toast_message: Option<String>,
    /// Deadline after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,
}

impl Default for AppState {
    /// Construct the startup state: empty catalog, "All" category, empty
    /// query, page 1, light theme, loading indicator on.
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            filtered: Vec::new(),
            categories: vec![ALL_CATEGORIES.to_string()],
            selected_category: ALL_CATEGORIES.to_string(),
            category_cursor: 0,
            input: String::new(),
            current_page: 1,
            selected_row: 0,
            focus: Focus::Search,
            loading: true,
            error: None,
            status_text: None,
            dark_mode: false,
            theme: Theme::light(),
            debounce_deadline: None,
            toast_message: None,
            toast_expires_at: None,
        }
    }
}
