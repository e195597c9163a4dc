//! Event handling layer for Shopsea's TUI.
//!
//! This module re-exports `handle_event` and delegates pane-specific logic
//! to submodules to keep files small and maintainable.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::logic;
use crate::state::{AppState, Focus};

mod categories;
mod global;
mod results;
mod search;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event (only key presses are acted on)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - A visible toast is dismissed by any keypress before the key is
///   processed normally.
/// - Global shortcuts (quit, theme toggle, focus cycling, paging) are
///   handled first; remaining keys go to the focused pane's submodule.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Explicit dismissal: the first keypress while a toast is showing
    // hides it, then the key is processed as usual.
    if app.toast_message.is_some() {
        logic::dismiss_toast(app);
    }

    if let Some(should_exit) = global::handle_global_key(ke, app) {
        return should_exit;
    }

    match app.focus {
        Focus::Search => search::handle_search_key(ke, app),
        Focus::Categories => categories::handle_categories_key(ke, app),
        Focus::Results => results::handle_results_key(ke, app),
    }
    false
}
