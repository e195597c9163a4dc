//! Key handling for the category selector row.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic;
use crate::state::AppState;

/// What: Move the category highlight and apply a selection.
///
/// Details:
/// - Left/Right move the highlight, clamped to the selector bounds; Home
///   jumps back to the "All" sentinel.
/// - Enter selects the highlighted category, which resets the page to 1
///   and rebuilds the filtered view from the full catalog.
pub fn handle_categories_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Left => {
            app.category_cursor = app.category_cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            if app.category_cursor + 1 < app.categories.len() {
                app.category_cursor += 1;
            }
        }
        KeyCode::Home => app.category_cursor = 0,
        KeyCode::Enter => {
            if let Some(category) = app.categories.get(app.category_cursor).cloned() {
                logic::select_category(app, &category);
            }
        }
        _ => {}
    }
}
