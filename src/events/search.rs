//! Key handling for the search input pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic;
use crate::state::AppState;

/// What: Edit the search text and drive the debounced search.
///
/// Details:
/// - Printable characters and Backspace update the input and re-arm the
///   single-slot debounce deadline; the filtered view is untouched until
///   the deadline fires.
/// - Enter commits the search immediately, cancelling any pending timer.
/// - Ctrl+U clears the whole input, also re-arming the debounce so an
///   emptied query restores the full catalog after the quiet period.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Enter => logic::commit_search(app),
        KeyCode::Backspace => {
            let mut next = app.input.clone();
            next.pop();
            logic::set_query(app, next);
        }
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            logic::set_query(app, String::new());
        }
        KeyCode::Char(c)
            if ke.modifiers.is_empty() || ke.modifiers == KeyModifiers::SHIFT =>
        {
            let mut next = app.input.clone();
            next.push(c);
            logic::set_query(app, next);
        }
        _ => {}
    }
}
