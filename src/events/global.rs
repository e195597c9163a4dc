//! Global shortcuts that apply regardless of the focused pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic;
use crate::state::{AppState, Focus};

/// What: Handle application-wide shortcuts.
///
/// Inputs:
/// - `ke`: Pressed key event
/// - `app`: Mutable application state
///
/// Output:
/// - `Some(true)` to exit, `Some(false)` when the key was consumed here,
///   `None` when the key should fall through to the focused pane.
///
/// Details:
/// - Esc and Ctrl+C always quit; `q` quits only outside the search pane
///   (where it would be input text).
/// - Ctrl+T toggles the theme, Tab/Shift+Tab cycle pane focus, and
///   PageUp/PageDown flip pages from anywhere.
pub fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<bool> {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => Some(true),
        KeyCode::Char('c') if ctrl => Some(true),
        KeyCode::Char('q') if ke.modifiers.is_empty() && app.focus != Focus::Search => {
            Some(true)
        }
        KeyCode::Char('t') if ctrl => {
            logic::toggle_theme(app);
            Some(false)
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Search => Focus::Categories,
                Focus::Categories => Focus::Results,
                Focus::Results => Focus::Search,
            };
            Some(false)
        }
        KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Search => Focus::Results,
                Focus::Categories => Focus::Search,
                Focus::Results => Focus::Categories,
            };
            Some(false)
        }
        KeyCode::PageDown => {
            logic::next_page(app);
            Some(false)
        }
        KeyCode::PageUp => {
            logic::prev_page(app);
            Some(false)
        }
        _ => None,
    }
}
