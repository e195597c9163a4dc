//! Key handling for the paginated results table.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{self, ITEMS_PER_PAGE, paginate};
use crate::state::AppState;

/// What: Navigate the visible page and activate product cards.
///
/// Details:
/// - Up/Down move the row highlight within the current page slice.
/// - Left/Right flip pages (the highlight resets to the top of the page).
/// - Enter on a row triggers the "Coming Soon!" card notice.
pub fn handle_results_key(ke: KeyEvent, app: &mut AppState) {
    let (page, _) = paginate(&app.filtered, app.current_page, ITEMS_PER_PAGE);
    let rows = page.len();
    match ke.code {
        KeyCode::Up => {
            app.selected_row = app.selected_row.saturating_sub(1);
        }
        KeyCode::Down => {
            if rows > 0 && app.selected_row + 1 < rows {
                app.selected_row += 1;
            }
        }
        KeyCode::Left => logic::prev_page(app),
        KeyCode::Right => logic::next_page(app),
        KeyCode::Enter => {
            if rows > 0 {
                logic::card_interaction(app);
            }
        }
        _ => {}
    }
}
