use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::submit_search;
use crate::state::{AppState, Focus, SearchKey};

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `search_tx`: Channel to the search worker
///
/// Output:
/// - Always `false`; exit is handled globally.
///
/// Details:
/// - Typing edits the live input only; Enter commits it as the search.
/// - Esc clears the input; Down moves into the grid when it has cards.
pub fn handle_search_key(
    ke: &KeyEvent,
    app: &mut AppState,
    search_tx: &mpsc::UnboundedSender<SearchKey>,
) -> bool {
    match ke.code {
        KeyCode::Enter => submit_search(app, search_tx),
        KeyCode::Backspace => {
            app.input.pop();
            app.recent_cursor = None;
        }
        KeyCode::Esc => {
            app.input.clear();
            app.recent_cursor = None;
        }
        KeyCode::Down if !app.visible_movies().is_empty() => app.focus = Focus::Results,
        KeyCode::Char(c)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.push(c);
            app.recent_cursor = None;
        }
        _ => {}
    }
    false
}
