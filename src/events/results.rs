use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{GridMove, move_cursor};
use crate::state::{AppState, Focus};

/// What: Handle a key while the card grid has focus.
///
/// Output:
/// - Always `false`; exit is handled globally.
///
/// Details:
/// - Arrows, Home, and End move the cursor; Up from the first row returns to the search input.
/// - Enter opens the detail modal for the card under the cursor.
pub fn handle_results_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    let len = app.visible_movies().len();
    let cols = usize::from(app.settings.grid_columns);
    let mv = match ke.code {
        KeyCode::Left => GridMove::Left,
        KeyCode::Right => GridMove::Right,
        KeyCode::Up if app.grid_cursor < cols.max(1) => {
            app.focus = Focus::Search;
            return false;
        }
        KeyCode::Up => GridMove::Up,
        KeyCode::Down => GridMove::Down,
        KeyCode::Home => GridMove::First,
        KeyCode::End => GridMove::Last,
        KeyCode::Enter => {
            if let Some(movie) = app.movie_at_cursor().cloned() {
                tracing::debug!(id = movie.id, title = %movie.title, "opening detail modal");
                app.selection.select(movie);
            }
            return false;
        }
        _ => return false,
    };
    app.grid_cursor = move_cursor(app.grid_cursor, len, cols, mv);
    false
}
