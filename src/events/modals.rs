use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};
use crate::theme::KeyMap;

/// What: Handle a key while the help overlay is open.
///
/// Output:
/// - `true` only for the exit binding.
///
/// Details:
/// - Esc, Enter, and the help binding close the overlay; other keys are swallowed.
pub fn handle_help_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    let km = app.keymap();
    if KeyMap::matches(&km.exit, ke.code, ke.modifiers) {
        return true;
    }
    if matches!(ke.code, KeyCode::Esc | KeyCode::Enter)
        || KeyMap::matches(&km.help_overlay, ke.code, ke.modifiers)
    {
        app.modal = Modal::None;
    }
    false
}

/// What: Handle a key while the detail modal is open.
///
/// Output:
/// - `true` only for the exit binding.
///
/// Details:
/// - Esc clears the selection; the session and results are untouched.
pub fn handle_details_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    if KeyMap::matches(&app.keymap().exit, ke.code, ke.modifiers) {
        return true;
    }
    if ke.code == KeyCode::Esc {
        tracing::debug!("closing detail modal");
        app.selection.clear();
    }
    false
}
