//! Event handling layer for the cinesea TUI.
//!
//! This module exposes `handle_event` and delegates overlay, pane-specific,
//! and mouse handling to submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::logic::{cycle_recent, next_page, prev_page};
use crate::state::{AppState, Focus, Modal, SearchKey};
use crate::theme::KeyMap;

mod modals;
mod mouse;
mod results;
mod search;
mod utils;


/// What: Handle global keybindings that apply regardless of the focused pane.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `search_tx`: Channel to the search worker
///
/// Output:
/// - `Some(exit)` when the key was consumed; `None` to fall through to the focused pane.
///
/// Details:
/// - The focus-search binding only applies outside the search input, where its
///   character would otherwise be typed.
fn handle_global_key(
    ke: &KeyEvent,
    app: &mut AppState,
    search_tx: &mpsc::UnboundedSender<SearchKey>,
) -> Option<bool> {
    let km = app.keymap();
    let (code, mods) = (ke.code, ke.modifiers);
    if KeyMap::matches(&km.exit, code, mods) {
        return Some(true);
    }
    if KeyMap::matches(&km.help_overlay, code, mods) {
        app.modal = Modal::Help;
        return Some(false);
    }
    if KeyMap::matches(&km.next_page, code, mods) {
        next_page(app, search_tx);
        return Some(false);
    }
    if KeyMap::matches(&km.prev_page, code, mods) {
        prev_page(app, search_tx);
        return Some(false);
    }
    if KeyMap::matches(&km.recent_cycle, code, mods) {
        cycle_recent(app);
        app.focus = Focus::Search;
        return Some(false);
    }
    if KeyMap::matches(&km.pane_next, code, mods) {
        app.focus = match app.focus {
            Focus::Search if !app.visible_movies().is_empty() => Focus::Results,
            _ => Focus::Search,
        };
        return Some(false);
    }
    if matches!(app.focus, Focus::Results) && KeyMap::matches(&km.focus_search, code, mods) {
        app.focus = Focus::Search;
        return Some(false);
    }
    None
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
///
/// Overlays take input first: the help overlay, then the detail modal. Only
/// when neither is open do global bindings and the focused pane see the key.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    search_tx: &mpsc::UnboundedSender<SearchKey>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if matches!(app.modal, Modal::Help) {
                return modals::handle_help_key(ke, app);
            }
            if app.selection.is_active() {
                return modals::handle_details_key(ke, app);
            }
            if let Some(exit) = handle_global_key(ke, app, search_tx) {
                return exit;
            }
            match app.focus {
                Focus::Search => search::handle_search_key(ke, app, search_tx),
                Focus::Results => {
                    if ke.code == KeyCode::Esc {
                        app.focus = Focus::Search;
                        return false;
                    }
                    results::handle_results_key(ke, app)
                }
            }
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(*m, app, search_tx),
        _ => false,
    }
}
