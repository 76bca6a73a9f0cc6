use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::{GridMove, change_page, move_cursor};
use crate::state::{AppState, Focus, Modal, SearchKey};

use super::utils::point_in_rect;

/// Index of the card under `(mx, my)`, if any.
fn card_at(app: &AppState, mx: u16, my: u16) -> Option<usize> {
    app.card_rects
        .iter()
        .find(|(rect, _)| point_in_rect(mx, my, Some(*rect)))
        .map(|(_, idx)| *idx)
}

/// Page of the pagination chip under `(mx, my)`, if any.
fn page_at(app: &AppState, mx: u16, my: u16) -> Option<u32> {
    app.pagination_rects
        .iter()
        .find(|(rect, _)| point_in_rect(mx, my, Some(*rect)))
        .map(|(_, page)| *page)
}

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and kind
/// - `app`: Mutable application state (reads rects recorded by the renderer)
/// - `search_tx`: Channel to the search worker for pagination clicks
///
/// Output:
/// - Always `false`; the mouse never requests exit.
///
/// Details:
/// - Overlay-first: with help or the detail modal open, a left click outside the surface
///   (or on `[x]` for the detail modal) closes it and every other mouse event is consumed.
/// - Card click moves the cursor there and opens the detail modal.
/// - Pagination click changes page; search bar click focuses the input.
/// - Wheel moves the grid cursor by one row.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    search_tx: &mpsc::UnboundedSender<SearchKey>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    let is_left_down = matches!(m.kind, MouseEventKind::Down(MouseButton::Left));

    if matches!(app.modal, Modal::Help) {
        if is_left_down && !point_in_rect(mx, my, app.help_rect) {
            app.modal = Modal::None;
        }
        return false;
    }

    if app.selection.is_active() {
        if is_left_down
            && (point_in_rect(mx, my, app.details_close_rect)
                || !point_in_rect(mx, my, app.details_rect))
        {
            tracing::debug!("closing detail modal by click");
            app.selection.clear();
        }
        return false;
    }

    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(idx) = card_at(app, mx, my) {
                app.grid_cursor = idx;
                app.focus = Focus::Results;
                if let Some(movie) = app.movie_at_cursor().cloned() {
                    app.selection.select(movie);
                }
            } else if let Some(page) = page_at(app, mx, my) {
                change_page(app, page, search_tx);
            } else if point_in_rect(mx, my, app.search_rect) {
                app.focus = Focus::Search;
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            let len = app.visible_movies().len();
            if len > 0 {
                let mv = if matches!(m.kind, MouseEventKind::ScrollDown) {
                    GridMove::Down
                } else {
                    GridMove::Up
                };
                let cols = usize::from(app.settings.grid_columns);
                app.grid_cursor = move_cursor(app.grid_cursor, len, cols, mv);
                app.focus = Focus::Results;
            }
        }
        _ => {}
    }
    false
}
