//! Frame rendering. Renderers record clickable rectangles on [`AppState`] for
//! mouse hit-testing by the event layer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

/// Detail modal for the selected movie.
mod details;
/// Footer keybind hints.
mod footer;
/// Movie card grid.
mod grid;
/// Help overlay.
mod help;
/// Pagination bar.
mod pagination;
/// Search input and recent queries.
mod search_bar;
/// Status line and toast.
mod status;

pub use status::SPINNER_FRAMES;

/// What: Render one frame of the application.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (hit-test rects are refreshed)
///
/// Details:
/// - Vertical stack: search bar, status line, card grid, pagination (only with
///   more than one page), footer; then overlays: detail modal, help, toast.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    app.card_rects.clear();
    app.pagination_rects.clear();
    app.details_rect = None;
    app.details_close_rect = None;
    app.help_rect = None;

    let pagination_h = u16::from(app.fetch.total_pages() > 1);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(pagination_h),
            Constraint::Length(1),
        ])
        .split(area);

    search_bar::render_search_bar(f, app, chunks[0]);
    status::render_status_line(f, app, chunks[1]);
    grid::render_grid(f, app, chunks[2]);
    if pagination_h > 0 {
        pagination::render_pagination(f, app, chunks[3]);
    }
    footer::render_footer(f, app, chunks[4]);

    if app.selection.is_active() {
        details::render_details(f, app, area);
    }
    if matches!(app.modal, Modal::Help) {
        help::render_help(f, app, area);
    }
    status::render_toast(f, app, area);
}
