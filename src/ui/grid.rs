use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, FetchPhase, Focus};
use crate::theme::theme;
use crate::util::{rating_label, release_year, truncate_to_width};

/// Rows of a card including its border.
const CARD_HEIGHT: u16 = 5;

/// What: Lay out the cards visible in `area`.
///
/// Inputs:
/// - `area`: Grid area
/// - `columns`: Cards per row (at least 1)
/// - `len`: Cards on the page
/// - `cursor`: Highlighted index, kept on screen
///
/// Output:
/// - Rectangles paired with the item index they show, row-major.
///
/// Details:
/// - When the cursor row is below the fold, rows scroll so it becomes the last visible row.
/// - The last column absorbs the width remainder.
fn card_layout(area: Rect, columns: u16, len: usize, cursor: usize) -> Vec<(Rect, usize)> {
    let cols = columns.max(1);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let cols_n = usize::from(cols);
    let cursor_row = cursor / cols_n;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);
    let card_w = area.width / cols;
    let mut out = Vec::new();
    for row in 0..visible_rows {
        let row_u16 = u16::try_from(row).unwrap_or(u16::MAX);
        let y = area.y + row_u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        for col in 0..cols {
            let idx = (first_row + row) * cols_n + usize::from(col);
            if idx >= len {
                return out;
            }
            let x = area.x + col * card_w;
            let width = if col + 1 == cols {
                area.width - col * card_w
            } else {
                card_w
            };
            out.push((
                Rect {
                    x,
                    y,
                    width,
                    height: CARD_HEIGHT,
                },
                idx,
            ));
        }
    }
    out
}

/// What: Render the movie card grid, or a placeholder when there is nothing to show.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (records `card_rects`)
/// - `area`: Grid area
///
/// Details:
/// - Each card shows title, release year, rating, and the first line of the overview.
/// - The cursor card is highlighted while the grid has focus.
/// - While loading, the retained page stays on screen.
pub fn render_grid(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let movies = app.visible_movies();
    if movies.is_empty() {
        let hint = match app.fetch.phase() {
            FetchPhase::Success => "No movies found for your request.",
            FetchPhase::Error => "Nothing to show.",
            FetchPhase::Loading => "",
            FetchPhase::Idle => "Results appear here.",
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(th.overlay1),
            )))
            .centered(),
            Rect {
                y: area.y + area.height / 2,
                height: 1.min(area.height),
                ..area
            },
        );
        return;
    }

    let grid_focused = matches!(app.focus, Focus::Results);
    let layout = card_layout(area, app.settings.grid_columns, movies.len(), app.grid_cursor);
    let mut rects = Vec::with_capacity(layout.len());
    for (rect, idx) in layout {
        let Some(movie) = movies.get(idx) else {
            continue;
        };
        let highlighted = grid_focused && idx == app.grid_cursor;
        let inner_w = usize::from(rect.width.saturating_sub(2));
        let year = release_year(&movie.release_date)
            .map_or_else(|| "----".to_string(), |y| y.to_string());
        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&movie.title, inner_w),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(year, Style::default().fg(th.subtext0)),
                Span::raw("  "),
                Span::styled(
                    format!("★ {}", rating_label(movie.vote_average)),
                    Style::default().fg(th.yellow),
                ),
            ]),
            Line::from(Span::styled(
                truncate_to_width(movie.overview.lines().next().unwrap_or(""), inner_w),
                Style::default().fg(th.overlay2),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if highlighted {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Style::default().fg(if highlighted {
                th.mauve
            } else {
                th.surface1
            }))
            .style(Style::default().bg(if highlighted { th.mantle } else { th.base }));
        f.render_widget(Paragraph::new(lines).block(block), rect);
        rects.push(((rect.x, rect.y, rect.width, rect.height), idx));
    }
    app.card_rects = rects;
}
