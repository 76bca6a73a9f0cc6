use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::util::{image_url, rating_label, release_label};

/// Label of the close control drawn on the top border.
const CLOSE_LABEL: &str = "[x]";

/// What: Render the detail modal for the selected movie.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (records `details_rect` and `details_close_rect`)
/// - `area`: Full screen area used to center the modal
///
/// Details:
/// - Shows title, release date, rating, overview, and the image URL.
/// - The `[x]` close control sits at the right end of the top border.
pub fn render_details(f: &mut Frame, app: &mut AppState, area: Rect) {
    let Some(movie) = app.selection.current().cloned() else {
        return;
    };
    let th = theme();
    let w = area.width.saturating_sub(8).min(90);
    let h = area.height.saturating_sub(4).min(22);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);

    let label = |text: &str| {
        Span::styled(
            format!("{text:10}"),
            Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
        )
    };
    let overview = if movie.overview.trim().is_empty() {
        "No overview available.".to_string()
    } else {
        movie.overview.clone()
    };
    let lines = vec![
        Line::from(vec![
            label("Released"),
            Span::styled(
                release_label(&movie.release_date),
                Style::default().fg(th.text),
            ),
        ]),
        Line::from(vec![
            label("Rating"),
            Span::styled(
                format!("★ {} / 10", rating_label(movie.vote_average)),
                Style::default().fg(th.yellow),
            ),
        ]),
        Line::from(vec![
            label("Image"),
            Span::styled(image_url(&movie, &app.settings), Style::default().fg(th.sapphire)),
        ]),
        Line::from(""),
        Line::from(Span::styled(overview, Style::default().fg(th.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Esc or click outside to close",
            Style::default().fg(th.overlay1),
        )),
    ];
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", movie.title),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        rect,
    );

    let close_w = u16::try_from(CLOSE_LABEL.len()).unwrap_or(3);
    let close = Rect {
        x: rect.x + rect.width.saturating_sub(close_w + 2),
        y: rect.y,
        width: close_w,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        close,
    );
    app.details_rect = Some((rect.x, rect.y, rect.width, rect.height));
    app.details_close_rect = Some((close.x, close.y, close.width, close.height));
}
