use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, FetchPhase};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Braille frames of the loading spinner.
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// What: Build the status line text for the current fetch phase.
///
/// Inputs:
/// - `app`: Application state
///
/// Output:
/// - Spans for: spinner while loading, error banner, result counts, or an idle hint.
fn status_spans(app: &AppState) -> Vec<Span<'static>> {
    let th = theme();
    match app.fetch.phase() {
        FetchPhase::Idle => vec![Span::styled(
            "Type a title and press Enter to search.",
            Style::default().fg(th.overlay1),
        )],
        FetchPhase::Loading => {
            let frame = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
            let what = app
                .fetch
                .active_key()
                .map(|k| format!(" Searching \"{}\" (page {})…", k.query, k.page))
                .unwrap_or_default();
            vec![
                Span::styled(frame.to_string(), Style::default().fg(th.sapphire)),
                Span::styled(what, Style::default().fg(th.subtext0)),
            ]
        }
        FetchPhase::Error => vec![
            Span::styled(
                " Error ",
                Style::default()
                    .fg(th.crust)
                    .bg(th.red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    " {}. Press Enter to retry.",
                    app.fetch.last_error().unwrap_or("Request failed")
                ),
                Style::default().fg(th.red),
            ),
        ],
        FetchPhase::Success => {
            let text = app.fetch.last_result().map_or_else(String::new, |p| {
                format!(
                    "{} results · page {} of {}",
                    p.total_results,
                    p.page,
                    p.total_pages.max(1)
                )
            });
            vec![Span::styled(text, Style::default().fg(th.green))]
        }
    }
}

/// Render the one-line status bar.
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    f.render_widget(
        Paragraph::new(Line::from(status_spans(app))).style(Style::default().bg(th.base)),
        Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        },
    );
}

/// What: Render the transient toast in the bottom-right corner.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (reads `toast_message`)
/// - `area`: Full screen area
///
/// Details:
/// - Width follows the message up to half the screen; nothing is drawn without a toast.
pub fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(msg) = app.toast_message.as_deref() else {
        return;
    };
    let th = theme();
    let max_w = (area.width / 2).max(10);
    let text = truncate_to_width(msg, usize::from(max_w.saturating_sub(4)));
    let w = u16::try_from(text.width())
        .unwrap_or(max_w)
        .saturating_add(4)
        .min(area.width);
    let h = 3.min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(w + 1),
        y: area.y + area.height.saturating_sub(h + 1),
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.yellow))
                .style(Style::default().bg(th.mantle)),
        ),
        rect,
    );
}
