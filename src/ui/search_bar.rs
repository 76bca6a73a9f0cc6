use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// What: Render the search input and the recent-queries line.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (records `search_rect`)
/// - `area`: Target rectangle
///
/// Details:
/// - Shows a `> ` prompt; the terminal caret sits after the text while the input is focused.
/// - The second line lists recent committed queries, most recent first.
pub fn render_search_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Search) && !app.selection.is_active();
    let border = if focused { th.sapphire } else { th.surface1 };

    let inner_w = usize::from(area.width.saturating_sub(4));
    let input_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let recent = app.recent_queries();
    let recent_line = if recent.is_empty() {
        Line::from(Span::styled(
            "No recent searches",
            Style::default().fg(th.overlay1),
        ))
    } else {
        Line::from(vec![
            Span::styled("Recent: ", Style::default().fg(th.overlay1)),
            Span::styled(
                truncate_to_width(&recent.join("  ·  "), inner_w.saturating_sub(8)),
                Style::default().fg(th.overlay2),
            ),
        ])
    };

    let block = Block::default()
        .title(Span::styled(
            " Search movies ",
            Style::default()
                .fg(if focused { th.mauve } else { th.overlay1 })
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    f.render_widget(
        Paragraph::new(vec![input_line, recent_line])
            .style(Style::default().fg(th.text).bg(th.base))
            .block(block),
        area,
    );
    app.search_rect = Some((area.x, area.y, area.width, area.height));

    if focused {
        let text_w = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 3).saturating_add(text_w).min(max_x);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
