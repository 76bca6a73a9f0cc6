use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::{KeyChord, theme};

/// What: Render the help overlay listing the active keybindings.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (records `help_rect`)
/// - `area`: Full screen area
///
/// Details:
/// - Configurable bindings show every chord; fixed keys (arrows, Enter, Esc) follow.
pub fn render_help(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let w = area.width.saturating_sub(6).min(72);
    let h = area.height.saturating_sub(4).min(22);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    // inner content only, for outside-click detection
    app.help_rect = Some((
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    ));

    let fmt = |label: &str, keys: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label:22}"),
                Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
            ),
            Span::styled(keys, Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
        ])
    };
    let chords = |list: &[KeyChord]| {
        list.iter()
            .map(|c| format!("[{}]", c.label()))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let km = app.keymap();
    let lines = vec![
        fmt("Help overlay", chords(&km.help_overlay)),
        fmt("Exit", chords(&km.exit)),
        fmt("Next page", chords(&km.next_page)),
        fmt("Previous page", chords(&km.prev_page)),
        fmt("Focus search", chords(&km.focus_search)),
        fmt("Switch pane", chords(&km.pane_next)),
        fmt("Recent queries", chords(&km.recent_cycle)),
        Line::from(""),
        fmt("Search", "[Enter] in the search box".to_string()),
        fmt("Move in grid", "[←] [→] [↑] [↓] [Home] [End]".to_string()),
        fmt("Open details", "[Enter] in the grid, or click a card".to_string()),
        fmt("Close details", "[Esc], [x], or click outside".to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or click outside to close",
            Style::default().fg(th.overlay1),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(th.text).bg(th.mantle))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(
                        " cinesea Help ",
                        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(th.mauve))
                    .style(Style::default().bg(th.mantle)),
            ),
        rect,
    );
}
