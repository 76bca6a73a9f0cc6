use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Focus};
use crate::theme::{KeyChord, theme};

/// First chord of a binding, labelled, or `fallback` when unbound.
fn first_label(list: &[KeyChord], fallback: &str) -> String {
    list.first()
        .map_or_else(|| fallback.to_string(), KeyChord::label)
}

/// Render keybind hints for the focused pane.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let km = app.keymap();
    let pane_hint = match app.focus {
        Focus::Search => "Enter search",
        Focus::Results => "Arrows move  Enter details",
    };
    let text = format!(
        " {pane_hint}  {} pane  {}/{} page  {} recent  {} help  {} quit",
        first_label(&km.pane_next, "Tab"),
        first_label(&km.prev_page, "PgUp"),
        first_label(&km.next_page, "PgDn"),
        first_label(&km.recent_cycle, "Ctrl+R"),
        first_label(&km.help_overlay, "F1"),
        first_label(&km.exit, "Ctrl+C"),
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(th.overlay1))))
            .style(Style::default().bg(th.mantle)),
        area,
    );
}
