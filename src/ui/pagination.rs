use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::{PageItem, page_items};
use crate::state::AppState;
use crate::theme::theme;

/// What: Label and click target for one pagination item.
///
/// Inputs:
/// - `item`: Pagination element
/// - `current`: Current page
///
/// Output:
/// - Display label and the page it jumps to (`None` for gaps and disabled arrows).
fn item_label(item: PageItem, current: u32) -> (String, Option<u32>) {
    match item {
        PageItem::Prev { enabled } => ("←".to_string(), enabled.then(|| current - 1)),
        PageItem::Next { enabled } => ("→".to_string(), enabled.then(|| current + 1)),
        PageItem::Gap => ("…".to_string(), None),
        PageItem::Page {
            number,
            current: true,
        } => (format!("[{number}]"), None),
        PageItem::Page { number, .. } => (number.to_string(), Some(number)),
    }
}

/// What: Render the centered pagination bar.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (records `pagination_rects`)
/// - `area`: One-line target rectangle
///
/// Details:
/// - Uses the session page so the bar moves as soon as a page change is requested.
/// - Every enabled item records a click target.
pub fn render_pagination(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let current = app.session.page();
    let items = page_items(current, app.fetch.total_pages());

    let labels: Vec<(String, Option<u32>, bool)> = items
        .iter()
        .map(|it| {
            let (label, target) = item_label(*it, current);
            let is_current = matches!(it, PageItem::Page { current: true, .. });
            (label, target, is_current)
        })
        .collect();
    let total_w: usize = labels.iter().map(|(l, _, _)| l.width() + 1).sum();
    let total_w = u16::try_from(total_w.saturating_sub(1)).unwrap_or(area.width);
    let mut x = area.x + area.width.saturating_sub(total_w) / 2;

    let mut spans = Vec::with_capacity(labels.len() * 2);
    let mut rects = Vec::new();
    for (i, (label, target, is_current)) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            x = x.saturating_add(1);
        }
        let w = u16::try_from(label.width()).unwrap_or(0);
        let style = if is_current {
            Style::default().fg(th.crust).bg(th.mauve).add_modifier(Modifier::BOLD)
        } else if target.is_some() {
            Style::default().fg(th.text)
        } else {
            Style::default().fg(th.overlay1)
        };
        if let Some(page) = target {
            rects.push(((x, area.y, w, 1), page));
        }
        spans.push(Span::styled(label, style));
        x = x.saturating_add(w);
    }
    f.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
    app.pagination_rects = rects;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Items map to labels and jump targets.
    ///
    /// Inputs:
    /// - Each item kind with current page 3.
    ///
    /// Output:
    /// - Arrows target neighbours; the current chip and gaps are inert.
    fn labels_and_targets() {
        assert_eq!(
            item_label(PageItem::Prev { enabled: true }, 3),
            ("←".to_string(), Some(2))
        );
        assert_eq!(item_label(PageItem::Next { enabled: false }, 3).1, None);
        assert_eq!(
            item_label(
                PageItem::Page {
                    number: 3,
                    current: true
                },
                3
            ),
            ("[3]".to_string(), None)
        );
        assert_eq!(
            item_label(
                PageItem::Page {
                    number: 7,
                    current: false
                },
                3
            )
            .1,
            Some(7)
        );
        assert_eq!(item_label(PageItem::Gap, 3).1, None);
    }
}
