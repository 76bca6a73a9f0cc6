//! Page window computation for the pagination bar.

/// Pages shown around the current one.
pub const PAGE_RANGE: u32 = 5;
/// Pages always shown at each end.
pub const MARGIN_PAGES: u32 = 1;

/// One element of the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// `←`, enabled when not on the first page.
    Prev {
        /// Whether there is a previous page.
        enabled: bool,
    },
    /// A numbered page chip.
    Page {
        /// 1-based page number.
        number: u32,
        /// Whether this is the current page.
        current: bool,
    },
    /// Skipped pages, rendered as `…`.
    Gap,
    /// `→`, enabled when not on the last page.
    Next {
        /// Whether there is a next page.
        enabled: bool,
    },
}

/// Clamp a requested page into `1..=total_pages` (`1` when there are no pages).
#[must_use]
pub fn clamp_page(requested: u32, total_pages: u32) -> u32 {
    requested.clamp(1, total_pages.max(1))
}

/// What: Compute the pagination bar for `current` of `total` pages.
///
/// Inputs:
/// - `current`: 1-based current page.
/// - `total`: Total number of pages.
///
/// Output:
/// - Items in display order; empty when there is at most one page.
///
/// Details:
/// - A window of [`PAGE_RANGE`] pages is centered on `current` and shifted to
///   stay inside `1..=total`; [`MARGIN_PAGES`] are kept at each end; runs of
///   hidden pages collapse into a single [`PageItem::Gap`].
#[must_use]
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }
    let current = clamp_page(current, total);
    let half = PAGE_RANGE / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(PAGE_RANGE - 1).min(total);
    if end - start < PAGE_RANGE - 1 {
        start = end.saturating_sub(PAGE_RANGE - 1).max(1);
    }

    let mut pages: Vec<u32> = (1..=MARGIN_PAGES.min(total))
        .chain(start..=end)
        .chain(total.saturating_sub(MARGIN_PAGES) + 1..=total)
        .collect();
    pages.sort_unstable();
    pages.dedup();

    let mut items = vec![PageItem::Prev {
        enabled: current > 1,
    }];
    let mut last_shown = 0;
    for n in pages {
        if last_shown != 0 && n > last_shown + 1 {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page {
            number: n,
            current: n == current,
        });
        last_shown = n;
    }
    items.push(PageItem::Next {
        enabled: current < total,
    });
    items
}
