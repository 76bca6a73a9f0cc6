use tokio::sync::mpsc;

use crate::state::{AppState, SearchKey};

use super::pagination::clamp_page;

/// What: Dispatch a request for the session's current key if the coordinator asks for one.
///
/// Inputs:
/// - `app`: Mutable application state; the coordinator may move to `Loading` or `Idle`.
/// - `search_tx`: Channel to the search worker.
///
/// Output:
/// - `true` when a request was sent.
///
/// Details:
/// - The coordinator only issues a request when the key changed (or after an error),
///   so calling this after every intent never produces redundant requests.
pub fn sync_fetch(app: &mut AppState, search_tx: &mpsc::UnboundedSender<SearchKey>) -> bool {
    let key = app.session.current_key();
    let Some(request) = app.fetch.sync(&key) else {
        return false;
    };
    tracing::info!(query = %request.query, page = request.page, "dispatching search");
    if search_tx.send(request).is_err() {
        tracing::warn!("search worker channel closed; request dropped");
        return false;
    }
    true
}

/// What: Commit the input buffer as the new search.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `search_tx`: Channel to the search worker.
///
/// Details:
/// - Blank input raises the empty-query toast and the coordinator goes idle.
/// - A non-empty query is remembered in the recent list and the page resets to 1.
/// - The detail selection does not survive a new search.
pub fn submit_search(app: &mut AppState, search_tx: &mpsc::UnboundedSender<SearchKey>) {
    let text = app.input.clone();
    if let Some(notice) = app.session.submit_query(&text) {
        tracing::debug!("empty query submitted");
        app.show_toast(notice.message());
    } else {
        let committed = app.session.query().to_string();
        app.remember_query(&committed);
    }
    app.selection.clear();
    app.grid_cursor = 0;
    sync_fetch(app, search_tx);
}

/// What: Move to another page of the committed query.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `requested`: Desired page; clamped to the known page count.
/// - `search_tx`: Channel to the search worker.
///
/// Details:
/// - Ignored while no page is loaded (nothing to paginate) or when the clamped page is
///   the current one.
pub fn change_page(
    app: &mut AppState,
    requested: u32,
    search_tx: &mpsc::UnboundedSender<SearchKey>,
) {
    let total = app.fetch.total_pages();
    if total == 0 {
        return;
    }
    let page = clamp_page(requested, total);
    if page == app.session.page() {
        return;
    }
    app.session.change_page(page);
    app.grid_cursor = 0;
    sync_fetch(app, search_tx);
}

/// Go to the next page, if any.
pub fn next_page(app: &mut AppState, search_tx: &mpsc::UnboundedSender<SearchKey>) {
    let page = app.session.page().saturating_add(1);
    change_page(app, page, search_tx);
}

/// Go to the previous page, if any.
pub fn prev_page(app: &mut AppState, search_tx: &mpsc::UnboundedSender<SearchKey>) {
    let page = app.session.page().saturating_sub(1);
    change_page(app, page, search_tx);
}

/// What: Replace the input buffer with the next recent query.
///
/// Details:
/// - Cycles most-recent-first and wraps around; no-op when the list is empty.
pub fn cycle_recent(app: &mut AppState) {
    let recent = app.recent_queries();
    if recent.is_empty() {
        return;
    }
    let next = app.recent_cursor.map_or(0, |i| (i + 1) % recent.len());
    app.recent_cursor = Some(next);
    app.input.clone_from(&recent[next]);
}
