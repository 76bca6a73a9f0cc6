use crate::logic::clamp_cursor;
use crate::state::{AppState, Resolution, SearchResponse};

/// What: Apply a search worker response to the application state.
///
/// Inputs:
/// - `app`: Application state.
/// - `response`: Key-tagged client outcome.
///
/// Output:
/// - The coordinator's [`Resolution`].
///
/// Details:
/// - Superseded responses leave state untouched.
/// - An empty successful page raises the no-results toast.
/// - The grid cursor is clamped to the new page length.
pub fn handle_search_response(app: &mut AppState, response: SearchResponse) -> Resolution {
    let resolution = app.fetch.resolve(response);
    if let Resolution::Applied { notice } = resolution {
        if let Some(notice) = notice {
            app.show_toast(notice.message());
        }
        app.grid_cursor = clamp_cursor(app.grid_cursor, app.visible_movies().len());
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SearchError;
    use crate::state::{FetchPhase, Movie, Notice, ResultPage, SearchKey};

    fn key(query: &str, page: u32) -> SearchKey {
        SearchKey {
            query: query.into(),
            page,
        }
    }

    fn page_of(n: usize, page: u32) -> ResultPage {
        ResultPage {
            items: (0..n)
                .map(|i| Movie {
                    id: i as u64,
                    title: format!("Movie {i}"),
                    ..Movie::default()
                })
                .collect(),
            page,
            total_pages: 2,
            total_results: 25,
        }
    }

    #[test]
    /// What: Stale responses never change the visible page or raise toasts.
    ///
    /// Inputs:
    /// - Active key `b`, response for `a`.
    ///
    /// Output:
    /// - `Discarded`, still `Loading`, no toast.
    fn stale_response_is_ignored() {
        let mut app = AppState::default();
        app.fetch.sync(&key("a", 1));
        app.fetch.sync(&key("b", 1));
        let r = handle_search_response(
            &mut app,
            SearchResponse {
                key: key("a", 1),
                outcome: Ok(page_of(0, 1)),
            },
        );
        assert_eq!(r, Resolution::Discarded);
        assert_eq!(app.fetch.phase(), FetchPhase::Loading);
        assert!(app.toast_message.is_none());
    }

    #[test]
    /// What: Empty pages toast the no-results notice.
    fn empty_page_toasts_notice() {
        let mut app = AppState::default();
        app.fetch.sync(&key("zzzz", 1));
        handle_search_response(
            &mut app,
            SearchResponse {
                key: key("zzzz", 1),
                outcome: Ok(page_of(0, 1)),
            },
        );
        assert_eq!(
            app.toast_message.as_deref(),
            Some(Notice::NoResultsNotice.message())
        );
    }

    #[test]
    /// What: The grid cursor stays inside a shorter page; failures empty the grid.
    ///
    /// Inputs:
    /// - Cursor at 15, then a 5-item page, then a failure.
    ///
    /// Output:
    /// - Cursor 4, then 0 with the error recorded.
    fn cursor_clamped_on_new_page() {
        let mut app = AppState::default();
        app.grid_cursor = 15;
        app.fetch.sync(&key("dune", 2));
        handle_search_response(
            &mut app,
            SearchResponse {
                key: key("dune", 2),
                outcome: Ok(page_of(5, 2)),
            },
        );
        assert_eq!(app.grid_cursor, 4);

        app.fetch.sync(&key("dune", 1));
        handle_search_response(
            &mut app,
            SearchResponse {
                key: key("dune", 1),
                outcome: Err(SearchError::Status {
                    status: 500,
                    message: "oops".into(),
                }),
            },
        );
        assert_eq!(app.grid_cursor, 0);
        assert_eq!(app.fetch.phase(), FetchPhase::Error);
        assert_eq!(app.fetch.last_error(), Some("HTTP 500: oops"));
    }
}
