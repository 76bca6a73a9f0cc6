//! Committed search session: the query the user last submitted and the page
//! they are looking at.

use super::types::{Notice, SearchKey};

/// Committed query and current page.
///
/// `query` only changes on submit; keystrokes in the input line never touch
/// it. Submitting always resets `page` to 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSession {
    /// Last committed, trimmed query (empty when nothing was submitted).
    query: String,
    /// Current 1-based page.
    page: u32,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// What: Create a session with an empty query on page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }

    /// What: Commit a new search term.
    ///
    /// Inputs:
    /// - `text`: Raw input text; surrounding whitespace is ignored.
    ///
    /// Output:
    /// - `Some(Notice::EmptyQueryWarning)` when the trimmed text is empty, `None` otherwise.
    ///
    /// Details:
    /// - Blank input resets the session to the empty query so the coordinator goes idle.
    /// - The page is reset to 1 in both cases.
    pub fn submit_query(&mut self, text: &str) -> Option<Notice> {
        let trimmed = text.trim();
        self.page = 1;
        if trimmed.is_empty() {
            self.query.clear();
            return Some(Notice::EmptyQueryWarning);
        }
        trimmed.clone_into(&mut self.query);
        None
    }

    /// What: Move to another page of the committed query.
    ///
    /// Inputs:
    /// - `page`: 1-based page number; upper bound is enforced by the caller.
    ///
    /// Details:
    /// - Page 0 is coerced to 1.
    pub fn change_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Derive the request key for the current state.
    #[must_use]
    pub fn current_key(&self) -> SearchKey {
        SearchKey {
            query: self.query.clone(),
            page: self.page,
        }
    }

    /// Last committed query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Submitting a non-empty query always lands on page 1.
    ///
    /// Inputs:
    /// - Session moved to page 7, then a new query submitted.
    ///
    /// Output:
    /// - Page is 1 and the query is stored trimmed.
    fn submit_resets_page_and_trims() {
        let mut s = SearchSession::new();
        assert!(s.submit_query("alien").is_none());
        s.change_page(7);
        assert_eq!(s.page(), 7);
        assert!(s.submit_query("  dune  ").is_none());
        assert_eq!(s.page(), 1);
        assert_eq!(s.query(), "dune");
    }

    #[test]
    /// What: Blank submits warn and clear the committed query.
    ///
    /// Inputs:
    /// - Session with `"dune"` on page 3, then whitespace-only input.
    ///
    /// Output:
    /// - `EmptyQueryWarning`, empty query, page 1, disabled key.
    fn blank_submit_warns_and_disables_key() {
        let mut s = SearchSession::new();
        s.submit_query("dune");
        s.change_page(3);
        assert_eq!(s.submit_query(" \t "), Some(Notice::EmptyQueryWarning));
        assert_eq!(s.query(), "");
        assert_eq!(s.page(), 1);
        assert!(!s.current_key().is_enabled());
    }

    #[test]
    /// What: Key equality follows both query and page.
    ///
    /// Inputs:
    /// - Keys derived before and after page changes.
    ///
    /// Output:
    /// - Keys differ across pages and match when returning to the same page.
    fn key_tracks_query_and_page() {
        let mut s = SearchSession::new();
        s.submit_query("dune");
        let k1 = s.current_key();
        s.change_page(2);
        let k2 = s.current_key();
        assert_ne!(k1, k2);
        s.change_page(1);
        assert_eq!(s.current_key(), k1);
        s.change_page(0);
        assert_eq!(s.page(), 1);
    }
}
