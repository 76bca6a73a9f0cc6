//! Request lifecycle for the committed search key.
//!
//! The coordinator keeps three slots: the key of the latest issued request,
//! the visible phase, and the last successful page. The previous page stays
//! visible while the next one loads; responses for superseded keys are
//! dropped without touching state.

use super::types::{FetchPhase, Notice, ResultPage, SearchKey, SearchResponse};

/// Outcome of feeding a worker response into the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The response belonged to a superseded key and was ignored.
    Discarded,
    /// The response updated visible state, possibly raising a notice.
    Applied {
        /// `Some(Notice::NoResultsNotice)` when the page arrived empty.
        notice: Option<Notice>,
    },
}

/// Fetch state machine driven by key changes and client responses.
#[derive(Clone, Debug, Default)]
pub struct FetchCoordinator {
    /// Visible phase.
    phase: FetchPhase,
    /// Last successful page; retained during `Loading`.
    last_result: Option<ResultPage>,
    /// Key of the most recently issued request.
    active_key: Option<SearchKey>,
    /// Detail of the last failure, for logs and the error banner.
    last_error: Option<String>,
}

impl FetchCoordinator {
    /// What: Create an idle coordinator with no data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: React to the current session key.
    ///
    /// Inputs:
    /// - `key`: Key derived from the session after an intent (or at startup).
    ///
    /// Output:
    /// - `Some(key)` when a request must be dispatched for it; `None` otherwise.
    ///
    /// Details:
    /// - Disabled key: phase goes `Idle`, data and active key are cleared.
    /// - Same key as the active one: no request, unless that key ended in `Error`,
    ///   in which case re-syncing is the user's retry.
    /// - New key: becomes active, phase goes `Loading`, previous page stays visible.
    pub fn sync(&mut self, key: &SearchKey) -> Option<SearchKey> {
        if !key.is_enabled() {
            self.phase = FetchPhase::Idle;
            self.last_result = None;
            self.active_key = None;
            self.last_error = None;
            return None;
        }
        if self.active_key.as_ref() == Some(key) && self.phase != FetchPhase::Error {
            tracing::debug!(query = %key.query, page = key.page, "key unchanged; no fetch");
            return None;
        }
        self.active_key = Some(key.clone());
        self.phase = FetchPhase::Loading;
        self.last_error = None;
        Some(key.clone())
    }

    /// What: Apply a worker response if it matches the active key.
    ///
    /// Inputs:
    /// - `response`: Key plus client outcome.
    ///
    /// Output:
    /// - [`Resolution::Discarded`] for superseded keys or when no request is
    ///   outstanding, otherwise [`Resolution::Applied`].
    ///
    /// Details:
    /// - Only a `Loading` coordinator accepts a response; once the active key has
    ///   resolved, duplicate answers for it are dropped.
    /// - Success replaces the page and enters `Success`; an empty page raises
    ///   `NoResultsNotice` once for this transition.
    /// - Failure enters `Error` and drops the retained page.
    pub fn resolve(&mut self, response: SearchResponse) -> Resolution {
        if self.active_key.as_ref() != Some(&response.key) {
            tracing::debug!(
                query = %response.key.query,
                page = response.key.page,
                "discarding response for superseded key"
            );
            return Resolution::Discarded;
        }
        if self.phase != FetchPhase::Loading {
            tracing::debug!(
                query = %response.key.query,
                page = response.key.page,
                phase = ?self.phase,
                "discarding duplicate response; no request outstanding"
            );
            return Resolution::Discarded;
        }
        match response.outcome {
            Ok(page) => {
                let notice = page.items.is_empty().then_some(Notice::NoResultsNotice);
                self.last_result = Some(page);
                self.phase = FetchPhase::Success;
                Resolution::Applied { notice }
            }
            Err(err) => {
                tracing::warn!(
                    query = %response.key.query,
                    page = response.key.page,
                    error = %err,
                    "search request failed"
                );
                self.last_error = Some(err.to_string());
                self.last_result = None;
                self.phase = FetchPhase::Error;
                Resolution::Applied { notice: None }
            }
        }
    }

    /// Current visible phase.
    #[must_use]
    pub const fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Page to render: the latest success, or the previous one while loading.
    #[must_use]
    pub const fn last_result(&self) -> Option<&ResultPage> {
        self.last_result.as_ref()
    }

    /// Key of the most recently issued request.
    #[must_use]
    pub const fn active_key(&self) -> Option<&SearchKey> {
        self.active_key.as_ref()
    }

    /// Detail of the last failure while in `Error`.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Total pages known for the current query, if any page is loaded.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.last_result.as_ref().map_or(0, |p| p.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SearchError;
    use crate::state::types::Movie;

    fn key(q: &str, page: u32) -> SearchKey {
        SearchKey {
            query: q.to_string(),
            page,
        }
    }

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: String::new(),
            backdrop_path: None,
            release_date: "2021-09-15".to_string(),
            vote_average: 7.8,
        }
    }

    fn page_of(page: u32, total_pages: u32, ids: &[u64]) -> ResultPage {
        ResultPage {
            items: ids.iter().map(|id| movie(*id, &format!("m{id}"))).collect(),
            page,
            total_pages,
            total_results: u64::from(total_pages) * 20,
        }
    }

    fn ok(k: &SearchKey, p: ResultPage) -> SearchResponse {
        SearchResponse {
            key: k.clone(),
            outcome: Ok(p),
        }
    }

    #[test]
    /// What: Disabled keys never request and always land in `Idle` with no data.
    ///
    /// Inputs:
    /// - A loaded coordinator synced with an empty key.
    ///
    /// Output:
    /// - No fetch, `Idle`, no result, no active key.
    fn disabled_key_goes_idle() {
        let mut c = FetchCoordinator::new();
        assert_eq!(c.sync(&key("", 1)), None);
        assert_eq!(c.phase(), FetchPhase::Idle);

        let k = key("dune", 1);
        assert_eq!(c.sync(&k), Some(k.clone()));
        c.resolve(ok(&k, page_of(1, 5, &[1, 2])));
        assert_eq!(c.sync(&key("", 1)), None);
        assert_eq!(c.phase(), FetchPhase::Idle);
        assert!(c.last_result().is_none());
        assert!(c.active_key().is_none());
    }

    #[test]
    /// What: Re-syncing an unchanged key does not issue another request.
    ///
    /// Inputs:
    /// - Same key synced twice, before and after resolution.
    ///
    /// Output:
    /// - Only the first sync returns a key.
    fn unchanged_key_does_not_refetch() {
        let mut c = FetchCoordinator::new();
        let k = key("dune", 1);
        assert!(c.sync(&k).is_some());
        assert!(c.sync(&k).is_none());
        c.resolve(ok(&k, page_of(1, 5, &[1])));
        assert!(c.sync(&k).is_none());
        assert_eq!(c.phase(), FetchPhase::Success);
    }

    #[test]
    /// What: Page-to-page transitions keep the previous page visible while loading.
    ///
    /// Inputs:
    /// - Page 1 loaded, then page 2 requested.
    ///
    /// Output:
    /// - `Loading` with page-1 items still present; page 2 replaces them on success.
    fn stale_while_revalidate_between_pages() {
        let mut c = FetchCoordinator::new();
        let k1 = key("dune", 1);
        c.sync(&k1);
        assert_eq!(c.phase(), FetchPhase::Loading);
        c.resolve(ok(&k1, page_of(1, 5, &[1, 2, 3])));
        assert_eq!(c.phase(), FetchPhase::Success);

        let k2 = key("dune", 2);
        assert_eq!(c.sync(&k2), Some(k2.clone()));
        assert_eq!(c.phase(), FetchPhase::Loading);
        let shown = c.last_result().map(|p| p.items.len()).unwrap_or_default();
        assert_eq!(shown, 3);
        assert_eq!(c.last_result().map(|p| p.page), Some(1));

        c.resolve(ok(&k2, page_of(2, 5, &[4, 5])));
        assert_eq!(c.phase(), FetchPhase::Success);
        assert_eq!(c.last_result().map(|p| p.page), Some(2));
        assert_eq!(c.last_result().map(|p| p.items[0].id), Some(4));
    }

    #[test]
    /// What: Out-of-order responses never overwrite the current key's data.
    ///
    /// Inputs:
    /// - K1 issued, K2 issued, K1 issued again; K1's first response, then K2's,
    ///   then K1's second response arrive.
    ///
    /// Output:
    /// - Only responses keyed K1 (the final current key) are applied; K2 is discarded.
    fn superseded_responses_are_discarded() {
        let mut c = FetchCoordinator::new();
        let k1 = key("dune", 1);
        let k2 = key("dune", 2);
        c.sync(&k1);
        c.sync(&k2);
        assert_eq!(c.resolve(ok(&k1, page_of(1, 5, &[1]))), Resolution::Discarded);
        assert!(c.last_result().is_none());

        c.sync(&k1);
        assert_eq!(c.resolve(ok(&k2, page_of(2, 5, &[9]))), Resolution::Discarded);
        assert_eq!(c.phase(), FetchPhase::Loading);
        assert!(c.last_result().is_none());

        assert_eq!(
            c.resolve(ok(&k1, page_of(1, 5, &[1]))),
            Resolution::Applied { notice: None }
        );
        assert_eq!(c.last_result().map(|p| p.items[0].id), Some(1));
    }

    #[test]
    /// What: An empty successful page raises exactly one no-results notice.
    ///
    /// Inputs:
    /// - Query resolving to zero items.
    ///
    /// Output:
    /// - `Success`, empty items, notice on the transition only.
    fn empty_success_emits_single_notice() {
        let mut c = FetchCoordinator::new();
        let k = key("zzzzqqq", 1);
        c.sync(&k);
        let r = c.resolve(ok(&k, ResultPage::empty()));
        assert_eq!(
            r,
            Resolution::Applied {
                notice: Some(Notice::NoResultsNotice)
            }
        );
        assert_eq!(c.phase(), FetchPhase::Success);
        assert!(c.last_result().is_some_and(|p| p.items.is_empty()));
        // Re-syncing the same key is not a new transition.
        assert!(c.sync(&k).is_none());
    }

    #[test]
    /// What: A second answer for an already resolved key changes nothing.
    ///
    /// Inputs:
    /// - K1, K2, K1 synced (two K1 requests in flight); both K1 answers are empty.
    ///
    /// Output:
    /// - The first applies with the notice; the second is discarded.
    fn duplicate_response_for_resolved_key_is_discarded() {
        let mut c = FetchCoordinator::new();
        let k1 = key("zzzzqqq", 1);
        let k2 = key("zzzzqqq", 2);
        c.sync(&k1);
        c.sync(&k2);
        c.sync(&k1);
        assert_eq!(
            c.resolve(ok(&k1, ResultPage::empty())),
            Resolution::Applied {
                notice: Some(Notice::NoResultsNotice)
            }
        );
        assert_eq!(c.resolve(ok(&k1, page_of(1, 5, &[7]))), Resolution::Discarded);
        assert_eq!(c.phase(), FetchPhase::Success);
        assert!(c.last_result().is_some_and(|p| p.items.is_empty()));
    }

    #[test]
    /// What: Failures drop retained data; stale failures are ignored.
    ///
    /// Inputs:
    /// - Page 1 loaded, page 2 fails; separately a superseded failure arrives.
    ///
    /// Output:
    /// - `Error` with no data for the current failure; no change for the stale one.
    fn failure_clears_data_only_for_active_key() {
        let mut c = FetchCoordinator::new();
        let k1 = key("dune", 1);
        let k2 = key("dune", 2);
        c.sync(&k1);
        c.resolve(ok(&k1, page_of(1, 5, &[1])));
        c.sync(&k2);
        let stale = SearchResponse {
            key: k1.clone(),
            outcome: Err(SearchError::Network("reset".into())),
        };
        assert_eq!(c.resolve(stale), Resolution::Discarded);
        assert_eq!(c.phase(), FetchPhase::Loading);
        assert!(c.last_result().is_some());

        let failed = SearchResponse {
            key: k2.clone(),
            outcome: Err(SearchError::Status {
                status: 500,
                message: "boom".into(),
            }),
        };
        assert_eq!(c.resolve(failed), Resolution::Applied { notice: None });
        assert_eq!(c.phase(), FetchPhase::Error);
        assert!(c.last_result().is_none());
        assert!(c.last_error().is_some_and(|e| e.contains("500")));
    }

    #[test]
    /// What: After an error, syncing the same key again retries it.
    ///
    /// Inputs:
    /// - Key that failed, synced again.
    ///
    /// Output:
    /// - A new request for the key and phase `Loading`.
    fn errored_key_can_be_retried() {
        let mut c = FetchCoordinator::new();
        let k = key("dune", 1);
        c.sync(&k);
        c.resolve(SearchResponse {
            key: k.clone(),
            outcome: Err(SearchError::Network("timeout".into())),
        });
        assert_eq!(c.sync(&k), Some(k.clone()));
        assert_eq!(c.phase(), FetchPhase::Loading);
        assert!(c.last_error().is_none());
    }
}
