//! Core value types used by cinesea state.

use crate::sources::SearchError;

/// A single movie record as returned by the remote search endpoint.
///
/// Records are immutable once received and are owned by the [`ResultPage`]
/// that carried them.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Movie {
    /// Remote database identifier.
    pub id: u64,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Plot summary; may be empty.
    #[serde(default)]
    pub overview: String,
    /// Relative backdrop image path (e.g. `/abc.jpg`) when the movie has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Release date as reported upstream (`YYYY-MM-DD`, or empty when unknown).
    #[serde(default)]
    pub release_date: String,
    /// Average user rating on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
}

/// One page of search results.
///
/// A fresh page replaces the previously displayed one wholesale; pages are
/// never merged.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResultPage {
    /// Movies on this page in upstream rank order.
    pub items: Vec<Movie>,
    /// 1-based page number.
    pub page: u32,
    /// Number of pages available for the query.
    pub total_pages: u32,
    /// Number of matching movies across all pages.
    pub total_results: u64,
}

impl ResultPage {
    /// What: Build an empty first page.
    ///
    /// Output:
    /// - `ResultPage` with no items, `page = 1` and zero totals.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// Identity of a distinct request: trimmed committed query plus page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchKey {
    /// Trimmed committed query text.
    pub query: String,
    /// 1-based page number.
    pub page: u32,
}

impl SearchKey {
    /// Whether this key may trigger a network request (non-empty query).
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Visible phase of the fetch coordinator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchPhase {
    /// No committed query; nothing is shown and nothing is requested.
    #[default]
    Idle,
    /// A request for the active key is outstanding.
    Loading,
    /// The active key resolved successfully.
    Success,
    /// The active key failed.
    Error,
}

/// User-facing notices raised by state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A blank query was submitted; no request is made.
    EmptyQueryWarning,
    /// A request succeeded but matched no movies.
    NoResultsNotice,
}

impl Notice {
    /// Short message shown in the toast for this notice.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyQueryWarning => "Please enter your search query.",
            Self::NoResultsNotice => "No movies found for your request.",
        }
    }
}

/// Response from the search worker for a previously dispatched key.
#[derive(Debug)]
pub struct SearchResponse {
    /// Key the request was issued for.
    pub key: SearchKey,
    /// Normalized page or the client failure.
    pub outcome: Result<ResultPage, SearchError>,
}

/// Which pane receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The search input line.
    #[default]
    Search,
    /// The movie card grid.
    Results,
}
