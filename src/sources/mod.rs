//! Network data retrieval.

use thiserror::Error;

mod search;

pub use search::{ClientConfig, MovieSearch, TmdbClient, build_search_url, parse_search_body};

/// Failure of a single search request.
///
/// Variants carry rendered text rather than source errors so responses can be
/// moved across channels and compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Connection, TLS, timeout, or body read failure.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        message: String,
    },
    /// The body was not the expected JSON document.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The client could not be constructed.
    #[error("client setup failed: {0}")]
    Client(String),
}
