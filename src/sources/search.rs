//! Remote movie search against a TMDB-compatible `search/movie` endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;

use super::SearchError;
use crate::state::{Movie, ResultPage};
use crate::theme::ApiToken;

/// Maximum number of body characters kept in a status error.
const ERROR_BODY_EXCERPT: usize = 200;

/// A movie search backend.
///
/// The runtime worker is generic over this trait so tests can substitute a
/// scripted backend for the HTTP client.
pub trait MovieSearch: Send + Sync + 'static {
    /// What: Fetch one page of results for `query`.
    ///
    /// Inputs:
    /// - `query`: Free-text search term.
    /// - `page`: 1-based page number.
    ///
    /// Output:
    /// - Normalized [`ResultPage`] or a [`SearchError`].
    fn search(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<ResultPage, SearchError>> + Send;
}

/// Connection parameters for [`TmdbClient`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Search endpoint URL.
    pub base_url: String,
    /// Bearer credential.
    pub token: ApiToken,
    /// Value for the `language` query parameter.
    pub language: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

/// Raw response body of the search endpoint.
#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    results: Vec<Movie>,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u64,
}

/// HTTP search client. One outbound request per [`MovieSearch::search`] call,
/// no retries, no caching.
#[derive(Clone, Debug)]
pub struct TmdbClient {
    /// Pooled HTTP client carrying the auth and accept headers.
    http: reqwest::Client,
    /// Parsed endpoint URL.
    base_url: Url,
    /// `language` query parameter.
    language: String,
}

impl TmdbClient {
    /// What: Build a client from explicit configuration.
    ///
    /// Inputs:
    /// - `config`: Endpoint, credential, language, and timeout.
    ///
    /// Output:
    /// - Ready client, or `SearchError::Client` for a bad URL/credential.
    ///
    /// Details:
    /// - `Authorization` and `Accept` are installed as default headers; the
    ///   authorization value is marked sensitive so it never shows in debug output.
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| SearchError::Client(format!("invalid api_base_url: {e}")))?;
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token.expose()))
            .map_err(|_| SearchError::Client("api token contains invalid characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .user_agent(format!("cinesea/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| SearchError::Client(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            language: config.language.clone(),
        })
    }
}

impl MovieSearch for TmdbClient {
    fn search(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<ResultPage, SearchError>> + Send {
        let trimmed = query.trim().to_string();
        let url = build_search_url(&self.base_url, &trimmed, page, &self.language);
        let http = self.http.clone();
        async move {
            if trimmed.is_empty() {
                return Ok(ResultPage::empty());
            }
            tracing::debug!(query = %trimmed, page, "requesting search page");
            let resp = http
                .get(url)
                .send()
                .await
                .map_err(|e| SearchError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| SearchError::Network(e.to_string()))?;
            if !status.is_success() {
                return Err(SearchError::Status {
                    status: status.as_u16(),
                    message: body.chars().take(ERROR_BODY_EXCERPT).collect(),
                });
            }
            let result = parse_search_body(&body)?;
            tracing::info!(
                query = %trimmed,
                page = result.page,
                total_pages = result.total_pages,
                items = result.items.len(),
                "search page received"
            );
            Ok(result)
        }
    }
}

/// What: Build the request URL for a query and page.
///
/// Inputs:
/// - `base`: Search endpoint.
/// - `query`: Trimmed query text.
/// - `page`: 1-based page.
/// - `language`: Language tag.
///
/// Output:
/// - URL with `query`, `include_adult=false`, `language`, and `page` parameters.
#[must_use]
pub fn build_search_url(base: &Url, query: &str, page: u32, language: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("query", query)
        .append_pair("include_adult", "false")
        .append_pair("language", language)
        .append_pair("page", &page.max(1).to_string());
    url
}

/// What: Decode and normalize a search response body.
///
/// Inputs:
/// - `body`: Raw JSON text.
///
/// Output:
/// - [`ResultPage`] or `SearchError::Decode`.
///
/// Details:
/// - Missing numeric fields default to 0; page 0 is normalized to 1.
pub fn parse_search_body(body: &str) -> Result<ResultPage, SearchError> {
    let raw: SearchBody =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(ResultPage {
        items: raw.results,
        page: raw.page.max(1),
        total_pages: raw.total_pages,
        total_results: raw.total_results,
    })
}
