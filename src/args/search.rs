//! Command-line one-shot search.

use std::fmt::Write as _;

use crate::sources::MovieSearch;
use crate::state::{FetchCoordinator, Resolution, ResultPage, SearchResponse, SearchSession};
use crate::theme::Settings;
use crate::util::{image_url, rating_label, release_year, truncate_to_width};

/// Width of the title column in plain output.
const TITLE_WIDTH: usize = 40;

/// What: Render a page as a plain-text table.
///
/// Inputs:
/// - `page`: Results to print.
///
/// Output:
/// - A header with counts followed by one row per movie (year, rating, id, title).
pub fn format_plain(page: &ResultPage) -> String {
    let mut out = format!(
        "Page {} of {} ({} results)\n",
        page.page,
        page.total_pages.max(1),
        page.total_results
    );
    for m in &page.items {
        let year = release_year(&m.release_date)
            .map_or_else(|| "----".to_string(), |y| y.to_string());
        let _ = writeln!(
            out,
            "{year:>4}  {:>4}  {:>8}  {}",
            rating_label(m.vote_average),
            m.id,
            truncate_to_width(&m.title, TITLE_WIDTH)
        );
    }
    out
}

/// What: Render a page as JSON, adding each movie's resolved image URL.
///
/// Inputs:
/// - `page`: Results to print.
/// - `settings`: Supplies the image CDN prefix and placeholder.
///
/// Output:
/// - Pretty-printed JSON object with `page`, `total_pages`, `total_results`, and `results`.
pub fn format_json(page: &ResultPage, settings: &Settings) -> Result<String, serde_json::Error> {
    let results: Vec<serde_json::Value> = page
        .items
        .iter()
        .map(|m| {
            let mut v = serde_json::to_value(m)?;
            if let Some(obj) = v.as_object_mut() {
                obj.insert(
                    "image_url".to_string(),
                    serde_json::Value::String(image_url(m, settings)),
                );
            }
            Ok(v)
        })
        .collect::<Result<_, serde_json::Error>>()?;
    serde_json::to_string_pretty(&serde_json::json!({
        "page": page.page,
        "total_pages": page.total_pages,
        "total_results": page.total_results,
        "results": results,
    }))
}

/// What: Run one search without the TUI and print the outcome.
///
/// Inputs:
/// - `client`: Search backend.
/// - `query`: Raw query text from `--search`.
/// - `page`: Requested page (0 is treated as 1).
/// - `json`: Print JSON instead of a table.
/// - `settings`: Image URL settings for JSON output.
///
/// Output:
/// - Process exit code: `0` on success (including no results), `1` for an empty
///   query or a failed request.
///
/// Details:
/// - Goes through the same session and coordinator transitions as the TUI.
/// - Notices and errors go to stderr; results go to stdout.
pub async fn run_search<C: MovieSearch>(
    client: &C,
    query: &str,
    page: u32,
    json: bool,
    settings: &Settings,
) -> i32 {
    tracing::info!(query = %query, page, "search mode requested from CLI");
    let mut session = SearchSession::new();
    if let Some(notice) = session.submit_query(query) {
        eprintln!("{}", notice.message());
        return 1;
    }
    session.change_page(page);

    let mut fetch = FetchCoordinator::new();
    let Some(key) = fetch.sync(&session.current_key()) else {
        return 1;
    };
    let outcome = client.search(&key.query, key.page).await;
    let notice = match fetch.resolve(SearchResponse { key, outcome }) {
        Resolution::Applied { notice } => notice,
        Resolution::Discarded => None,
    };

    let Some(result) = fetch.last_result() else {
        eprintln!(
            "Search failed: {}",
            fetch.last_error().unwrap_or("unknown error")
        );
        return 1;
    };
    if json {
        match format_json(result, settings) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode results: {e}");
                return 1;
            }
        }
    } else {
        print!("{}", format_plain(result));
    }
    if let Some(notice) = notice {
        eprintln!("{}", notice.message());
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SearchError;
    use crate::state::Movie;
    use std::future::Future;

    fn dune() -> Movie {
        Movie {
            id: 438_631,
            title: "Dune".into(),
            overview: "Paul Atreides...".into(),
            backdrop_path: Some("/dune.jpg".into()),
            release_date: "2021-09-15".into(),
            vote_average: 7.84,
        }
    }

    /// Backend returning a fixed outcome.
    struct Fixed(Result<ResultPage, SearchError>);

    impl MovieSearch for Fixed {
        fn search(
            &self,
            _query: &str,
            _page: u32,
        ) -> impl Future<Output = Result<ResultPage, SearchError>> + Send {
            let out = self.0.clone();
            async move { out }
        }
    }

    #[test]
    /// What: Plain output lists counts and one row per movie.
    fn plain_table_rows() {
        let page = ResultPage {
            items: vec![dune()],
            page: 1,
            total_pages: 3,
            total_results: 42,
        };
        let text = format_plain(&page);
        assert!(text.starts_with("Page 1 of 3 (42 results)\n"));
        assert!(text.contains("2021   7.8    438631  Dune"));
    }

    #[test]
    /// What: JSON output carries totals and resolved image URLs.
    fn json_includes_image_url() {
        let page = ResultPage {
            items: vec![dune()],
            page: 1,
            total_pages: 1,
            total_results: 1,
        };
        let text = format_json(&page, &Settings::default()).expect("json");
        let v: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(v["total_results"], 1);
        assert_eq!(
            v["results"][0]["image_url"],
            "https://image.tmdb.org/t/p/w500/dune.jpg"
        );
    }

    #[tokio::test]
    /// What: Exit codes follow the outcome.
    ///
    /// Inputs:
    /// - Blank query, a success, an empty success, and a failure.
    ///
    /// Output:
    /// - `1`, `0`, `0`, `1`.
    async fn exit_codes_follow_outcome() {
        let s = Settings::default();
        let ok = Fixed(Ok(ResultPage {
            items: vec![dune()],
            page: 1,
            total_pages: 1,
            total_results: 1,
        }));
        assert_eq!(run_search(&ok, "   ", 1, false, &s).await, 1);
        assert_eq!(run_search(&ok, "dune", 1, false, &s).await, 0);
        let empty = Fixed(Ok(ResultPage::empty()));
        assert_eq!(run_search(&empty, "zzzz", 1, true, &s).await, 0);
        let failed = Fixed(Err(SearchError::Network("refused".into())));
        assert_eq!(run_search(&failed, "dune", 1, false, &s).await, 1);
    }
}
