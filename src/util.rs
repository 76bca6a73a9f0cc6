//! Small formatting helpers shared by the UI and the headless printer.

use chrono::{Datelike, NaiveDate};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::Movie;
use crate::theme::Settings;

/// What: Build the image URL shown for a movie.
///
/// Inputs:
/// - `movie`: Movie record.
/// - `settings`: Supplies the CDN prefix and the placeholder image.
///
/// Output:
/// - `<image_base_url><backdrop_path>` or the placeholder when the path is absent/blank.
#[must_use]
pub fn image_url(movie: &Movie, settings: &Settings) -> String {
    match movie.backdrop_path.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => {
            let base = settings.image_base_url.trim_end_matches('/');
            if path.starts_with('/') {
                format!("{base}{path}")
            } else {
                format!("{base}/{path}")
            }
        }
        _ => settings.placeholder_image.clone(),
    }
}

/// Release year from a `YYYY-MM-DD` date, if it parses.
#[must_use]
pub fn release_year(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// Release date for display; "Unknown" when empty.
#[must_use]
pub fn release_label(date: &str) -> String {
    let d = date.trim();
    if d.is_empty() {
        "Unknown".to_string()
    } else {
        d.to_string()
    }
}

/// Rating with one decimal, e.g. `7.8`.
#[must_use]
pub fn rating_label(vote_average: f64) -> String {
    format!("{vote_average:.1}")
}

/// What: Truncate text to a display width, appending `…` when cut.
///
/// Inputs:
/// - `s`: Text to fit.
/// - `max`: Available terminal cells.
///
/// Output:
/// - Text whose display width is at most `max`.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(backdrop: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "Dune".into(),
            overview: String::new(),
            backdrop_path: backdrop.map(str::to_string),
            release_date: "2021-09-15".into(),
            vote_average: 7.85,
        }
    }

    #[test]
    /// What: Image URLs join the CDN prefix or fall back to the placeholder.
    ///
    /// Inputs:
    /// - Movies with a backdrop, a blank backdrop, and none.
    ///
    /// Output:
    /// - CDN URL for the first; placeholder otherwise.
    fn image_url_prefers_backdrop() {
        let s = Settings::default();
        assert_eq!(
            image_url(&movie(Some("/abc.jpg")), &s),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(image_url(&movie(Some("  ")), &s), s.placeholder_image);
        assert_eq!(image_url(&movie(None), &s), s.placeholder_image);
    }

    #[test]
    /// What: Date and rating helpers format for display.
    fn date_and_rating_labels() {
        assert_eq!(release_year("2021-09-15"), Some(2021));
        assert_eq!(release_year(""), None);
        assert_eq!(release_label(" "), "Unknown");
        assert_eq!(rating_label(7.84), "7.8");
    }

    #[test]
    /// What: Truncation respects display width including wide characters.
    fn truncate_handles_wide_chars() {
        assert_eq!(truncate_to_width("Dune", 10), "Dune");
        assert_eq!(truncate_to_width("Dune: Part Two", 6), "Dune:…");
        assert_eq!(truncate_to_width("千と千尋の神隠し", 5), "千と…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
