use std::fs;
use std::path::Path;

use super::config::SETTINGS_SKELETON_CONTENT;
use super::parsing::{parse_key_chord, strip_inline_comment};
use super::paths::settings_path_in;
use super::types::{ApiToken, KeyChord, Settings};

/// What: Load settings from `<dir>/settings.conf`, writing a skeleton on first run.
///
/// Inputs:
/// - `dir`: Configuration directory.
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
pub fn load_settings(dir: &Path) -> Settings {
    let path = settings_path_in(dir);
    if !path.is_file() {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match fs::write(&path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write settings skeleton"),
        }
    }
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `key = value` settings text.
///
/// Inputs:
/// - `content`: Full file text.
///
/// Output:
/// - Settings with recognized keys applied over defaults.
///
/// Details:
/// - Blank lines and lines starting with `#` or `//` are skipped.
/// - Keys are case-insensitive; `.`, `-`, and spaces normalize to `_`.
/// - Invalid values are logged and ignored, keeping the default.
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        if !apply_setting(&mut out, &key, val) {
            tracing::warn!(key = %key, "ignoring unknown or invalid setting");
        }
    }
    out
}

/// Apply one normalized key. Returns `false` when the key or value is not usable.
fn apply_setting(out: &mut Settings, key: &str, val: &str) -> bool {
    match key {
        "api_token" | "tmdb_token" => {
            let token = ApiToken::new(val);
            out.api_token = (!token.is_blank()).then_some(token);
            true
        }
        "api_base_url" => set_non_empty(&mut out.api_base_url, val),
        "image_base_url" => set_non_empty(&mut out.image_base_url, val.trim_end_matches('/')),
        "placeholder_image" => set_non_empty(&mut out.placeholder_image, val),
        "language" => set_non_empty(&mut out.language, val),
        "request_timeout_secs" => parse_into(&mut out.request_timeout_secs, val, 1),
        "toast_seconds" => parse_into(&mut out.toast_seconds, val, 1),
        "grid_columns" => parse_into(&mut out.grid_columns, val, 1),
        "recent_capacity" => parse_into(&mut out.recent_capacity, val, 1),
        "keybind_exit" | "keybind_quit" => set_chord(&mut out.keymap.exit, val),
        "keybind_help" => set_chord(&mut out.keymap.help_overlay, val),
        "keybind_next_page" => set_chord(&mut out.keymap.next_page, val),
        "keybind_prev_page" => set_chord(&mut out.keymap.prev_page, val),
        "keybind_focus_search" => set_chord(&mut out.keymap.focus_search, val),
        "keybind_pane_next" => set_chord(&mut out.keymap.pane_next, val),
        "keybind_recent" => set_chord(&mut out.keymap.recent_cycle, val),
        _ => false,
    }
}

fn set_non_empty(slot: &mut String, val: &str) -> bool {
    if val.is_empty() {
        return false;
    }
    val.clone_into(slot);
    true
}

fn parse_into<T>(slot: &mut T, val: &str, min: T) -> bool
where
    T: std::str::FromStr + PartialOrd,
{
    match val.parse::<T>() {
        Ok(v) if v >= min => {
            *slot = v;
            true
        }
        _ => false,
    }
}

/// Replace the chord list for an action with the single chord in `val`.
fn set_chord(slot: &mut Vec<KeyChord>, val: &str) -> bool {
    parse_key_chord(val).is_some_and(|ch| {
        *slot = vec![ch];
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    /// What: Recognized keys override defaults; junk is ignored.
    ///
    /// Inputs:
    /// - Settings text with comments, mixed-case keys, an invalid number, and a keybind.
    ///
    /// Output:
    /// - Overrides applied; invalid values keep defaults.
    fn parse_settings_overrides_defaults() {
        let text = "\
# comment
API.Token = abc123   # inline
api_base_url = https://example.org/3/search/movie
image-base-url = https://img.example.org/t/p/w300/
grid_columns = 3
toast_seconds = zero
keybind_next_page = Ctrl+J
unknown_key = 1
";
        let s = parse_settings(text);
        assert_eq!(s.api_token.as_ref().map(ApiToken::expose), Some("abc123"));
        assert_eq!(s.api_base_url, "https://example.org/3/search/movie");
        assert_eq!(s.image_base_url, "https://img.example.org/t/p/w300");
        assert_eq!(s.grid_columns, 3);
        assert_eq!(s.toast_seconds, Settings::default().toast_seconds);
        assert_eq!(s.keymap.next_page.len(), 1);
        assert_eq!(s.keymap.next_page[0].code, KeyCode::Char('j'));
        assert_eq!(s.keymap.next_page[0].mods, KeyModifiers::CONTROL);
    }

    #[test]
    /// What: Zero columns is rejected; blank token means no token.
    fn parse_settings_rejects_out_of_range() {
        let s = parse_settings("grid_columns = 0\napi_token =   \n");
        assert_eq!(s.grid_columns, Settings::default().grid_columns);
        assert!(s.api_token.is_none());
    }

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    /// What: Rejected lines log their key but never their value.
    ///
    /// Inputs:
    /// - A secret under a misspelled token key.
    ///
    /// Output:
    /// - The warning names `apitoken`; the secret is absent from the log.
    fn rejected_setting_value_is_not_logged() {
        let sink = LogBuffer::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let s = tracing::subscriber::with_default(subscriber, || {
            parse_settings("apitoken = s3cr3t-v4lue\n")
        });
        assert!(s.api_token.is_none());
        let logged = String::from_utf8(sink.0.lock().expect("log buffer").clone())
            .expect("utf8 log");
        assert!(logged.contains("apitoken"));
        assert!(!logged.contains("s3cr3t-v4lue"));
    }

    #[test]
    /// What: First load writes the skeleton and parses it to defaults.
    ///
    /// Inputs:
    /// - Empty temporary config directory.
    ///
    /// Output:
    /// - `settings.conf` exists; values equal defaults; no token.
    fn load_settings_writes_skeleton() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = load_settings(dir.path());
        assert!(dir.path().join("settings.conf").is_file());
        assert!(s.api_token.is_none());
        assert_eq!(s.language, "en-US");
        assert_eq!(s.grid_columns, Settings::default().grid_columns);
    }
}
