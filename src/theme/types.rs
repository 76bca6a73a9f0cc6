use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;
use zeroize::Zeroizing;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Border color for idle panels.
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for focus and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for the highlighted card.
    pub lavender: Color,
}

/// Bearer credential for the search API.
///
/// The secret is wiped from memory on drop and never printed by `Debug`.
#[derive(Clone)]
pub struct ApiToken(Zeroizing<String>);

impl ApiToken {
    /// Wrap a raw token; surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(Zeroizing::new(raw.trim().to_string()))
    }

    /// Raw token text, for building the `Authorization` header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the token is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Token from `api_token`; environment variables take precedence.
    pub api_token: Option<ApiToken>,
    /// Search endpoint.
    pub api_base_url: String,
    /// Image CDN prefix joined with `backdrop_path`.
    pub image_base_url: String,
    /// Image shown when a movie has no backdrop.
    pub placeholder_image: String,
    /// `language` request parameter.
    pub language: String,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// How long toasts stay visible, in seconds.
    pub toast_seconds: u64,
    /// Cards per grid row.
    pub grid_columns: u16,
    /// How many committed queries the recent list keeps.
    pub recent_capacity: usize,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base_url: "https://api.themoviedb.org/3/search/movie".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            placeholder_image: "https://via.placeholder.com/500x750?text=No+Image".to_string(),
            language: "en-US".to_string(),
            request_timeout_secs: 15,
            toast_seconds: 4,
            grid_columns: 4,
            recent_capacity: 10,
            keymap: KeyMap::default(),
        }
    }
}

impl Settings {
    /// Toast lifetime as a [`Duration`].
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord with no modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// Chord with the Control modifier.
    #[must_use]
    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::CONTROL,
        }
    }

    /// Return a short display label such as "Ctrl+R", "F1", "PgDn".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug)]
pub struct KeyMap {
    /// Open the help overlay.
    pub help_overlay: Vec<KeyChord>,
    /// Quit the application.
    pub exit: Vec<KeyChord>,
    /// Load the next results page.
    pub next_page: Vec<KeyChord>,
    /// Load the previous results page.
    pub prev_page: Vec<KeyChord>,
    /// Move focus to the search input.
    pub focus_search: Vec<KeyChord>,
    /// Toggle focus between search input and grid.
    pub pane_next: Vec<KeyChord>,
    /// Cycle the input through recent queries.
    pub recent_cycle: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{Char, F, PageDown, PageUp, Tab};
        Self {
            help_overlay: vec![KeyChord::plain(F(1))],
            exit: vec![KeyChord::ctrl(Char('c'))],
            next_page: vec![KeyChord::plain(PageDown), KeyChord::ctrl(Char('n'))],
            prev_page: vec![KeyChord::plain(PageUp), KeyChord::ctrl(Char('p'))],
            focus_search: vec![KeyChord::plain(Char('/'))],
            pane_next: vec![KeyChord::plain(Tab)],
            recent_cycle: vec![KeyChord::ctrl(Char('r'))],
        }
    }
}

impl KeyMap {
    /// Whether `(code, mods)` matches any chord in `list`.
    #[must_use]
    pub fn matches(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        list.iter().any(|c| c.code == code && c.mods == mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Key chord labels render modifiers and named keys.
    ///
    /// Inputs:
    /// - `Ctrl+N`, `PgDn`, `F1`.
    ///
    /// Output:
    /// - Human-readable labels.
    fn key_chord_labels() {
        assert_eq!(KeyChord::ctrl(KeyCode::Char('n')).label(), "Ctrl+N");
        assert_eq!(KeyChord::plain(KeyCode::PageDown).label(), "PgDn");
        assert_eq!(KeyChord::plain(KeyCode::F(1)).label(), "F1");
    }

    #[test]
    /// What: Tokens never leak through `Debug`.
    ///
    /// Inputs:
    /// - Token `"  secret  "`.
    ///
    /// Output:
    /// - Debug output redacted; exposed value trimmed.
    fn api_token_is_redacted() {
        let t = ApiToken::new("  secret  ");
        assert_eq!(t.expose(), "secret");
        assert_eq!(format!("{t:?}"), "ApiToken(***)");
        assert!(ApiToken::new("   ").is_blank());
    }
}
