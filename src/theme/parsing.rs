use crossterm::event::{KeyCode, KeyModifiers};

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "PgDn", "/") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Supports function keys, navigation keys, and single printable characters.
/// - Normalizes character keys to lowercase for consistent matching.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" | "ESCAPE" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(KeyCode::Char(ch.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}

/// What: Parse a key chord such as "Ctrl+N" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `spec`: Optional modifiers joined with `+` and a trailing key token.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` on an unknown key.
///
/// Details:
/// - `Shift+Tab` is normalized to `BackTab` with no modifiers, matching what
///   terminals report.
pub(crate) fn parse_key_chord(spec: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<&str> = None;
    for part in spec.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            _ => key_part = Some(part),
        }
    }
    let key = key_part?;
    if key.eq_ignore_ascii_case("tab") && mods.contains(KeyModifiers::SHIFT) {
        return Some(KeyChord::plain(KeyCode::BackTab));
    }
    let code = parse_key_identifier(key)?;
    Some(KeyChord { code, mods })
}

/// What: Remove a trailing inline comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - Only `#` or `//` preceded by whitespace starts a comment, so URLs such as
///   `https://host/path` survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, w) in bytes.windows(2).enumerate() {
        if !w[0].is_ascii_whitespace() {
            continue;
        }
        let rest = &s[i + 1..];
        if rest.starts_with('#') || rest.starts_with("//") {
            return s[..i].trim();
        }
    }
    s.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Key identifiers and chords map onto `KeyCode`/modifier combinations.
    ///
    /// Inputs:
    /// - Identifiers `F5`, `/`, `PgDn`; chords `Ctrl+N`, `Shift+Tab`, `Ctrl+`.
    ///
    /// Output:
    /// - Expected codes and modifiers; `None` for a chord without a key.
    fn parsing_key_identifier_and_chord() {
        assert_eq!(parse_key_identifier("F5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key_identifier("/"), Some(KeyCode::Char('/')));
        assert_eq!(parse_key_identifier("PgDn"), Some(KeyCode::PageDown));
        assert_eq!(parse_key_identifier("nope"), None);
        let kc = parse_key_chord("Ctrl+N").expect("chord");
        assert_eq!(kc.code, KeyCode::Char('n'));
        assert!(kc.mods.contains(KeyModifiers::CONTROL));
        let bt = parse_key_chord("Shift+Tab").expect("chord");
        assert_eq!(bt.code, KeyCode::BackTab);
        assert!(bt.mods.is_empty());
        assert!(parse_key_chord("Ctrl+").is_none());
    }

    #[test]
    /// What: Inline comments are stripped without truncating URLs.
    ///
    /// Inputs:
    /// - URL values with and without trailing comments.
    ///
    /// Output:
    /// - URL preserved, comment removed.
    fn parsing_strip_inline_comment_keeps_urls() {
        assert_eq!(
            strip_inline_comment("https://api.example.org/3/search/movie"),
            "https://api.example.org/3/search/movie"
        );
        assert_eq!(strip_inline_comment("en-US # default"), "en-US");
        assert_eq!(strip_inline_comment("12 // seconds"), "12");
        assert_eq!(strip_inline_comment("  plain  "), "plain");
    }
}
