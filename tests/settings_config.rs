//! Configuration loading against a temporary config directory.

use cinesea::theme::{
    ConfigError, SETTINGS_SKELETON_CONTENT, load_settings, parse_settings, resolve_token,
    settings_path_in,
};
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
/// What: First run writes a fully commented skeleton that parses to defaults.
///
/// Inputs:
/// - Empty temporary directory.
///
/// Output:
/// - `settings.conf` created with the skeleton text; defaults returned.
fn first_run_writes_skeleton() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = load_settings(dir.path());
    let written =
        std::fs::read_to_string(settings_path_in(dir.path())).expect("skeleton written");
    assert_eq!(written, SETTINGS_SKELETON_CONTENT);
    assert!(settings.api_token.is_none());
    assert_eq!(settings.grid_columns, 4);
    assert_eq!(settings.language, "en-US");
}

#[test]
/// What: Existing settings files are read, not overwritten.
///
/// Inputs:
/// - A settings file with a token, a URL containing `#`-free query text, and a keybind.
///
/// Output:
/// - Values applied; the file is unchanged.
fn existing_settings_are_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = settings_path_in(dir.path());
    let text = "api_token = abc123\n\
                Image-Base-URL = https://img.example.org/t/p/w300/  # cdn\n\
                grid_columns = 3\n\
                keybind_next_page = Ctrl+J\n";
    std::fs::write(&path, text).expect("write");

    let settings = load_settings(dir.path());
    assert_eq!(
        settings.api_token.as_ref().map(|t| t.expose().to_string()),
        Some("abc123".to_string())
    );
    assert_eq!(settings.image_base_url, "https://img.example.org/t/p/w300");
    assert_eq!(settings.grid_columns, 3);
    assert_eq!(settings.keymap.next_page.len(), 1);
    assert_eq!(settings.keymap.next_page[0].code, KeyCode::Char('j'));
    assert_eq!(settings.keymap.next_page[0].mods, KeyModifiers::CONTROL);
    assert_eq!(std::fs::read_to_string(&path).expect("read"), text);
}

#[test]
/// What: A missing token is a startup error that names the settings file.
fn missing_token_is_reported() {
    let settings = parse_settings("language = de-DE");
    let err = resolve_token(&settings, "/tmp/x/settings.conf", |_| None)
        .expect_err("no token anywhere");
    let ConfigError::MissingToken { settings_path } = &err;
    assert_eq!(settings_path, "/tmp/x/settings.conf");
    assert!(err.to_string().contains("CINESEA_TMDB_TOKEN"));
}
