//! Palette, settings, and configuration paths for cinesea.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Settings skeleton and credential resolution.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading and parsing.
mod settings;
/// Built-in palette.
mod store;
/// Theme and settings type definitions.
mod types;

pub use config::{ConfigError, SETTINGS_SKELETON_CONTENT, TOKEN_ENV_VARS, resolve_token};
pub use paths::{config_dir, logs_dir, set_config_dir_override, settings_path_in};
pub use settings::{load_settings, parse_settings};
pub use store::theme;
pub use types::{ApiToken, KeyChord, KeyMap, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
