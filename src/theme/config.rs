//! Settings skeleton and startup credential resolution.

use thiserror::Error;

use super::types::{ApiToken, Settings};

/// Environment variables checked for the API token, highest priority first.
pub const TOKEN_ENV_VARS: [&str; 2] = ["CINESEA_TMDB_TOKEN", "TMDB_TOKEN"];

/// Default `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# cinesea settings
#
# Lines are `key = value`. Anything after ` #` or ` //` is a comment.
# Uncomment a line to override the default shown.

# --- Credentials ---
# Bearer token for the movie API. The CINESEA_TMDB_TOKEN or TMDB_TOKEN
# environment variables take precedence over this value.
# api_token = <your token>

# --- Endpoint ---
# api_base_url = https://api.themoviedb.org/3/search/movie
# image_base_url = https://image.tmdb.org/t/p/w500
# placeholder_image = https://via.placeholder.com/500x750?text=No+Image
# language = en-US
# request_timeout_secs = 15

# --- Interface ---
# grid_columns = 4
# toast_seconds = 4
# recent_capacity = 10

# --- Keybinds (single chord per action) ---
# keybind_exit = Ctrl+C
# keybind_help = F1
# keybind_next_page = PgDn
# keybind_prev_page = PgUp
# keybind_focus_search = /
# keybind_pane_next = Tab
# keybind_recent = Ctrl+R
";

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No token in the environment or `settings.conf`.
    #[error(
        "no API token configured: set CINESEA_TMDB_TOKEN or TMDB_TOKEN, or api_token in {settings_path}"
    )]
    MissingToken {
        /// Settings file the user can edit.
        settings_path: String,
    },
}

/// What: Resolve the bearer token from the environment or settings.
///
/// Inputs:
/// - `settings`: Parsed settings (may carry `api_token`).
/// - `settings_path`: Shown in the error so the user knows where to put the token.
/// - `env_lookup`: Environment accessor (injected for tests).
///
/// Output:
/// - Token, or `ConfigError::MissingToken` when every source is blank.
pub fn resolve_token<F>(
    settings: &Settings,
    settings_path: &str,
    env_lookup: F,
) -> Result<ApiToken, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for var in TOKEN_ENV_VARS {
        if let Some(raw) = env_lookup(var) {
            let token = ApiToken::new(&raw);
            if !token.is_blank() {
                tracing::debug!(source = var, "api token taken from environment");
                return Ok(token);
            }
        }
    }
    if let Some(token) = settings.api_token.as_ref().filter(|t| !t.is_blank()) {
        tracing::debug!("api token taken from settings.conf");
        return Ok(token.clone());
    }
    Err(ConfigError::MissingToken {
        settings_path: settings_path.to_string(),
    })
}
