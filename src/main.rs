//! cinesea binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use cinesea::args::{Args, determine_log_level, run_search};
use cinesea::sources::{ClientConfig, TmdbClient};
use cinesea::theme::{self, load_settings, resolve_token, settings_path_in};

struct CineseaTimer;

impl tracing_subscriber::fmt::time::FormatTime for CineseaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `<config_dir>/logs/cinesea.log` through a non-blocking appender so the
///   TUI never receives log output; falls back to stderr if the file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("cinesea.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CineseaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CineseaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Some(dir) = args.config_dir.as_deref() {
        theme::set_config_dir_override(PathBuf::from(dir));
    }
    init_logging(&determine_log_level(&args));

    let dir = theme::config_dir();
    let settings = load_settings(&dir);
    let token = match resolve_token(&settings, &settings_path_in(&dir).display().to_string(), |k| {
        std::env::var(k).ok()
    }) {
        Ok(t) => t,
        Err(err) => {
            tracing::error!(error = %err, "startup configuration error");
            eprintln!("cinesea: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(query) = args.search.as_deref() {
        let client = match TmdbClient::new(&ClientConfig {
            base_url: settings.api_base_url.clone(),
            token,
            language: settings.language.clone(),
            timeout: settings.request_timeout(),
        }) {
            Ok(c) => c,
            Err(err) => {
                eprintln!("cinesea: {err}");
                return ExitCode::FAILURE;
            }
        };
        let code = run_search(&client, query, args.page, args.json, &settings).await;
        return if code == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    tracing::info!("cinesea starting");
    if let Err(err) = cinesea::app::run(settings, token).await {
        tracing::error!(error = ?err, "application error");
        eprintln!("cinesea: {err}");
        return ExitCode::FAILURE;
    }
    tracing::info!("cinesea exited");
    ExitCode::SUCCESS
}
