use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::sync_fetch;
use crate::sources::{ClientConfig, TmdbClient};
use crate::state::AppState;
use crate::theme::{ApiToken, Settings};

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
mod handlers;
mod tick_handler;
pub mod workers;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use event_loop::run_event_loop;
use workers::search::spawn_search_worker;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the cinesea TUI end-to-end: build the search client, set up the
/// terminal, spawn background workers, drive the event loop, and restore the
/// terminal on exit.
///
/// Inputs:
/// - `settings`: Parsed settings (endpoints, layout, keymap).
/// - `token`: Resolved API bearer token.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on client construction or terminal errors.
///
/// Details:
/// - The client is built before the terminal switches to raw mode so configuration
///   errors print normally.
/// - The terminal is restored even when the event loop ends because every channel closed.
pub async fn run(settings: Settings, token: ApiToken) -> Result<()> {
    let client = TmdbClient::new(&ClientConfig {
        base_url: settings.api_base_url.clone(),
        token,
        language: settings.language.clone(),
        timeout: settings.request_timeout(),
    })?;

    let mut app = AppState::new(settings);
    let mut channels = Channels::new();

    if let Some(search_rx) = channels.take_search_rx() {
        spawn_search_worker(Arc::new(client), search_rx, channels.response_tx.clone());
    }
    spawn_tick_worker(channels.tick_tx.clone());

    setup_terminal()?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(t) => t,
        Err(err) => {
            restore_terminal()?;
            return Err(err.into());
        }
    };
    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    tracing::info!("cinesea started");

    // Startup key is disabled (empty query); this settles the coordinator in Idle.
    sync_fetch(&mut app, &channels.search_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    tracing::debug!("main loop exited");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    restore_terminal()?;
    Ok(())
}
