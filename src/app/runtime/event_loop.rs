use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::handle_search_response;
use super::tick_handler::handle_tick;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for and processes a single message from any channel
/// - Returns `true` when the event handler indicates exit
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, &channels.search_tx)
        }
        Some(response) = channels.response_rx.recv() => {
            handle_search_response(app, response);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering a frame before each message.
///
/// Inputs:
/// - `terminal`: Terminal to render into
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Details:
/// - Exits when the event handler requests it or every channel has closed
pub async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Err(err) = terminal.draw(|f| ui(f, app)) {
            tracing::warn!(error = %err, "failed to draw frame");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
