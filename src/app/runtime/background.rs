use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::Duration;

/// Interval between UI ticks.
const TICK_INTERVAL_MS: u64 = 200;

/// What: Spawn the thread that forwards terminal events to the event loop.
///
/// Inputs:
/// - `event_tx`: Channel sender for terminal events.
/// - `cancelled`: Set by the event loop on exit.
///
/// Details:
/// - Polls with a short timeout so the thread notices cancellation promptly.
/// - Exits when the receiver is dropped.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // transient read errors
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// What: Spawn the task that drives toast expiry and the loading spinner.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events.
///
/// Details:
/// - Sends a tick every 200ms until the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
