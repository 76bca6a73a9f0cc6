use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{SearchKey, SearchResponse};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the main event loop,
///   the terminal event thread, the tick task, and the search worker.
/// - The request receiver is moved into the search worker via
///   [`Channels::take_search_rx`].
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub search_tx: mpsc::UnboundedSender<SearchKey>,
    search_rx: Option<mpsc::UnboundedReceiver<SearchKey>>,
    pub response_tx: mpsc::UnboundedSender<SearchResponse>,
    pub response_rx: mpsc::UnboundedReceiver<SearchResponse>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

impl Channels {
    /// What: Create all runtime channels.
    ///
    /// Output:
    /// - A fresh set of unbounded channels and an unset cancellation flag.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (search_tx, search_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            search_tx,
            search_rx: Some(search_rx),
            response_tx,
            response_rx,
            tick_tx,
            tick_rx,
        }
    }

    /// Hand the request receiver to the search worker; `None` after the first call.
    pub const fn take_search_rx(&mut self) -> Option<mpsc::UnboundedReceiver<SearchKey>> {
        self.search_rx.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The request receiver can only be taken once.
    fn search_rx_taken_once() {
        let mut channels = Channels::new();
        assert!(channels.take_search_rx().is_some());
        assert!(channels.take_search_rx().is_none());
    }
}
