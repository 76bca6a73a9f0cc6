//! Central `AppState` container.

use lru::LruCache;
use std::{num::NonZeroUsize, time::Instant};

use super::fetch::FetchCoordinator;
use super::modal::Modal;
use super::selection::Selection;
use super::session::SearchSession;
use super::types::{Focus, Movie};
use crate::theme::{KeyMap, Settings};

/// Default number of committed queries remembered in memory.
pub const RECENT_CAPACITY: usize = 10;

/// Global application state shared by the event, runtime, and UI layers.
///
/// Mutated only from the event loop; background workers talk to it through
/// channels.
#[derive(Debug)]
pub struct AppState {
    /// Live keystroke buffer of the search input (not the committed query).
    pub input: String,
    /// Committed query and page.
    pub session: SearchSession,
    /// Request lifecycle for the committed key.
    pub fetch: FetchCoordinator,
    /// Movie shown in the detail modal.
    pub selection: Selection,
    /// Which pane receives keyboard input.
    pub focus: Focus,
    /// Highlighted card index within the current page.
    pub grid_cursor: usize,
    /// Active overlay other than the detail modal.
    pub modal: Modal,
    /// Transient notice text.
    pub toast_message: Option<String>,
    /// When the toast disappears.
    pub toast_expires_at: Option<Instant>,
    /// Committed queries, most recent first (keyed case-insensitively).
    pub recent: LruCache<String, String>,
    /// Position while cycling the input through `recent`.
    pub recent_cursor: Option<usize>,
    /// Loaded settings (keymap, layout, image URLs).
    pub settings: Settings,
    /// Loading spinner frame, advanced on tick.
    pub spinner_frame: usize,

    // Clickable rectangles recorded by the renderer, as (x, y, w, h).
    /// Card rectangles paired with the item index they show.
    pub card_rects: Vec<((u16, u16, u16, u16), usize)>,
    /// Pagination chips paired with the page they jump to.
    pub pagination_rects: Vec<((u16, u16, u16, u16), u32)>,
    /// Detail modal surface.
    pub details_rect: Option<(u16, u16, u16, u16)>,
    /// `[x]` close control of the detail modal.
    pub details_close_rect: Option<(u16, u16, u16, u16)>,
    /// Search input area.
    pub search_rect: Option<(u16, u16, u16, u16)>,
    /// Help overlay surface.
    pub help_rect: Option<(u16, u16, u16, u16)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    /// What: Build the initial state from loaded settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed `settings.conf` values.
    ///
    /// Output:
    /// - Fresh state: empty input, idle coordinator, nothing selected.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let cap = NonZeroUsize::new(settings.recent_capacity)
            .or_else(|| NonZeroUsize::new(RECENT_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            input: String::new(),
            session: SearchSession::new(),
            fetch: FetchCoordinator::new(),
            selection: Selection::default(),
            focus: Focus::Search,
            grid_cursor: 0,
            modal: Modal::None,
            toast_message: None,
            toast_expires_at: None,
            recent: LruCache::new(cap),
            recent_cursor: None,
            settings,
            spinner_frame: 0,
            card_rects: Vec::new(),
            pagination_rects: Vec::new(),
            details_rect: None,
            details_close_rect: None,
            search_rect: None,
            help_rect: None,
        }
    }

    /// Keybindings in effect.
    #[must_use]
    pub const fn keymap(&self) -> &KeyMap {
        &self.settings.keymap
    }

    /// Movies on the page currently rendered (retained page while loading).
    #[must_use]
    pub fn visible_movies(&self) -> &[Movie] {
        self.fetch.last_result().map_or(&[], |p| p.items.as_slice())
    }

    /// Movie under the grid cursor.
    #[must_use]
    pub fn movie_at_cursor(&self) -> Option<&Movie> {
        self.visible_movies().get(self.grid_cursor)
    }

    /// What: Show a transient toast.
    ///
    /// Inputs:
    /// - `message`: Text to display.
    ///
    /// Details:
    /// - Expires after `settings.toast_seconds`; cleared by the tick handler.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + self.settings.toast_duration());
    }

    /// Remember a committed query in the recent list.
    pub fn remember_query(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.recent.put(query.to_lowercase(), query.to_string());
        self.recent_cursor = None;
    }

    /// Recent queries, most recent first.
    #[must_use]
    pub fn recent_queries(&self) -> Vec<String> {
        self.recent.iter().map(|(_, v)| v.clone()).collect()
    }
}
