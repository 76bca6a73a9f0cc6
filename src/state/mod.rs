//! Core application state types for cinesea's TUI.
//!
//! This module defines the value types exchanged with the search worker, the
//! committed search session, the fetch coordinator that decides when a
//! request is issued and which response may become visible, the detail
//! selection, and the central [`AppState`] container mutated by the event and
//! UI layers.

pub mod app_state;
pub mod fetch;
pub mod modal;
pub mod selection;
pub mod session;
pub mod types;

pub use app_state::AppState;
pub use fetch::{FetchCoordinator, Resolution};
pub use modal::Modal;
pub use selection::Selection;
pub use session::SearchSession;
pub use types::{FetchPhase, Focus, Movie, Notice, ResultPage, SearchKey, SearchResponse};
