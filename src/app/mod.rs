//! Terminal application: terminal setup, channels, background workers, and
//! the main event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
pub use runtime::workers::search::spawn_search_worker;
