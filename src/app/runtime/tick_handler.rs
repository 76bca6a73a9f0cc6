use std::time::Instant;

use crate::state::{AppState, FetchPhase};
use crate::ui::SPINNER_FRAMES;

/// What: Handle a periodic tick.
///
/// Inputs:
/// - `app`: Application state.
///
/// Details:
/// - Clears the toast once its deadline has passed.
/// - Advances the spinner while a request is in flight.
pub fn handle_tick(app: &mut AppState) {
    if let Some(deadline) = app.toast_expires_at
        && Instant::now() >= deadline
    {
        app.toast_message = None;
        app.toast_expires_at = None;
    }
    if app.fetch.phase() == FetchPhase::Loading {
        app.spinner_frame = (app.spinner_frame + 1) % SPINNER_FRAMES.len();
    } else {
        app.spinner_frame = 0;
    }
}
