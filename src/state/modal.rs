//! Overlay dialogs that sit above the grid.

/// Overlays other than the movie detail modal, which is driven by
/// [`crate::state::Selection`] instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Keybinding reference.
    Help,
}
