//! Movie currently shown in the detail modal.

use super::types::Movie;

/// At most one selected movie. Independent of the fetch lifecycle.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    /// The selected movie, if any.
    movie: Option<Movie>,
}

impl Selection {
    /// Show `movie` in the detail modal.
    pub fn select(&mut self, movie: Movie) {
        tracing::debug!(id = movie.id, title = %movie.title, "movie selected");
        self.movie = Some(movie);
    }

    /// Close the detail modal. No-op when nothing is selected.
    pub fn clear(&mut self) {
        self.movie = None;
    }

    /// The selected movie, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    /// Whether the detail modal is open.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.movie.is_some()
    }
}
