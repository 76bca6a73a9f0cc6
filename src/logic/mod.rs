//! Intent handling that combines session, coordinator, and presentation state.

pub mod grid;
pub mod pagination;
pub mod query;

pub use grid::{GridMove, clamp_cursor, move_cursor};
pub use pagination::{PageItem, clamp_page, page_items};
pub use query::{change_page, cycle_recent, next_page, prev_page, submit_search, sync_fetch};
