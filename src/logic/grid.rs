//! Cursor movement over the card grid.

/// Direction of a cursor move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMove {
    /// One card left, stopping at the row start.
    Left,
    /// One card right, stopping at the last card.
    Right,
    /// One row up.
    Up,
    /// One row down, clamped to the last card.
    Down,
    /// First card.
    First,
    /// Last card.
    Last,
}

/// What: Move the grid cursor.
///
/// Inputs:
/// - `cursor`: Current index.
/// - `len`: Number of cards on the page.
/// - `columns`: Cards per row (treated as at least 1).
/// - `mv`: Direction.
///
/// Output:
/// - New index within `0..len` (0 for an empty grid).
#[must_use]
pub fn move_cursor(cursor: usize, len: usize, columns: usize, mv: GridMove) -> usize {
    if len == 0 {
        return 0;
    }
    let cols = columns.max(1);
    let last = len - 1;
    let cursor = cursor.min(last);
    match mv {
        GridMove::Left => {
            if cursor % cols == 0 {
                cursor
            } else {
                cursor - 1
            }
        }
        GridMove::Right => {
            if cursor % cols == cols - 1 {
                cursor
            } else {
                (cursor + 1).min(last)
            }
        }
        GridMove::Up => cursor.checked_sub(cols).unwrap_or(cursor),
        GridMove::Down => {
            let next = cursor + cols;
            if next <= last {
                next
            } else if cursor / cols < last / cols {
                last
            } else {
                cursor
            }
        }
        GridMove::First => 0,
        GridMove::Last => last,
    }
}

/// Clamp a cursor after the page contents changed.
#[must_use]
pub const fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if cursor >= len {
        len - 1
    } else {
        cursor
    }
}
