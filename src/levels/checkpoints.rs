//! Levels domain: checkpoint cursor arithmetic.
//!
//! The cursor indexes the level's ordered checkpoint list; None means no
//! checkpoint has been activated yet. Both moves wrap, and both are safe
//! no-ops when the level has no checkpoints.

/// Move the cursor forward, wrapping past the last checkpoint to 0.
pub fn advance_cursor(cursor: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return cursor;
    }
    Some(match cursor {
        None => 0,
        Some(index) if index + 1 >= count => 0,
        Some(index) => index + 1,
    })
}

/// Move the cursor backward, wrapping below 0 to the last checkpoint.
pub fn reverse_cursor(cursor: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return cursor;
    }
    Some(match cursor {
        None | Some(0) => count - 1,
        Some(index) => index - 1,
    })
}
