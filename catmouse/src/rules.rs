//! Terminal conditions: capture, escape, survival.
//!
//! Pure predicates; the turn controller evaluates them after every
//! half-move and ends the game on the first that fires.

use chase_core::Point;

/// Whether the cat occupies the mouse's cell.
#[inline]
pub fn captured(cat: Point, mouse: Point) -> bool {
    cat == mouse
}

/// Whether the mouse reached the escape cell.
#[inline]
pub fn escaped(mouse: Point, escape: Point) -> bool {
    mouse == escape
}

/// Whether the mouse has completed at least `limit` moves.
#[inline]
pub fn survived(moves: u32, limit: u32) -> bool {
    moves >= limit
}
