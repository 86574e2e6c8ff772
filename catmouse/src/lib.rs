//! Catmouse — a cat-and-mouse pursuit game built on chase-rs.
//!
//! The cat hunts the mouse on an 8×8 board with bounded-depth alpha-beta
//! search; the mouse runs for a marked escape cell on the board edge with a
//! scored one-ply heuristic. The mouse wins by reaching the escape cell or
//! by surviving 20 moves; the cat wins by catching the mouse first.
//!
//! [`Game`] holds the whole state and exposes [`Game::step`], one half-move
//! per call, so any presentation layer can drive it and stop between turns.

pub mod game;
pub mod rules;

pub use game::{
    BOARD_SIZE, Game, MIN_ESCAPE_SEPARATION, MIN_START_SEPARATION, Outcome, SEARCH_DEPTH,
    SURVIVE_LIMIT,
};
