//! **chase-ai** — Decision engine for grid pursuit games.
//!
//! Two independent, stateless components:
//!
//! - [`search`]/[`cat_move`]: bounded-depth alpha-beta search selecting the
//!   pursuer's move.
//! - [`mouse_move`]: single-ply heuristic selecting the evader's move.
//!
//! Both are pure functions of their explicit inputs plus an injected
//! [`rand::Rng`], which supplies tie-break randomness. Seed the generator
//! for deterministic replay.

mod policy;
mod search;

pub use policy::mouse_move;
pub use search::{CAPTURE_SCORE, cat_move, search};
