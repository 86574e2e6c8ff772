//! **chase-core** — Grid geometry for turn-based pursuit games.
//!
//! This crate provides the foundational types used across the *chase*
//! ecosystem: an integer [`Point`], a square [`Board`] with bounds and
//! neighbor queries, and the Manhattan distance metric.

pub mod board;
pub mod distance;
pub mod geom;

pub use board::Board;
pub use distance::manhattan;
pub use geom::Point;
