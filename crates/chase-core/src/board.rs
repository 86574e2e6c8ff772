//! A square game board with bounds and neighbor queries.

use crate::geom::Point;

/// A square grid of cells `[0, size)²`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: i32,
}

impl Board {
    /// Create a board with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`: a 1-cell board has no legal moves.
    pub fn new(size: i32) -> Self {
        assert!(size >= 2, "board side must be at least 2, got {size}");
        Self { size }
    }

    /// Side length of the board.
    #[inline]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Whether the point lies on the board.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size && p.y >= 0 && p.y < self.size
    }

    /// Whether the point lies on the outer rim of the board.
    #[inline]
    pub fn is_edge(self, p: Point) -> bool {
        self.contains(p)
            && (p.x == 0 || p.y == 0 || p.x == self.size - 1 || p.y == self.size - 1)
    }

    /// Whether the point is one of the four corner cells.
    #[inline]
    pub fn is_corner(self, p: Point) -> bool {
        (p.x == 0 || p.x == self.size - 1) && (p.y == 0 || p.y == self.size - 1)
    }

    /// The legal king-move neighbours of `p`: up to 8 cells, board-clipped.
    pub fn neighbors(self, p: Point) -> impl Iterator<Item = Point> {
        p.neighbors_8().into_iter().filter(move |&n| self.contains(n))
    }

    /// Every edge cell, in row-major order. The order is fixed so that
    /// deterministic fallbacks (farthest-cell selection) are reproducible.
    pub fn edge_cells(self) -> impl Iterator<Item = Point> {
        let n = self.size;
        (0..n)
            .flat_map(move |y| (0..n).map(move |x| Point::new(x, y)))
            .filter(move |&p| self.is_edge(p))
    }
}
