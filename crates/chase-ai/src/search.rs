//! Pursuer move selection: bounded-depth alpha-beta search.

use chase_core::{Board, Point, manhattan};
use rand::{Rng, RngExt};

/// Score returned when the cat can take the mouse this move.
pub const CAPTURE_SCORE: i32 = 1000;

/// Leaf weight on closing distance to the mouse.
const MOUSE_WEIGHT: i32 = 15;
/// Leaf weight on covering the escape cell.
const ESCAPE_WEIGHT: i32 = 8;

/// Static evaluation of a cat position. Closing in on the mouse counts
/// for more than sitting on the escape route.
fn evaluate(cat: Point, mouse: Point, escape: Point) -> i32 {
    -MOUSE_WEIGHT * manhattan(cat, mouse) - ESCAPE_WEIGHT * manhattan(cat, escape)
}

/// Select the cat's next move at the given search depth.
///
/// Equivalent to [`search`] with open alpha/beta bounds and a maximizing
/// root. Returns `None` only when the cat has no legal neighbour, in which
/// case the caller keeps the current position.
pub fn cat_move(
    board: Board,
    cat: Point,
    mouse: Point,
    escape: Point,
    depth: u32,
    rng: &mut impl Rng,
) -> Option<Point> {
    search(board, cat, mouse, escape, depth, i32::MIN, i32::MAX, true, rng).0
}

/// Bounded-depth alpha-beta search over the cat's king moves.
///
/// Returns the chosen move and the node's evaluation. On a maximizing ply
/// the cat picks its own move; the minimizing ply models a worst-case
/// counter-move over the same move set, not the actual mouse policy.
///
/// Moves tying the best value are collected in full and one is chosen
/// uniformly at random, so enumeration order never biases play. A leaf
/// (depth exhausted, or the cat already on the mouse) returns `(None,
/// score)` and the caller keeps its position.
#[allow(clippy::too_many_arguments)]
pub fn search(
    board: Board,
    cat: Point,
    mouse: Point,
    escape: Point,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    rng: &mut impl Rng,
) -> (Option<Point>, i32) {
    // A one-move capture is taken before any recursion, whatever the
    // depth or the heuristic would say.
    if board.neighbors(cat).any(|n| n == mouse) {
        return (Some(mouse), CAPTURE_SCORE);
    }

    if depth == 0 || cat == mouse {
        return (None, evaluate(cat, mouse, escape));
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    let mut ties: Vec<Point> = Vec::new();

    for mv in board.neighbors(cat) {
        let (_, value) = search(
            board,
            mv,
            mouse,
            escape,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            rng,
        );
        if maximizing {
            if value > best {
                best = value;
                ties.clear();
                ties.push(mv);
            } else if value == best {
                ties.push(mv);
            }
            alpha = alpha.max(value);
        } else {
            if value < best {
                best = value;
                ties.clear();
                ties.push(mv);
            } else if value == best {
                ties.push(mv);
            }
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }

    if ties.is_empty() {
        // No legal neighbour: structurally unreachable on a board of side
        // >= 2, but the contract is "stay in place", not a panic.
        return (None, evaluate(cat, mouse, escape));
    }
    (Some(ties[rng.random_range(0..ties.len())]), best)
}
