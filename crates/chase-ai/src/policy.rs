//! Evader move selection: a single-ply scored heuristic.

use chase_core::{Board, Point, manhattan};
use rand::{Rng, RngExt};

/// Multiplier on net progress toward the escape cell.
const ESCAPE_PROGRESS_WEIGHT: i32 = 2;
/// Penalty for stepping into one of the four board corners.
const CORNER_PENALTY: i32 = -3;
/// Bonus for cells the cat cannot reach on its next move.
const SAFE_BONUS: i32 = 5;

/// Select the mouse's next move.
///
/// Escaping always wins: if the escape cell is a legal neighbour it is
/// returned immediately. The mouse never steps onto the cat's current
/// cell. Among the remaining candidates, cells the cat could reach on its
/// next move are avoided entirely when any safe cell exists; when nothing
/// is safe the mouse simply maximizes distance to the cat. Safe candidates
/// are scored on distance from the cat, net progress toward the escape,
/// and a corner penalty, with ties broken uniformly at random.
///
/// Always returns a position; with no candidates at all (impossible on a
/// board of side >= 2) the mouse stays put.
pub fn mouse_move(
    board: Board,
    mouse: Point,
    cat: Point,
    escape: Point,
    rng: &mut impl Rng,
) -> Point {
    let mut moves: Vec<Point> = board.neighbors(mouse).collect();

    if moves.contains(&escape) {
        return escape;
    }

    // The cat's cell is about to be vacated, but stepping there is still
    // never considered.
    moves.retain(|&m| m != cat);
    if moves.is_empty() {
        return mouse;
    }

    let cat_reach: Vec<Point> = board.neighbors(cat).collect();
    let safe: Vec<Point> = moves
        .iter()
        .copied()
        .filter(|m| !cat_reach.contains(m))
        .collect();

    // Cornered: every candidate is catchable, so keep the most distance
    // from the cat and skip further scoring.
    if safe.is_empty() {
        let mut flee = moves[0];
        for &m in &moves[1..] {
            if manhattan(m, cat) > manhattan(flee, cat) {
                flee = m;
            }
        }
        return flee;
    }

    let mut best_score = i32::MIN;
    let mut ties: Vec<Point> = Vec::new();
    for &m in &safe {
        let progress = manhattan(mouse, escape) - manhattan(m, escape);
        let corner = if board.is_corner(m) { CORNER_PENALTY } else { 0 };
        let score = manhattan(m, cat) + ESCAPE_PROGRESS_WEIGHT * progress + corner + SAFE_BONUS;
        if score > best_score {
            best_score = score;
            ties.clear();
            ties.push(m);
        } else if score == best_score {
            ties.push(m);
        }
    }
    ties[rng.random_range(0..ties.len())]
}
