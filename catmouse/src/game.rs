//! Core game state and turn controller.

use std::fmt;

use chase_ai::{cat_move, mouse_move};
use chase_core::{Board, Point, manhattan};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::rules;

/// Side length of the board.
pub const BOARD_SIZE: i32 = 8;
/// Depth of the cat's alpha-beta search.
pub const SEARCH_DEPTH: u32 = 3;
/// Completed mouse moves needed for a survival win.
pub const SURVIVE_LIMIT: u32 = 20;
/// Minimum cat/mouse distance at setup.
pub const MIN_START_SEPARATION: i32 = 4;
/// Minimum escape/mouse distance at setup.
pub const MIN_ESCAPE_SEPARATION: i32 = 5;

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The cat reached the mouse's cell.
    CatWins,
    /// The mouse reached the escape cell.
    MouseEscaped,
    /// The mouse survived for [`SURVIVE_LIMIT`] moves.
    MouseSurvived,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::CatWins => write!(f, "Cat caught the mouse! Game over."),
            Outcome::MouseEscaped => write!(f, "Mouse reached the escape square! Mouse wins!"),
            Outcome::MouseSurvived => {
                write!(f, "Mouse survived for {SURVIVE_LIMIT} moves! Mouse wins!")
            }
        }
    }
}

/// Core game state (separate from any presentation).
///
/// Invariants: both agents are always on the board, and the escape cell is
/// always on the board edge.
pub struct Game {
    pub board: Board,
    pub cat: Point,
    pub mouse: Point,
    pub escape: Point,
    /// Completed mouse moves.
    pub moves: u32,
    /// Half-move index: even = cat to move, odd = mouse to move.
    pub turn: u32,
    rng: SmallRng,
}

impl Game {
    /// Start a game with OS-seeded randomness.
    pub fn new() -> Self {
        Self::with_rng(rand::make_rng::<SmallRng>())
    }

    /// Start a game from a fixed seed, for deterministic replay.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: SmallRng) -> Self {
        let board = Board::new(BOARD_SIZE);
        let (cat, mouse) = place_agents(board, &mut rng);
        let escape = place_escape(board, mouse, MIN_ESCAPE_SEPARATION, &mut rng);
        Self {
            board,
            cat,
            mouse,
            escape,
            moves: 0,
            turn: 0,
            rng,
        }
    }

    /// Whether the next [`step`](Self::step) moves the cat.
    #[inline]
    pub fn cat_to_move(&self) -> bool {
        self.turn % 2 == 0
    }

    /// Advance one half-move and report the outcome, if the game ended.
    ///
    /// Presentation layers call this once per turn and may stop between
    /// calls (e.g. on a window-close signal).
    pub fn step(&mut self) -> Option<Outcome> {
        let outcome = if self.cat_to_move() {
            if let Some(mv) = cat_move(
                self.board,
                self.cat,
                self.mouse,
                self.escape,
                SEARCH_DEPTH,
                &mut self.rng,
            ) {
                self.cat = mv;
            }
            debug!("turn {}: cat -> {}", self.turn, self.cat);
            rules::captured(self.cat, self.mouse).then_some(Outcome::CatWins)
        } else {
            self.mouse = mouse_move(self.board, self.mouse, self.cat, self.escape, &mut self.rng);
            debug!("turn {}: mouse -> {}", self.turn, self.mouse);
            if rules::captured(self.cat, self.mouse) {
                Some(Outcome::CatWins)
            } else if rules::escaped(self.mouse, self.escape) {
                Some(Outcome::MouseEscaped)
            } else {
                self.moves += 1;
                rules::survived(self.moves, SURVIVE_LIMIT).then_some(Outcome::MouseSurvived)
            }
        };
        self.turn += 1;
        if let Some(outcome) = outcome {
            info!("game over after {} mouse moves: {}", self.moves, outcome);
        }
        outcome
    }

    /// Run the game to completion.
    pub fn play(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Place cat and mouse uniformly at random, at least
/// [`MIN_START_SEPARATION`] apart.
fn place_agents(board: Board, rng: &mut impl Rng) -> (Point, Point) {
    loop {
        let cat = random_cell(board, rng);
        let mouse = random_cell(board, rng);
        if manhattan(cat, mouse) >= MIN_START_SEPARATION {
            return (cat, mouse);
        }
    }
}

/// Place the escape on a random edge cell at least `min_distance` from the
/// mouse. When no edge cell qualifies, fall back to the single farthest
/// edge cell (first seen in the board's fixed edge order on ties).
fn place_escape(board: Board, mouse: Point, min_distance: i32, rng: &mut impl Rng) -> Point {
    let far: Vec<Point> = board
        .edge_cells()
        .filter(|&p| manhattan(p, mouse) >= min_distance)
        .collect();
    if !far.is_empty() {
        return far[rng.random_range(0..far.len())];
    }

    let mut best = mouse;
    let mut best_dist = -1;
    for p in board.edge_cells() {
        let d = manhattan(p, mouse);
        if d > best_dist {
            best_dist = d;
            best = p;
        }
    }
    best
}

fn random_cell(board: Board, rng: &mut impl Rng) -> Point {
    Point::new(
        rng.random_range(0..board.size()),
        rng.random_range(0..board.size()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_respects_separation_constraints() {
        for seed in 0..100u64 {
            let g = Game::from_seed(seed);
            assert!(g.board.contains(g.cat));
            assert!(g.board.contains(g.mouse));
            assert!(g.board.is_edge(g.escape));
            assert!(manhattan(g.cat, g.mouse) >= MIN_START_SEPARATION);
            assert!(manhattan(g.escape, g.mouse) >= MIN_ESCAPE_SEPARATION);
            assert_eq!(g.moves, 0);
            assert_eq!(g.turn, 0);
        }
    }

    #[test]
    fn escape_fallback_is_the_farthest_edge_cell() {
        // On a 4x4 board no edge cell is 5 away from a near-center mouse,
        // so placement must fall back deterministically.
        let board = Board::new(4);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            place_escape(board, Point::new(1, 1), 5, &mut rng),
            Point::new(3, 3)
        );
        assert_eq!(
            place_escape(board, Point::new(2, 2), 5, &mut rng),
            Point::new(0, 0)
        );
    }

    #[test]
    fn games_end_consistently() {
        for seed in 0..150u64 {
            let mut g = Game::from_seed(seed);
            let mut steps = 0;
            let outcome = loop {
                if let Some(o) = g.step() {
                    break o;
                }
                steps += 1;
                assert!(g.moves < SURVIVE_LIMIT);
                assert!(g.board.contains(g.cat));
                assert!(g.board.contains(g.mouse));
                assert!(steps <= 2 * SURVIVE_LIMIT + 1, "game failed to terminate");
            };
            match outcome {
                Outcome::CatWins => assert_eq!(g.cat, g.mouse),
                Outcome::MouseEscaped => assert_eq!(g.mouse, g.escape),
                Outcome::MouseSurvived => assert_eq!(g.moves, SURVIVE_LIMIT),
            }
            assert!(g.moves <= SURVIVE_LIMIT);
        }
    }

    /// A mid-game state where the mouse's next move can neither capture
    /// nor escape, so only the survival counter can end the game.
    fn quiet_state(moves: u32) -> Game {
        Game {
            board: Board::new(BOARD_SIZE),
            cat: Point::new(0, 1),
            mouse: Point::new(4, 4),
            escape: Point::new(0, 0),
            moves,
            turn: 1, // mouse to move
            rng: SmallRng::seed_from_u64(9),
        }
    }

    #[test]
    fn survival_fires_exactly_at_the_limit() {
        let mut g = quiet_state(SURVIVE_LIMIT - 2);
        assert_eq!(g.step(), None);
        assert_eq!(g.moves, SURVIVE_LIMIT - 1);

        let mut g = quiet_state(SURVIVE_LIMIT - 1);
        assert_eq!(g.step(), Some(Outcome::MouseSurvived));
        assert_eq!(g.moves, SURVIVE_LIMIT);
    }

    #[test]
    fn deterministic_replay_under_seed() {
        for seed in [7u64, 42, 1234, 0xDEAD] {
            let mut a = Game::from_seed(seed);
            let mut b = Game::from_seed(seed);
            assert_eq!(a.cat, b.cat);
            assert_eq!(a.mouse, b.mouse);
            assert_eq!(a.escape, b.escape);
            let oa = a.play();
            let ob = b.play();
            assert_eq!(oa, ob);
            assert_eq!(a.cat, b.cat);
            assert_eq!(a.mouse, b.mouse);
            assert_eq!(a.moves, b.moves);
            assert_eq!(a.turn, b.turn);
        }
    }
}
