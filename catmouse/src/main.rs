//! Catmouse — a headless terminal front end for the pursuit engine.
//!
//! All presentation lives here: the library core is display-free and is
//! driven one half-move at a time through [`Game::step`].

use std::thread;
use std::time::Duration;

use catmouse_lib::Game;
use chase_core::Point;

/// Pause between moves, for display pacing.
const MOVE_DELAY: Duration = Duration::from_millis(300);
/// Hold at game end before exiting.
const END_DELAY: Duration = Duration::from_millis(500);

fn main() {
    let mut game = Game::new();
    render(&game);

    let outcome = loop {
        let outcome = game.step();
        render(&game);
        if let Some(outcome) = outcome {
            break outcome;
        }
        thread::sleep(MOVE_DELAY);
    };

    println!("{outcome}");
    thread::sleep(END_DELAY);
}

/// Print the board: cat `C`, mouse `m`, escape cell `E`.
fn render(game: &Game) {
    let n = game.board.size();
    let mut out = String::new();
    for y in 0..n {
        for x in 0..n {
            let p = Point::new(x, y);
            let glyph = if p == game.cat {
                'C'
            } else if p == game.mouse {
                'm'
            } else if p == game.escape {
                'E'
            } else {
                '.'
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    println!("{out}");
}
