//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the console driver, tests, and
//! diagnostics. Each rank is prefixed with the number of its first playable
//! square so a human can find the coordinates to type.

use crate::game_state::checkers_rules::{BOARD_WIDTH, SQUARES_PER_RANK};
use crate::game_state::checkers_types::{Color, Piece, Square};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in 0..BOARD_WIDTH as i32 {
        let first_number = rank as usize * SQUARES_PER_RANK + 1;
        out.push_str(&format!("{first_number:>2} "));

        for file in 0..BOARD_WIDTH as i32 {
            match Square::from_coords(file, rank) {
                Some(square) => match game_state.piece_at(square) {
                    Some(piece) => out.push(piece_to_unicode(piece)),
                    None => out.push('·'),
                },
                // Light squares are never playable.
                None => out.push(' '),
            }
            if file < BOARD_WIDTH as i32 - 1 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str(&format!("{} to move", game_state.turn()));
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.king) {
        (Color::Black, false) => '⛂',
        (Color::Black, true) => '⛃',
        (Color::Red, false) => '⛀',
        (Color::Red, true) => '⛁',
    }
}
