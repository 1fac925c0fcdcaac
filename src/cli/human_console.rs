//! Console input adapter for a human player.
//!
//! Prompts for a `start end` square pair and builds a capture-less `Move`
//! from it; endpoint equality against the legal set is what lets the
//! adapter stay ignorant of which square a jump would capture. Any parse
//! error, out-of-range square, or illegal move re-prompts.

use std::io::{self, BufRead, Write};

use crate::engines::engine_trait::Engine;
use crate::game_state::checkers_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;

#[derive(Debug)]
pub struct HumanConsole;

impl HumanConsole {
    pub fn new() -> Self {
        HumanConsole
    }

    fn parse_square(token: &str) -> Result<Square, String> {
        let number: u8 = token
            .parse()
            .map_err(|_| format!("'{token}' is not a square number"))?;
        Square::new(number).map_err(|e| e.to_string())
    }

    fn parse_move(line: &str) -> Result<Move, String> {
        let mut tokens = line.split_whitespace();
        let (Some(start), Some(end), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err("enter a move as two square numbers, e.g. '9 14'".to_owned());
        };
        Ok(Move::step(
            Self::parse_square(start)?,
            Self::parse_square(end)?,
        ))
    }
}

impl Default for HumanConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HumanConsole {
    fn name(&self) -> &str {
        "Human"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<Move, String> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("{} to move (start end): ", game_state.turn());
            io::stdout().flush().map_err(|e| e.to_string())?;

            let line = match lines.next() {
                Some(line) => line.map_err(|e| e.to_string())?,
                None => return Err("input closed before a move was entered".to_owned()),
            };

            match Self::parse_move(&line) {
                Ok(m) if game_state.legal_moves().contains(&m) => return Ok(m),
                Ok(m) => println!("{m} is not a legal move here"),
                Err(reason) => println!("{reason}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HumanConsole;
    use crate::game_state::checkers_types::Square;
    use crate::moves::move_description::Move;

    fn sq(number: u8) -> Square {
        Square::new(number).expect("test square is on the board")
    }

    #[test]
    fn parses_a_start_end_pair() {
        let m = HumanConsole::parse_move(" 9 14 ").expect("two square numbers parse");
        assert_eq!(m, Move::step(sq(9), sq(14)));
        assert!(m.captured().is_none());
    }

    #[test]
    fn rejects_malformed_and_out_of_range_input() {
        assert!(HumanConsole::parse_move("").is_err());
        assert!(HumanConsole::parse_move("9").is_err());
        assert!(HumanConsole::parse_move("9 14 18").is_err());
        assert!(HumanConsole::parse_move("nine 14").is_err());
        assert!(HumanConsole::parse_move("0 14").is_err());
        assert!(HumanConsole::parse_move("9 33").is_err());
    }
}
