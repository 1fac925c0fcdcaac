//! Crate-wide error types for the checkers engine.
//!
//! All variants are synchronous, recoverable-by-caller conditions: the CLI
//! re-prompts on them and the engine layer treats them as programming bugs.

use std::error::Error;
use std::fmt;

use crate::game_state::checkers_types::Square;
use crate::moves::move_description::Move;

pub type CheckersResult<T> = Result<T, CheckersError>;

/// Represents all error types that can occur in the checkers engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckersError {
    /// A square number outside `1..=32` (or a coordinate off the board).
    OutOfBounds(u8),
    /// A color or king query on an unoccupied square.
    EmptySquare(Square),
    /// An attempted `apply_move` with a move not in the current legal set.
    IllegalMove(Move),
}

impl fmt::Display for CheckersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckersError::OutOfBounds(number) => {
                write!(f, "square {number} is not on the board (expected 1..=32)")
            }
            CheckersError::EmptySquare(square) => {
                write!(f, "there is no piece at square {square}")
            }
            CheckersError::IllegalMove(mv) => write!(f, "{mv} is not a legal move"),
        }
    }
}

impl Error for CheckersError {}
