//! Engine abstraction layer.
//!
//! Every move-selection strategy sits behind one trait so drivers, the
//! match harness, and tests can swap engines at runtime. Engines promise
//! that any `Ok` move is a member of the state's current legal set; asking
//! an engine for a move in a terminal state is a caller error and reported
//! as `Err`.

use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;

pub trait Engine: Send + std::fmt::Debug {
    /// Human-readable engine name for logs and reports.
    fn name(&self) -> &str;

    /// Choose a member of `game_state.legal_moves()`.
    fn choose_move(&mut self, game_state: &GameState) -> Result<Move, String>;
}

/// The legal set in a stable order. Hash-set iteration order varies run to
/// run; sorting by endpoints first makes seeded engines reproducible.
pub fn sorted_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves: Vec<Move> = game_state.legal_moves().iter().copied().collect();
    moves.sort();
    moves
}

#[cfg(test)]
mod tests {
    use super::sorted_legal_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn sorted_legal_moves_is_stable_and_complete() {
        let state = GameState::new_game();
        let first = sorted_legal_moves(&state);
        let second = sorted_legal_moves(&state);
        assert_eq!(first, second);
        assert_eq!(first.len(), state.legal_moves().len());
        assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
