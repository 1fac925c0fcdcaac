//! Uniform random move selection.
//!
//! The weakest engine; used for diagnostics, as a baseline opponent in the
//! match harness, and to generate varied positions in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{sorted_legal_moves, Engine};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;

#[derive(Debug)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible tests and seeded series.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<Move, String> {
        let legal_moves = sorted_legal_moves(game_state);
        legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| "no legal moves to choose from".to_owned())
    }
}
