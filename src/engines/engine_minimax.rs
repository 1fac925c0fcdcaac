//! Fixed-depth minimax move selection.
//!
//! The game tree is walked by pure recursive functions that never hold more
//! than the current depth-first path: each child is a fresh clone of its
//! parent with one move applied. Black maximizes and Red minimizes the
//! shared scoring convention, so a node's fold direction follows the side
//! to move at that node (a mid-chain node repeats the same side and simply
//! folds the same way again). The root samples uniformly among the moves
//! achieving the root value; ties are real and frequent at shallow depths.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{sorted_legal_moves, Engine};
use crate::game_state::checkers_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

#[derive(Debug)]
pub struct MinimaxEngine {
    max_depth: u8,
    scorer: Box<dyn BoardScorer>,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            scorer: Box::new(MaterialScorer),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic tie-breaking for reproducible tests and series.
    pub fn with_seed(max_depth: u8, seed: u64) -> Self {
        Self {
            max_depth,
            scorer: Box::new(MaterialScorer),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_scorer(max_depth: u8, scorer: Box<dyn BoardScorer>) -> Self {
        Self {
            max_depth,
            scorer,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<Move, String> {
        let (_, optimal) = minimax_root(game_state, self.max_depth, self.scorer.as_ref())?;
        optimal
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| "root analysis produced no optimal move".to_owned())
    }
}

/// Value of `game_state` looking `depth` plies ahead.
pub fn minimax_value(
    game_state: &GameState,
    depth: u8,
    scorer: &dyn BoardScorer,
) -> Result<i32, String> {
    if depth == 0 || game_state.is_terminal() {
        return Ok(scorer.score(game_state));
    }

    let maximizing = game_state.turn() == Color::Black;
    let mut value = if maximizing { i32::MIN } else { i32::MAX };

    for m in sorted_legal_moves(game_state) {
        let child = game_state.child(m).map_err(|e| e.to_string())?;
        let child_value = minimax_value(&child, depth - 1, scorer)?;
        value = if maximizing {
            value.max(child_value)
        } else {
            value.min(child_value)
        };
    }

    Ok(value)
}

/// Root analysis: the root value and the sorted list of root moves that
/// achieve it. Exposed so search-equivalence properties are directly
/// testable.
pub fn minimax_root(
    game_state: &GameState,
    max_depth: u8,
    scorer: &dyn BoardScorer,
) -> Result<(i32, Vec<Move>), String> {
    let moves = sorted_legal_moves(game_state);
    if moves.is_empty() {
        return Err("no legal moves to choose from".to_owned());
    }

    let maximizing = game_state.turn() == Color::Black;
    let child_depth = max_depth.saturating_sub(1);

    let mut evaluated = Vec::with_capacity(moves.len());
    for m in moves {
        let child = game_state.child(m).map_err(|e| e.to_string())?;
        let value = minimax_value(&child, child_depth, scorer)?;
        evaluated.push((m, value));
    }

    let best = if maximizing {
        evaluated.iter().map(|&(_, v)| v).max()
    } else {
        evaluated.iter().map(|&(_, v)| v).min()
    }
    .ok_or_else(|| "root analysis produced no value".to_owned())?;

    let optimal = evaluated
        .into_iter()
        .filter(|&(_, v)| v == best)
        .map(|(m, _)| m)
        .collect();

    Ok((best, optimal))
}
