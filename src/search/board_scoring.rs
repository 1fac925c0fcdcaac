//! Pluggable board evaluation for the search engines.
//!
//! Search stays modular by delegating static position scoring to a trait,
//! so alternate heuristics can be swapped without altering search code. All
//! scorers share one sign convention (positive favors Black) and one
//! terminal sentinel, which minimax/alpha-beta equivalence depends on.

use crate::game_state::checkers_rules::{promotion_rank, BOARD_WIDTH};
use crate::game_state::checkers_types::{Color, Square};
use crate::game_state::game_state::GameState;

pub use crate::game_state::game_state::WIN_SCORE;

pub trait BoardScorer: Send + Sync + std::fmt::Debug {
    /// Score of the position, positive favoring Black.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material count: +1/-1 per man, +4/-4 per king, `WIN_SCORE` sentinel at
/// terminal states.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state.score()
    }
}

/// Material plus a small bonus for men advanced toward promotion. Kings
/// carry no advancement bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancementScorer;

impl AdvancementScorer {
    // Sized so a full board of maximally advanced men still scores below
    // one man of material.
    const ADVANCE_UNIT: i32 = 1;
    const MATERIAL_UNIT: i32 = 100;

    fn advancement(square: Square, color: Color) -> i32 {
        let toward = promotion_rank(color) as i32;
        let rank = square.rank() as i32;
        (BOARD_WIDTH as i32 - 1) - (toward - rank).abs()
    }
}

impl BoardScorer for AdvancementScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if game_state.is_terminal() {
            return game_state.score();
        }

        let mut score = game_state.score() * Self::MATERIAL_UNIT;
        for square in Square::all() {
            if let Some(piece) = game_state.piece_at(square) {
                if piece.king {
                    continue;
                }
                let bonus = Self::ADVANCE_UNIT * Self::advancement(square, piece.color);
                match piece.color {
                    Color::Black => score += bonus,
                    Color::Red => score -= bonus,
                }
            }
        }
        score
    }
}
