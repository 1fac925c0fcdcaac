//! Name-to-engine construction for drivers and harness binaries.
//!
//! Selection happens before any game state exists, so an unknown name
//! fails cleanly up front.

use crate::engines::engine_alphabeta::AlphaBetaEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;

/// Engine identifiers accepted by `build_engine`.
pub const KNOWN_ENGINES: [&str; 3] = ["random", "minimax", "alphabeta"];

/// Default look-ahead for the plain minimax engine.
pub const DEFAULT_MINIMAX_DEPTH: u8 = 6;

/// Default look-ahead for the pruning engine; pruning affords more depth in
/// comparable time.
pub const DEFAULT_ALPHA_BETA_DEPTH: u8 = 9;

/// Build the engine named by `name` with its default depth.
pub fn build_engine(name: &str) -> Result<Box<dyn Engine>, String> {
    match name {
        "random" => Ok(Box::new(RandomEngine::new())),
        "minimax" => Ok(Box::new(MinimaxEngine::new(DEFAULT_MINIMAX_DEPTH))),
        "alphabeta" => Ok(Box::new(AlphaBetaEngine::new(DEFAULT_ALPHA_BETA_DEPTH))),
        unknown => Err(format!("unknown engine type: {unknown}")),
    }
}
