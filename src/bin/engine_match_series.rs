//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`

use checkers_engine::engines::engine_alphabeta::AlphaBetaEngine;
use checkers_engine::engines::engine_minimax::MinimaxEngine;
use checkers_engine::engines::engine_trait::Engine;
use checkers_engine::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    // Customize these two lines to experiment with different engines/depths.
    let build_black = |seed: u64| Box::new(MinimaxEngine::with_seed(4, seed)) as Box<dyn Engine>;
    let build_red = |seed: u64| Box::new(AlphaBetaEngine::with_seed(6, seed)) as Box<dyn Engine>;

    let config = MatchSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: MatchConfig { max_plies: 200 },
    };

    println!(
        "engine match series started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let stats = play_engine_match_series(build_black, build_red, &config)?;
    println!("{}", stats.report());
    Ok(())
}
