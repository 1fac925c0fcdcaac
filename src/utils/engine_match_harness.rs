//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other without console
//! I/O, with per-side timing and a ply cap so shuffling endgames cannot
//! loop forever. Series runs derive one seed per game from a base seed so
//! results are reproducible.

use std::fmt::Write as _;
use std::time::Instant;

use crate::engines::engine_trait::Engine;
use crate::game_state::checkers_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    BlackWin,
    RedWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub plies: u32,
    pub moves: Vec<String>,
    pub black_total_time_ns: u128,
    pub red_total_time_ns: u128,
    pub final_state: GameState,
}

/// Play a single match. Black always moves first.
pub fn play_engine_match<'a>(
    black: &'a mut dyn Engine,
    red: &'a mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let mut state = GameState::new_game();
    let mut moves = Vec::new();
    let mut plies = 0u32;
    let mut black_total_time_ns = 0u128;
    let mut red_total_time_ns = 0u128;

    while !state.is_terminal() && plies < config.max_plies {
        let mover = match state.turn() {
            Color::Black => &mut *black,
            Color::Red => &mut *red,
        };

        let started = Instant::now();
        let m = mover.choose_move(&state)?;
        let elapsed = started.elapsed().as_nanos();
        match state.turn() {
            Color::Black => black_total_time_ns += elapsed,
            Color::Red => red_total_time_ns += elapsed,
        }

        state
            .apply_move(m)
            .map_err(|e| format!("{} produced an illegal move: {e}", mover.name()))?;
        moves.push(m.to_string());
        plies += 1;
    }

    let outcome = if state.is_terminal() {
        match state.turn() {
            // The side to move in a terminal state has lost.
            Color::Black => MatchOutcome::RedWin,
            Color::Red => MatchOutcome::BlackWin,
        }
    } else {
        MatchOutcome::DrawMaxPlies
    };

    Ok(MatchResult {
        outcome,
        plies,
        moves,
        black_total_time_ns,
        red_total_time_ns,
        final_state: state,
    })
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u32,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u32,
    pub black_wins: u32,
    pub red_wins: u32,
    pub draws: u32,
    pub total_plies: u64,
    pub black_total_time_ns: u128,
    pub red_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "games: {}", self.games);
        let _ = writeln!(
            out,
            "black wins: {}  red wins: {}  draws: {}",
            self.black_wins, self.red_wins, self.draws
        );
        let _ = writeln!(
            out,
            "avg plies per game: {:.1}",
            self.total_plies as f64 / self.games.max(1) as f64
        );
        let _ = write!(
            out,
            "avg time per ply: black {:.3} ms, red {:.3} ms",
            self.black_total_time_ns as f64 / 1e6 / (self.total_plies.max(1) as f64 / 2.0),
            self.red_total_time_ns as f64 / 1e6 / (self.total_plies.max(1) as f64 / 2.0),
        );
        out
    }
}

/// Play a reproducible series. Each game's engines are rebuilt through the
/// factories with a per-game seed derived from `base_seed`.
pub fn play_engine_match_series(
    build_black: impl Fn(u64) -> Box<dyn Engine>,
    build_red: impl Fn(u64) -> Box<dyn Engine>,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String> {
    let mut stats = MatchSeriesStats::default();

    for game in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game));
        let mut black = build_black(seed);
        let mut red = build_red(seed ^ 0x9E37_79B9_7F4A_7C15);

        let result = play_engine_match(black.as_mut(), red.as_mut(), &config.per_game)?;

        stats.games += 1;
        match result.outcome {
            MatchOutcome::BlackWin => stats.black_wins += 1,
            MatchOutcome::RedWin => stats.red_wins += 1,
            MatchOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.total_plies += u64::from(result.plies);
        stats.black_total_time_ns += result.black_total_time_ns;
        stats.red_total_time_ns += result.red_total_time_ns;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{play_engine_match, play_engine_match_series, MatchConfig, MatchSeriesConfig};
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::Engine;

    #[test]
    fn a_seeded_random_match_terminates_within_the_ply_cap() {
        let mut black = RandomEngine::with_seed(1);
        let mut red = RandomEngine::with_seed(2);
        let config = MatchConfig { max_plies: 200 };

        let result =
            play_engine_match(&mut black, &mut red, &config).expect("the match runs to an outcome");
        assert!(result.plies <= 200);
        assert_eq!(result.plies as usize, result.moves.len());
    }

    #[test]
    fn series_totals_are_consistent_with_the_games_played() {
        let config = MatchSeriesConfig {
            games: 4,
            base_seed: 7,
            per_game: MatchConfig { max_plies: 120 },
        };

        let stats = play_engine_match_series(
            |seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>,
            |seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>,
            &config,
        )
        .expect("the series runs to completion");

        assert_eq!(stats.games, 4);
        assert_eq!(stats.black_wins + stats.red_wins + stats.draws, 4);
        assert!(!stats.report().is_empty());
    }
}
