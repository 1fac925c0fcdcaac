//! Console game driver.
//!
//! Maps player-type names to implementations, then runs the turn loop:
//! render, check for game over, ask the active player for a move, apply it.
//! All board mutation goes through `GameState::apply_move`.

use std::thread;
use std::time::Duration;

use crate::cli::human_console::HumanConsole;
use crate::engines::engine_select::build_engine;
use crate::engines::engine_trait::Engine;
use crate::game_state::checkers_types::Color;
use crate::game_state::game_state::GameState;
use crate::utils::render_game_state::render_game_state;

/// Player identifiers accepted on the command line.
pub const KNOWN_PLAYERS: [&str; 4] = ["human", "random", "minimax", "alphabeta"];

// Pause between engine moves so fast games stay watchable.
const MOVE_DELAY: Duration = Duration::from_millis(500);

/// Build the player named by `name`; engines come from the engine registry.
pub fn build_player(name: &str) -> Result<Box<dyn Engine>, String> {
    match name {
        "human" => Ok(Box::new(HumanConsole::new())),
        other => build_engine(other).map_err(|_| format!("unknown player type: {other}")),
    }
}

/// Run one complete game; returns the winning color, or an error if a
/// non-human player misbehaves.
pub fn run_game<'a>(
    black: &'a mut dyn Engine,
    red: &'a mut dyn Engine,
    interactive: bool,
) -> Result<Color, String> {
    let mut state = GameState::new_game();

    while !state.is_terminal() {
        println!("\n{}\n", render_game_state(&state));

        let mover = match state.turn() {
            Color::Black => &mut *black,
            Color::Red => &mut *red,
        };

        let m = mover.choose_move(&state)?;
        state
            .apply_move(m)
            .map_err(|e| format!("{} produced an illegal move: {e}", mover.name()))?;
        println!("{} played {m}", mover.name());

        if !interactive {
            thread::sleep(MOVE_DELAY);
        }
    }

    println!("\n{}\n", render_game_state(&state));
    let winner = state.turn().opposite();
    println!("GAME OVER: {winner} wins");
    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::{build_player, KNOWN_PLAYERS};

    #[test]
    fn every_known_player_type_builds() {
        for name in KNOWN_PLAYERS {
            assert!(build_player(name).is_ok(), "player type {name} must build");
        }
    }

    #[test]
    fn unknown_player_types_are_rejected() {
        let error = build_player("telnet").expect_err("unknown player type is rejected");
        assert!(error.contains("telnet"));
    }
}
