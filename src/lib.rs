//! Crate root module declarations for the checkers engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, console driver, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod game_state {
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod moves {
    pub mod move_description;
}

pub mod move_generation {
    pub mod legal_move_generator;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_alphabeta;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_select;
    pub mod engine_trait;
}

pub mod cli {
    pub mod cli_top;
    pub mod human_console;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_game_state;
}

pub mod errors;
