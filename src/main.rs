use std::env;
use std::process::ExitCode;

use checkers_engine::cli::cli_top::{build_player, run_game, KNOWN_PLAYERS};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let [black_name, red_name] = args.as_slice() else {
        print_usage();
        return ExitCode::from(2);
    };

    // Both players must resolve before any board is created.
    let mut black = match build_player(black_name.trim()) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let mut red = match build_player(red_name.trim()) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let interactive = black_name.trim() == "human" || red_name.trim() == "human";
    match run_game(black.as_mut(), red.as_mut(), interactive) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Usage: checkers_engine <black player> <red player>");
    println!("Player types:");
    for player in KNOWN_PLAYERS {
        println!("\t{player}");
    }
}
