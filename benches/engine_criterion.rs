use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use checkers_engine::engines::engine_alphabeta::alpha_beta_root;
use checkers_engine::engines::engine_minimax::minimax_root;
use checkers_engine::engines::engine_random::RandomEngine;
use checkers_engine::engines::engine_trait::Engine;
use checkers_engine::game_state::game_state::GameState;
use checkers_engine::search::board_scoring::MaterialScorer;

/// A reproducible mid-game position: a fixed seeded random playout.
fn midgame_state(plies: u32) -> GameState {
    let mut driver = RandomEngine::with_seed(2024);
    let mut state = GameState::new_game();
    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        let m = driver.choose_move(&state).expect("state is not terminal");
        state.apply_move(m).expect("chosen move is legal");
    }
    state
}

fn bench_move_application(c: &mut Criterion) {
    let state = midgame_state(20);
    let moves: Vec<_> = state.legal_moves().iter().copied().collect();

    let mut group = c.benchmark_group("move_application");
    group.throughput(Throughput::Elements(moves.len() as u64));
    group.bench_function("child_per_legal_move", |b| {
        b.iter(|| {
            for &m in &moves {
                let child = state.child(m).expect("legal move applies");
                black_box(child);
            }
        })
    });
    group.finish();
}

fn bench_search_depth_scaling(c: &mut Criterion) {
    let state = midgame_state(20);

    let mut group = c.benchmark_group("search_depth");
    for depth in [2u8, 4, 6] {
        group.bench_with_input(BenchmarkId::new("minimax", depth), &depth, |b, &depth| {
            b.iter(|| {
                minimax_root(black_box(&state), depth, &MaterialScorer)
                    .expect("position is not terminal")
            })
        });
        group.bench_with_input(BenchmarkId::new("alphabeta", depth), &depth, |b, &depth| {
            b.iter(|| {
                alpha_beta_root(black_box(&state), depth, &MaterialScorer)
                    .expect("position is not terminal")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_move_application, bench_search_depth_scaling);
criterion_main!(benches);
