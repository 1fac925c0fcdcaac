//! Legal move generation over the precomputed board geometry.
//!
//! Jumps and steps are generated separately because captures are mandatory
//! board-wide: the caller only asks for steps when no jump exists anywhere
//! for the side to move. Continuation jumps for a mid-chain piece come from
//! the per-square entry point.

use std::collections::HashSet;

use crate::game_state::checkers_rules::{jump_target, step_target, Direction};
use crate::game_state::checkers_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;

/// All legal jumps for the side to move, across the whole board.
pub fn generate_jumps(game_state: &GameState) -> HashSet<Move> {
    let mut jumps = HashSet::new();
    for square in Square::all() {
        if let Some(piece) = game_state.piece_at(square) {
            if piece.color == game_state.turn() {
                collect_jumps_for_piece(game_state, square, piece, &mut jumps);
            }
        }
    }
    jumps
}

/// Legal jumps for the piece on `from` only; used to restrict the legal set
/// to continuation captures during a multi-jump.
pub fn generate_jumps_from(game_state: &GameState, from: Square) -> HashSet<Move> {
    let mut jumps = HashSet::new();
    if let Some(piece) = game_state.piece_at(from) {
        if piece.color == game_state.turn() {
            collect_jumps_for_piece(game_state, from, piece, &mut jumps);
        }
    }
    jumps
}

/// All legal steps for the side to move. Only meaningful when no jump
/// exists; the caller enforces the forced-capture rule.
pub fn generate_steps(game_state: &GameState) -> HashSet<Move> {
    let mut steps = HashSet::new();
    for square in Square::all() {
        if let Some(piece) = game_state.piece_at(square) {
            if piece.color != game_state.turn() {
                continue;
            }
            for direction in directions_for(piece) {
                if let Some(target) = step_target(square, direction) {
                    if game_state.piece_at(target).is_none() {
                        steps.insert(Move::step(square, target));
                    }
                }
            }
        }
    }
    steps
}

fn collect_jumps_for_piece(
    game_state: &GameState,
    square: Square,
    piece: Piece,
    jumps: &mut HashSet<Move>,
) {
    for direction in directions_for(piece) {
        if let Some((landing, captured)) = jump_target(square, direction) {
            let landing_empty = game_state.piece_at(landing).is_none();
            let captures_opponent = game_state
                .piece_at(captured)
                .is_some_and(|victim| victim.color != piece.color);

            if landing_empty && captures_opponent {
                let inserted = jumps.insert(Move::jump(square, landing, captured));
                // Move identity is (start, end); two distinct captures
                // sharing endpoints would silently collide.
                debug_assert!(inserted, "duplicate jump endpoints from {square}");
            }
        }
    }
}

fn directions_for(piece: Piece) -> impl Iterator<Item = Direction> {
    Direction::ALL
        .into_iter()
        .filter(move |direction| piece.king || direction.is_forward_for(piece.color))
}

#[cfg(test)]
mod tests {
    use super::{generate_jumps, generate_jumps_from, generate_steps};
    use crate::game_state::checkers_types::{Color, Piece, Square};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_description::Move;

    fn sq(number: u8) -> Square {
        Square::new(number).expect("test square is on the board")
    }

    #[test]
    fn men_step_forward_only() {
        let state = GameState::from_position(
            Color::Black,
            &[(sq(14), Piece::man(Color::Black))],
        );
        let steps = generate_steps(&state);
        // From 14 a black man reaches 17 and 18 but never 9 or 10.
        assert_eq!(steps.len(), 2);
        assert!(steps.contains(&Move::step(sq(14), sq(17))));
        assert!(steps.contains(&Move::step(sq(14), sq(18))));
    }

    #[test]
    fn kings_step_in_all_four_directions() {
        let state = GameState::from_position(
            Color::Black,
            &[(sq(14), Piece::king(Color::Black))],
        );
        let steps = generate_steps(&state);
        assert_eq!(steps.len(), 4);
        assert!(steps.contains(&Move::step(sq(14), sq(9))));
        assert!(steps.contains(&Move::step(sq(14), sq(10))));
    }

    #[test]
    fn jumps_require_an_opposing_piece_and_an_empty_landing() {
        let state = GameState::from_position(
            Color::Black,
            &[
                (sq(9), Piece::man(Color::Black)),
                (sq(14), Piece::man(Color::Red)),
                (sq(13), Piece::man(Color::Black)),
            ],
        );
        let jumps = generate_jumps(&state);
        // Over the red man on 14 only; 13 holds a friendly piece.
        assert_eq!(jumps.len(), 1);
        assert!(jumps.contains(&Move::jump(sq(9), sq(18), sq(14))));
    }

    #[test]
    fn blocked_landing_square_forbids_the_jump() {
        let state = GameState::from_position(
            Color::Black,
            &[
                (sq(9), Piece::man(Color::Black)),
                (sq(14), Piece::man(Color::Red)),
                (sq(18), Piece::man(Color::Red)),
            ],
        );
        assert!(generate_jumps(&state).is_empty());
    }

    #[test]
    fn per_square_jumps_see_only_that_piece() {
        let state = GameState::from_position(
            Color::Red,
            &[
                (sq(22), Piece::man(Color::Red)),
                (sq(26), Piece::man(Color::Red)),
                (sq(17), Piece::man(Color::Black)),
                (sq(21), Piece::man(Color::Black)),
            ],
        );
        let from_22 = generate_jumps_from(&state, sq(22));
        assert_eq!(from_22.len(), 1);
        assert!(from_22.contains(&Move::jump(sq(22), sq(13), sq(17))));
        assert!(generate_jumps_from(&state, sq(26)).is_empty());
    }
}
