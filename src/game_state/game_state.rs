//! Core board state representation.
//!
//! `GameState` owns piece placement, the side to move, and the cached legal
//! jump/step sets. All mutation goes through `apply_move`, which recomputes
//! legality synchronously; search layers clone a state per child node, so a
//! state handed to a subtree is never aliased.

use std::collections::HashSet;

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{promotion_rank, NUM_SQUARES, PIECES_PER_SIDE};
use crate::game_state::checkers_types::{Color, Piece, Square};
use crate::move_generation::legal_move_generator::{
    generate_jumps, generate_jumps_from, generate_steps,
};
use crate::moves::move_description::Move;

/// Material value of a man, positive for Black.
pub const MAN_VALUE: i32 = 1;
/// Material value of a king, positive for Black.
pub const KING_VALUE: i32 = 4;
/// Sentinel returned by `score` at terminal states, signed toward the side
/// that still has moves.
pub const WIN_SCORE: i32 = 999_999;

/// A full checkers position with cached legal moves.
#[derive(Debug, Clone)]
pub struct GameState {
    squares: [Option<Piece>; NUM_SQUARES],
    turn: Color,
    jumps: HashSet<Move>,
    steps: HashSet<Move>,
    // Square a multi-jump must continue from. Carrying it in the value (as
    // opposed to only in the cached jump set) lets a copied state recompute
    // its legal moves without losing the mid-chain restriction.
    chain_square: Option<Square>,
}

impl GameState {
    /// The standard opening: twelve Black men on squares 1..=12, twelve Red
    /// men on 21..=32, Black to move.
    pub fn new_game() -> Self {
        let mut squares = [None; NUM_SQUARES];
        for index in 0..PIECES_PER_SIDE {
            squares[index] = Some(Piece::man(Color::Black));
        }
        for index in (NUM_SQUARES - PIECES_PER_SIDE)..NUM_SQUARES {
            squares[index] = Some(Piece::man(Color::Red));
        }

        let mut state = GameState {
            squares,
            turn: Color::Black,
            jumps: HashSet::new(),
            steps: HashSet::new(),
            chain_square: None,
        };
        state.update_legal_moves();
        state
    }

    /// An arbitrary position, mainly for tests and curated scenarios.
    /// Later entries overwrite earlier ones on the same square.
    pub fn from_position(turn: Color, pieces: &[(Square, Piece)]) -> Self {
        let mut squares = [None; NUM_SQUARES];
        for &(square, piece) in pieces {
            squares[square.index()] = Some(piece);
        }

        let mut state = GameState {
            squares,
            turn,
            jumps: HashSet::new(),
            steps: HashSet::new(),
            chain_square: None,
        };
        state.update_legal_moves();
        state
    }

    /// Which color's turn it currently is.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Whether `square` is occupied.
    #[inline]
    pub fn has_piece_at(&self, square: Square) -> bool {
        self.squares[square.index()].is_some()
    }

    /// Color of the piece on `square`.
    pub fn color_at(&self, square: Square) -> CheckersResult<Color> {
        self.piece_at(square)
            .map(|piece| piece.color)
            .ok_or(CheckersError::EmptySquare(square))
    }

    /// Whether the piece on `square` is a king.
    pub fn is_king(&self, square: Square) -> CheckersResult<bool> {
        self.piece_at(square)
            .map(|piece| piece.king)
            .ok_or(CheckersError::EmptySquare(square))
    }

    /// The current legal moves: jumps whenever any jump exists (captures are
    /// mandatory, board-wide), steps otherwise. Empty only at terminal
    /// states. Idempotent between mutations.
    #[inline]
    pub fn legal_moves(&self) -> &HashSet<Move> {
        if self.jumps.is_empty() {
            &self.steps
        } else {
            &self.jumps
        }
    }

    /// Whether the game is over. The side to move in a terminal state has
    /// lost.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Applies `m`, which must be a member of `legal_moves()` (membership is
    /// by endpoints, so a capture-less probe from a UI applies the stored
    /// jump). On a capture with a further capture available from the landing
    /// square, the turn is kept and the legal set restricts to those
    /// continuations; otherwise promotion is handled, the turn flips, and
    /// full legality is recomputed.
    pub fn apply_move(&mut self, m: Move) -> CheckersResult<()> {
        // Resolve the stored move so the captured square is known even when
        // the caller built `m` from endpoints alone.
        let resolved = match self.legal_moves().get(&m) {
            Some(&stored) => stored,
            None => return Err(CheckersError::IllegalMove(m)),
        };

        let start = resolved.start();
        let end = resolved.end();
        let piece = self.squares[start.index()]
            .take()
            .ok_or(CheckersError::EmptySquare(start))?;
        self.squares[end.index()] = Some(piece);

        if let Some(captured) = resolved.captured() {
            self.squares[captured.index()] = None;

            // Continuations are probed before promotion: reaching the back
            // rank ends a chain.
            let continuations = generate_jumps_from(self, end);
            if !continuations.is_empty() {
                self.chain_square = Some(end);
                self.jumps = continuations;
                self.steps.clear();
                self.check_invariants();
                return Ok(());
            }
        }

        if !piece.king && end.rank() == promotion_rank(piece.color) {
            self.squares[end.index()] = Some(piece.promoted());
        }

        self.chain_square = None;
        self.turn = self.turn.opposite();
        self.update_legal_moves();
        Ok(())
    }

    /// A copy of this state with `m` applied; the standard way search layers
    /// derive child nodes without mutating the parent.
    pub fn child(&self, m: Move) -> CheckersResult<GameState> {
        let mut next = self.clone();
        next.apply_move(m)?;
        Ok(next)
    }

    /// Signed material estimate, positive favoring Black: +1/-1 per man,
    /// +4/-4 per king. At a terminal state a `WIN_SCORE` sentinel toward the
    /// winner overrides material.
    pub fn score(&self) -> i32 {
        if self.is_terminal() {
            return match self.turn {
                Color::Black => -WIN_SCORE,
                Color::Red => WIN_SCORE,
            };
        }

        let mut score = 0;
        for piece in self.squares.iter().flatten() {
            let value = if piece.king { KING_VALUE } else { MAN_VALUE };
            match piece.color {
                Color::Black => score += value,
                Color::Red => score -= value,
            }
        }
        score
    }

    fn update_legal_moves(&mut self) {
        let jumps = match self.chain_square {
            Some(square) => generate_jumps_from(self, square),
            None => generate_jumps(self),
        };
        let steps = if jumps.is_empty() {
            generate_steps(self)
        } else {
            HashSet::new()
        };

        self.jumps = jumps;
        self.steps = steps;
        self.check_invariants();
    }

    // Representation invariants, checked in debug builds after construction
    // and after every mutation.
    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        for square in Square::all() {
            if let Some(piece) = self.piece_at(square) {
                debug_assert!(
                    piece.king || square.rank() != promotion_rank(piece.color),
                    "non-king on its promotion rank at {square}"
                );
            }
        }

        for m in self.legal_moves() {
            debug_assert_eq!(self.color_at(m.start()).ok(), Some(self.turn));
            debug_assert!(!self.has_piece_at(m.end()));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
