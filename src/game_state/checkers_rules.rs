//! Fixed board geometry for the 32-square checkers board.
//!
//! Every square's diagonal neighbors and jump targets (with the single
//! intervening captured square) are precomputed into constant tables, so
//! edge-of-board conditions are a lookup rather than offset arithmetic.

use crate::game_state::checkers_types::{Color, Square};

/// Width of the full board in squares.
pub const BOARD_WIDTH: usize = 8;

/// Playable (dark) squares per rank.
pub const SQUARES_PER_RANK: usize = BOARD_WIDTH / 2;

/// Total playable squares.
pub const NUM_SQUARES: usize = (BOARD_WIDTH * BOARD_WIDTH) / 2;

/// Men per side in the standard opening.
pub const PIECES_PER_SIDE: usize = 12;

/// A diagonal direction of travel. Rank 0 is north (Black's back rank), so
/// Black men advance south and Red men advance north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::NorthWest => 0,
            Direction::NorthEast => 1,
            Direction::SouthWest => 2,
            Direction::SouthEast => 3,
        }
    }

    /// (file, rank) deltas for one diagonal step.
    #[inline]
    pub const fn offsets(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (1, -1),
            Direction::SouthWest => (-1, 1),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Whether a man (non-king) of `color` may travel along this direction.
    /// Kings travel in all four.
    #[inline]
    pub const fn is_forward_for(self, color: Color) -> bool {
        match color {
            Color::Black => matches!(self, Direction::SouthWest | Direction::SouthEast),
            Color::Red => matches!(self, Direction::NorthWest | Direction::NorthEast),
        }
    }
}

/// The rank on which a man of `color` is promoted to king.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::Black => (BOARD_WIDTH - 1) as u8,
        Color::Red => 0,
    }
}

// Table entries are square numbers; 0 marks an off-board target.
const STEP_TARGETS: [[u8; 4]; NUM_SQUARES] = build_step_targets();
const JUMP_LANDINGS: [[u8; 4]; NUM_SQUARES] = build_jump_targets(true);
const JUMP_CAPTURES: [[u8; 4]; NUM_SQUARES] = build_jump_targets(false);

/// One-step diagonal neighbor of `square` along `direction`.
#[inline]
pub fn step_target(square: Square, direction: Direction) -> Option<Square> {
    match STEP_TARGETS[square.index()][direction.index()] {
        0 => None,
        number => Some(Square::from_valid(number)),
    }
}

/// Two-step jump from `square` along `direction`, as the landing square
/// paired with the single intervening captured square.
#[inline]
pub fn jump_target(square: Square, direction: Direction) -> Option<(Square, Square)> {
    match (
        JUMP_LANDINGS[square.index()][direction.index()],
        JUMP_CAPTURES[square.index()][direction.index()],
    ) {
        (0, _) | (_, 0) => None,
        (landing, captured) => Some((Square::from_valid(landing), Square::from_valid(captured))),
    }
}

const fn build_step_targets() -> [[u8; 4]; NUM_SQUARES] {
    let mut table = [[0u8; 4]; NUM_SQUARES];
    let mut index = 0usize;

    while index < NUM_SQUARES {
        let square = Square::from_valid(index as u8 + 1);
        let file = square.file() as i32;
        let rank = square.rank() as i32;

        let mut dir = 0usize;
        while dir < 4 {
            let (df, dr) = Direction::ALL[dir].offsets();
            if let Some(target) = Square::from_coords(file + df, rank + dr) {
                table[index][dir] = target.number();
            }
            dir += 1;
        }

        index += 1;
    }

    table
}

const fn build_jump_targets(landing: bool) -> [[u8; 4]; NUM_SQUARES] {
    let mut table = [[0u8; 4]; NUM_SQUARES];
    let mut index = 0usize;

    while index < NUM_SQUARES {
        let square = Square::from_valid(index as u8 + 1);
        let file = square.file() as i32;
        let rank = square.rank() as i32;

        let mut dir = 0usize;
        while dir < 4 {
            let (df, dr) = Direction::ALL[dir].offsets();
            let target = if landing {
                Square::from_coords(file + 2 * df, rank + 2 * dr)
            } else {
                Square::from_coords(file + df, rank + dr)
            };
            // A jump exists only when both the landing and the captured
            // square are on the board.
            if Square::from_coords(file + 2 * df, rank + 2 * dr).is_some() {
                if let Some(target) = target {
                    table[index][dir] = target.number();
                }
            }
            dir += 1;
        }

        index += 1;
    }

    table
}
