//! Evaluation constants and tables.
//!
//! Tables are laid out from White's point of view with a1 at index 0 and
//! h8 at index 63. Black reads the vertically mirrored square.

use crate::board::types::{Color, Piece, Square};

// ============================================================================
// MATERIAL
// ============================================================================

/// Material value per piece, indexed by `Piece::index()`
pub const MATERIAL: [i32; 6] = [100, 320, 330, 500, 900, 20000];

// ============================================================================
// PAWN STRUCTURE CONSTANTS
// ============================================================================

/// Penalty per pawn with a friendly pawn ahead of it on the same file
pub const DOUBLED_PAWN: i32 = -50;

/// Penalty per pawn with an enemy pawn directly in front
pub const BLOCKED_PAWN: i32 = -30;

/// Penalty per pawn with no friendly pawn on an adjacent file
pub const ISOLATED_PAWN: i32 = -30;

/// Score per legal destination square
pub const MOBILITY_WEIGHT: i32 = 1;

// ============================================================================
// PIECE-SQUARE TABLES
// ============================================================================

#[rustfmt::skip]
pub const PAWN_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10, -20, -20,  10,  10,   5,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,   5,  10,  25,  25,  10,   5,   5,
    10,  10,  20,  30,  30,  20,  10,  10,
    50,  50,  50,  50,  50,  50,  50,  50,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
pub const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
pub const ROOK_TABLE: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
pub const QUEEN_TABLE: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
pub const KING_TABLE: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// One 64-entry table per piece type, indexed by `Piece::index()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSquareTables {
    tables: [[i32; 64]; 6],
}

impl PieceSquareTables {
    #[must_use]
    pub const fn new(tables: [[i32; 64]; 6]) -> Self {
        PieceSquareTables { tables }
    }

    /// Bonus for `color`'s `piece` standing on `sq`
    #[inline]
    #[must_use]
    pub fn value(&self, color: Color, piece: Piece, sq: Square) -> i32 {
        let idx = match color {
            Color::White => sq.index(),
            Color::Black => sq.index() ^ 56,
        };
        self.tables[piece.index()][idx]
    }

    /// The raw table for one piece type
    #[must_use]
    pub fn table(&self, piece: Piece) -> &[i32; 64] {
        &self.tables[piece.index()]
    }
}

/// The default tables.
pub static STANDARD_TABLES: PieceSquareTables = PieceSquareTables::new([
    PAWN_TABLE,
    KNIGHT_TABLE,
    BISHOP_TABLE,
    ROOK_TABLE,
    QUEEN_TABLE,
    KING_TABLE,
]);
