//! Pawn structure evaluation.
//!
//! Counts doubled, blocked and isolated pawns per side with whole-board
//! fills instead of per-pawn loops.

use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Piece};

#[inline]
const fn fill_north(mut bb: u64) -> u64 {
    bb |= bb << 8;
    bb |= bb << 16;
    bb |= bb << 32;
    bb
}

#[inline]
const fn fill_south(mut bb: u64) -> u64 {
    bb |= bb >> 8;
    bb |= bb >> 16;
    bb |= bb >> 32;
    bb
}

/// `bb` smeared towards `color`'s own back rank.
#[inline]
fn fill_backward(bb: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard(fill_south(bb.0)),
        Color::Black => Bitboard(fill_north(bb.0)),
    }
}

/// Every square on a file that holds at least one bit of `bb`.
#[inline]
fn file_fill(bb: Bitboard) -> Bitboard {
    Bitboard(fill_north(bb.0) | fill_south(bb.0))
}

/// Pawn weaknesses of one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PawnFlaws {
    /// Pawns with a friendly pawn somewhere ahead on the same file
    pub doubled: u32,
    /// Pawns with an enemy pawn on the square directly in front
    pub blocked: u32,
    /// Pawns with no friendly pawn on either adjacent file
    pub isolated: u32,
}

impl Board {
    /// Count the pawn weaknesses of `color`.
    #[must_use]
    pub fn pawn_flaws(&self, color: Color) -> PawnFlaws {
        let own = self.pieces(color, Piece::Pawn);
        let enemy = self.pieces(color.opponent(), Piece::Pawn);

        let behind_own = fill_backward(own.shift_backward(color), color);
        let files = file_fill(own);
        let neighbors = files.shift_east() | files.shift_west();

        PawnFlaws {
            doubled: (own & behind_own).popcount(),
            blocked: (own & enemy.shift_backward(color)).popcount(),
            isolated: (own & !neighbors).popcount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, Piece, Square};

    fn pawns(white: &[&str], black: &[&str]) -> Board {
        let mut builder = BoardBuilder::new();
        for name in white {
            builder = builder.piece(name.parse::<Square>().unwrap(), Color::White, Piece::Pawn);
        }
        for name in black {
            builder = builder.piece(name.parse::<Square>().unwrap(), Color::Black, Piece::Pawn);
        }
        builder.build()
    }

    #[test]
    fn test_start_has_no_flaws() {
        let board = Board::new();
        for color in Color::BOTH {
            assert_eq!(board.pawn_flaws(color), Default::default());
        }
    }

    #[test]
    fn test_doubled_counts_rear_pawns() {
        let board = pawns(&["d2", "d4", "d6", "e3"], &["c7", "c5"]);
        assert_eq!(board.pawn_flaws(Color::White).doubled, 2);
        assert_eq!(board.pawn_flaws(Color::Black).doubled, 1);
    }

    #[test]
    fn test_blocked_means_enemy_directly_ahead() {
        let board = pawns(&["e4", "d4", "a2"], &["e5", "d6"]);
        let white = board.pawn_flaws(Color::White);
        let black = board.pawn_flaws(Color::Black);
        assert_eq!(white.blocked, 1);
        assert_eq!(black.blocked, 1);
    }

    #[test]
    fn test_isolated_is_file_based() {
        // a2 and h2 have no neighbors; c2 and d7 side by side in files
        // keep each other company even on different ranks.
        let board = pawns(&["a2", "c2", "d7", "h2"], &[]);
        assert_eq!(board.pawn_flaws(Color::White).isolated, 2);
    }

    #[test]
    fn test_edge_files_do_not_wrap() {
        let board = pawns(&["a2", "h3"], &[]);
        assert_eq!(board.pawn_flaws(Color::White).isolated, 2);
    }
}
