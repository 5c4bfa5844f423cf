//! Sliding pieces by ray casting.
//!
//! Rays advance one step at a time from every origin at once. A ray keeps
//! going through empty squares and stops on the first occupied square,
//! which is included; the caller masks out own pieces.

use super::super::{Bitboard, Board, Color};

#[inline]
fn slide(origins: Bitboard, step: fn(Bitboard) -> Bitboard, empty: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let mut ray = step(origins);
    while !ray.is_empty() {
        attacks |= ray;
        ray = step(ray & empty);
    }
    attacks
}

pub(crate) fn bishop_attacks(origins: Bitboard, empty: Bitboard) -> Bitboard {
    slide(origins, Bitboard::shift_north_east, empty)
        | slide(origins, Bitboard::shift_north_west, empty)
        | slide(origins, Bitboard::shift_south_east, empty)
        | slide(origins, Bitboard::shift_south_west, empty)
}

pub(crate) fn rook_attacks(origins: Bitboard, empty: Bitboard) -> Bitboard {
    slide(origins, Bitboard::shift_north, empty)
        | slide(origins, Bitboard::shift_south, empty)
        | slide(origins, Bitboard::shift_east, empty)
        | slide(origins, Bitboard::shift_west, empty)
}

impl Board {
    pub(crate) fn bishop_moves(&self, bishops: Bitboard, color: Color) -> Bitboard {
        bishop_attacks(bishops, self.empty()) & !self.occupied_by(color)
    }

    pub(crate) fn rook_moves(&self, rooks: Bitboard, color: Color) -> Bitboard {
        rook_attacks(rooks, self.empty()) & !self.occupied_by(color)
    }

    pub(crate) fn queen_moves(&self, queens: Bitboard, color: Color) -> Bitboard {
        self.bishop_moves(queens, color) | self.rook_moves(queens, color)
    }
}
