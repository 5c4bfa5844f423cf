use super::super::{Bitboard, Board, Color};

/// Diagonal capture squares of `pawns` moving in `color`'s direction.
#[inline]
pub(crate) fn pawn_attacks(pawns: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => pawns.shift_north_west() | pawns.shift_north_east(),
        Color::Black => pawns.shift_south_west() | pawns.shift_south_east(),
    }
}

impl Board {
    pub(crate) fn pawn_moves(&self, pawns: Bitboard, color: Color) -> Bitboard {
        let empty = self.empty();
        let single = pawns.shift_forward(color) & empty;
        let double =
            single.shift_forward(color) & empty & Bitboard::rank_mask(color.double_push_rank());

        // Only the side to move may capture en passant.
        let mut targets = self.occupied_by(color.opponent());
        if color == self.side_to_move {
            targets |= self.en_passant;
        }

        single | double | (pawn_attacks(pawns, color) & targets)
    }
}
