use super::super::{Bitboard, Board, Color};

/// All eight L-shaped jumps from every knight in `knights`.
#[inline]
pub(crate) fn knight_attacks(knights: Bitboard) -> Bitboard {
    knights.knight_nne()
        | knights.knight_nee()
        | knights.knight_see()
        | knights.knight_sse()
        | knights.knight_ssw()
        | knights.knight_sww()
        | knights.knight_nww()
        | knights.knight_nnw()
}

impl Board {
    pub(crate) fn knight_moves(&self, knights: Bitboard, color: Color) -> Bitboard {
        knight_attacks(knights) & !self.occupied_by(color)
    }
}
