//! Pseudo-legal move generation and king safety.
//!
//! Every generator takes a bitboard of origins and returns the union of the
//! squares those pieces can reach. Nothing here checks whether the mover's
//! own king is left attacked; that is the job of the legality filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::king_aura;
pub(crate) use knights::knight_attacks;
pub(crate) use pawns::pawn_attacks;
pub(crate) use sliders::{bishop_attacks, rook_attacks};

use super::{Bitboard, Board, Color, Piece};

impl Board {
    /// Pseudo-legal destinations for a set of `piece`s of `color`.
    pub(crate) fn moves_for(&self, color: Color, piece: Piece, origins: Bitboard) -> Bitboard {
        match piece {
            Piece::Pawn => self.pawn_moves(origins, color),
            Piece::Knight => self.knight_moves(origins, color),
            Piece::Bishop => self.bishop_moves(origins, color),
            Piece::Rook => self.rook_moves(origins, color),
            Piece::Queen => self.queen_moves(origins, color),
            Piece::King => self.king_moves(origins, color),
        }
    }

    /// Union of the pseudo-legal destinations of every piece in `origin`,
    /// whichever of the twelve bitboards it sits on.
    #[must_use]
    pub fn pseudo_legal_moves(&self, origin: Bitboard) -> Bitboard {
        let mut moves = Bitboard::EMPTY;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let selected = origin & self.pieces(color, piece);
                if !selected.is_empty() {
                    moves |= self.moves_for(color, piece, selected);
                }
            }
        }
        moves
    }

    /// Every square `color` attacks: pawn diagonals, knight jumps, slider
    /// rays up to and including the first blocker, and the king's aura.
    #[must_use]
    pub fn attacks_by(&self, color: Color) -> Bitboard {
        let empty = self.empty();
        let queens = self.pieces(color, Piece::Queen);

        pawn_attacks(self.pieces(color, Piece::Pawn), color)
            | knight_attacks(self.pieces(color, Piece::Knight))
            | bishop_attacks(self.pieces(color, Piece::Bishop) | queens, empty)
            | rook_attacks(self.pieces(color, Piece::Rook) | queens, empty)
            | king_aura(self.pieces(color, Piece::King))
    }

    /// The subset of `targets` that `color`'s opponent does not attack.
    pub(crate) fn king_safe_for(&self, color: Color, targets: Bitboard) -> Bitboard {
        targets & !self.attacks_by(color.opponent())
    }

    /// The subset of `targets` not attacked by the opponent of the side to
    /// move.
    #[must_use]
    pub fn king_safe(&self, targets: Bitboard) -> Bitboard {
        self.king_safe_for(self.side_to_move, targets)
    }

    /// Returns true if `color` has a king and it is attacked.
    pub(crate) fn is_king_attacked(&self, color: Color) -> bool {
        let king = self.pieces(color, Piece::King);
        !king.is_empty() && self.king_safe_for(color, king) != king
    }

    /// Returns true if the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }
}
