//! Two-phase promotion: `make_move` leaves a pawn on the last rank, and
//! the caller then picks its new piece with `apply_promotion`.

use super::{Bitboard, Board, BoardError, Color, Piece};

impl Board {
    /// Pawns standing on their promotion rank: White pawns on rank 8 and
    /// Black pawns on rank 1.
    #[must_use]
    pub fn is_promotion(&self) -> Bitboard {
        Color::BOTH.into_iter().fold(Bitboard::EMPTY, |acc, color| {
            acc | (self.pieces(color, Piece::Pawn)
                & Bitboard::rank_mask(color.pawn_promotion_rank()))
        })
    }

    /// Turn a pawn waiting on its promotion rank into `piece`.
    ///
    /// The promotion is attached to the move that brought the pawn there,
    /// even if other moves were played since, so `unmake_move` of that move
    /// restores the pawn. The most recently arrived pawn is promoted first.
    ///
    /// # Errors
    /// [`BoardError::InvalidPromotionPiece`] for a pawn or king, and
    /// [`BoardError::NoPendingPromotion`] if no pawn is on its promotion rank.
    pub fn apply_promotion(&mut self, piece: Piece) -> Result<(), BoardError> {
        if !piece.is_promotion_target() {
            return Err(BoardError::InvalidPromotionPiece { piece });
        }
        let pending = self.is_promotion();

        let arrival = self.history.iter_mut().rev().find(|record| {
            record.piece == Piece::Pawn
                && record.promoted_to.is_none()
                && pending.intersects(record.to)
        });

        let (color, square) = match arrival {
            Some(record) => {
                record.promoted_to = Some(piece);
                (record.moved_by, record.to)
            }
            // Only a pawn placed by the builder has no move to attach to.
            None => {
                let square = pending.singles().next().ok_or(BoardError::NoPendingPromotion)?;
                let color = if self.pieces(Color::White, Piece::Pawn).intersects(square) {
                    Color::White
                } else {
                    Color::Black
                };
                (color, square)
            }
        };

        self.take(color, Piece::Pawn, square);
        self.put(color, piece, square);
        log_debug!("promoted {color} pawn on {square} to {piece}");
        Ok(())
    }
}
