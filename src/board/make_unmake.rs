use super::state::{Capture, MoveRecord};
use super::{Bitboard, Board, Color, Move, Piece, Square};

/// Rook origin and destination when `color`'s king castles from `from` to
/// `to`, or `None` if the king move is an ordinary step.
fn castling_rook(color: Color, from: Bitboard, to: Bitboard) -> Option<(Bitboard, Bitboard)> {
    let rank = color.back_rank();
    let on_rank = |file| Bitboard::from_square(Square(rank, file));
    if from != on_rank(4) {
        return None;
    }
    if to == from.shift_east_two() {
        Some((on_rank(7), on_rank(5)))
    } else if to == from.shift_west_two() {
        Some((on_rank(0), on_rank(3)))
    } else {
        None
    }
}

/// The castling right lost when the rook on `corner` leaves or is taken.
fn right_for_corner(color: Color, corner: Bitboard) -> Bitboard {
    let rank = color.back_rank();
    if corner == Bitboard::from_square(Square(rank, 0)) {
        Bitboard::from_square(Square(rank, 2))
    } else if corner == Bitboard::from_square(Square(rank, 7)) {
        Bitboard::from_square(Square(rank, 6))
    } else {
        Bitboard::EMPTY
    }
}

impl Board {
    /// Move the side to move's piece on `from` to `to`.
    ///
    /// Both masks must hold exactly one square and `to` must be a
    /// pseudo-legal destination of that piece. Returns false and leaves
    /// the board untouched otherwise. The move may still leave the
    /// mover's king in check; see [`Board::is_move_legal`].
    pub fn make_move(&mut self, from: Bitboard, to: Bitboard) -> bool {
        if !from.is_single() || !to.is_single() {
            log_trace!("rejected move: {from} -> {to} is not a single square pair");
            return false;
        }

        let mover = self.side_to_move;
        let Some(piece) = self.piece_of(mover, from) else {
            log_trace!("rejected move: no {mover} piece on {from}");
            return false;
        };
        if !self.moves_for(mover, piece, from).intersects(to) {
            log_trace!("rejected move: {piece} {from} cannot reach {to}");
            return false;
        }

        let opponent = mover.opponent();
        let mut record = MoveRecord {
            from,
            to,
            piece,
            captured: None,
            previous_en_passant: self.en_passant,
            previous_castling: self.castling,
            moved_by: mover,
            set_en_passant: false,
            promoted_to: None,
        };

        self.relocate(mover, piece, from, to);

        match piece {
            Piece::Pawn => {
                if to == self.en_passant {
                    let victim = to.shift_backward(mover);
                    self.take(opponent, Piece::Pawn, victim);
                    record.captured = Some(Capture {
                        piece: Piece::Pawn,
                        square: victim,
                    });
                } else if to == from.shift_forward_two(mover) {
                    self.en_passant = from.shift_forward(mover);
                    record.set_en_passant = true;
                }
            }
            Piece::Rook => {
                self.castling[mover.index()] &= !right_for_corner(mover, from);
            }
            Piece::King => {
                if let Some((rook_from, rook_to)) = castling_rook(mover, from, to) {
                    self.relocate(mover, Piece::Rook, rook_from, rook_to);
                }
                self.castling[mover.index()] = Bitboard::EMPTY;
            }
            _ => {}
        }

        if record.captured.is_none() {
            if let Some(victim) = self.piece_of(opponent, to) {
                self.take(opponent, victim, to);
                if victim == Piece::Rook {
                    self.castling[opponent.index()] &= !right_for_corner(opponent, to);
                }
                record.captured = Some(Capture {
                    piece: victim,
                    square: to,
                });
            }
        }

        if !record.set_en_passant {
            self.en_passant = Bitboard::EMPTY;
        }

        self.side_to_move = opponent;
        self.history.push(record);
        true
    }

    /// [`Board::make_move`] for a [`Move`] value.
    pub fn play(&mut self, mv: Move) -> bool {
        self.make_move(mv.from_mask(), mv.to_mask())
    }

    /// Take back the most recent move, including a promotion applied to it.
    /// Returns false if there is nothing to undo.
    pub fn unmake_move(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            log_debug!("unmake_move called with empty history");
            return false;
        };

        let mover = record.moved_by;
        match record.promoted_to {
            Some(promoted) => {
                self.take(mover, promoted, record.to);
                self.put(mover, Piece::Pawn, record.from);
            }
            None => self.relocate(mover, record.piece, record.to, record.from),
        }

        if record.piece == Piece::King {
            if let Some((rook_from, rook_to)) = castling_rook(mover, record.from, record.to) {
                self.relocate(mover, Piece::Rook, rook_to, rook_from);
            }
        }

        if let Some(captured) = record.captured {
            self.put(mover.opponent(), captured.piece, captured.square);
        }

        self.en_passant = record.previous_en_passant;
        self.castling = record.previous_castling;
        self.side_to_move = mover;
        true
    }
}
