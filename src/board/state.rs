use super::{Bitboard, Color, Piece, Square};

/// Starting bitboards indexed `[color][piece]`.
const START_PIECES: [[Bitboard; 6]; 2] = [
    [
        Bitboard(0x0000_0000_0000_FF00),
        Bitboard(0x0000_0000_0000_0042),
        Bitboard(0x0000_0000_0000_0024),
        Bitboard(0x0000_0000_0000_0081),
        Bitboard(0x0000_0000_0000_0008),
        Bitboard(0x0000_0000_0000_0010),
    ],
    [
        Bitboard(0x00FF_0000_0000_0000),
        Bitboard(0x4200_0000_0000_0000),
        Bitboard(0x2400_0000_0000_0000),
        Bitboard(0x8100_0000_0000_0000),
        Bitboard(0x0800_0000_0000_0000),
        Bitboard(0x1000_0000_0000_0000),
    ],
];

/// Castling destination squares (c- and g-file of the back rank).
pub(crate) const START_CASTLING: [Bitboard; 2] = [
    Bitboard(0x0000_0000_0000_0044),
    Bitboard(0x4400_0000_0000_0000),
];

/// A piece removed by a move, with the square it was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Capture {
    pub(crate) piece: Piece,
    pub(crate) square: Bitboard,
}

/// Everything needed to undo one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MoveRecord {
    pub(crate) from: Bitboard,
    pub(crate) to: Bitboard,
    pub(crate) piece: Piece,
    pub(crate) captured: Option<Capture>,
    pub(crate) previous_en_passant: Bitboard,
    pub(crate) previous_castling: [Bitboard; 2],
    pub(crate) moved_by: Color,
    pub(crate) set_en_passant: bool,
    pub(crate) promoted_to: Option<Piece>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) castling: [Bitboard; 2],
    pub(crate) en_passant: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) history: Vec<MoveRecord>,
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Board {
            pieces: START_PIECES,
            castling: START_CASTLING,
            en_passant: Bitboard::EMPTY,
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    pub(crate) fn empty_board() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            castling: [Bitboard::EMPTY; 2],
            en_passant: Bitboard::EMPTY,
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    /// Union of one color's six bitboards
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, bb| acc | *bb)
    }

    #[inline]
    #[must_use]
    pub fn white(&self) -> Bitboard {
        self.occupied_by(Color::White)
    }

    #[inline]
    #[must_use]
    pub fn black(&self) -> Bitboard {
        self.occupied_by(Color::Black)
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.white() | self.black()
    }

    /// Squares holding no piece at all
    #[inline]
    #[must_use]
    pub fn empty(&self) -> Bitboard {
        !self.occupied()
    }

    /// All squares occupied by the side to move
    #[inline]
    #[must_use]
    pub fn on_move_positions(&self) -> Bitboard {
        self.occupied_by(self.side_to_move)
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    #[must_use]
    pub fn black_to_move(&self) -> bool {
        self.side_to_move == Color::Black
    }

    /// Castling destinations still available to `color`'s king
    #[inline]
    #[must_use]
    pub fn castling(&self, color: Color) -> Bitboard {
        self.castling[color.index()]
    }

    /// The square a pawn may capture onto en passant, or empty
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Bitboard {
        self.en_passant
    }

    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.occupied().popcount()
    }

    /// Number of moves that can still be undone
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Which of `color`'s bitboards holds `mask`, if any.
    pub(crate) fn piece_of(&self, color: Color, mask: Bitboard) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|p| self.pieces[color.index()][p.index()].intersects(mask))
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let mask = Bitboard::from_square(sq);
        Color::BOTH
            .into_iter()
            .find_map(|color| self.piece_of(color, mask).map(|piece| (color, piece)))
    }

    pub(crate) fn put(&mut self, color: Color, piece: Piece, mask: Bitboard) {
        self.pieces[color.index()][piece.index()] |= mask;
    }

    pub(crate) fn take(&mut self, color: Color, piece: Piece, mask: Bitboard) {
        self.pieces[color.index()][piece.index()] &= !mask;
    }

    pub(crate) fn relocate(&mut self, color: Color, piece: Piece, from: Bitboard, to: Bitboard) {
        let bb = &mut self.pieces[color.index()][piece.index()];
        *bb = (*bb & !from) | to;
    }

    /// Copy of the position with `color` to move and no undo history.
    ///
    /// The en-passant target only survives if `color` is already the side
    /// to move, since it belongs to that side's next move.
    pub(crate) fn scratch_for(&self, color: Color) -> Board {
        Board {
            pieces: self.pieces,
            castling: self.castling,
            en_passant: if color == self.side_to_move {
                self.en_passant
            } else {
                Bitboard::EMPTY
            },
            side_to_move: color,
            history: Vec::new(),
        }
    }

    /// The color-flipped position: every piece changes color and moves to
    /// the vertically mirrored square, and the other side is to move.
    /// Undo history is not carried over.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut board = Board::empty_board();
        for color in Color::BOTH {
            let flipped = color.opponent().index();
            for piece in Piece::ALL {
                board.pieces[flipped][piece.index()] =
                    self.pieces[color.index()][piece.index()].flip_vertical();
            }
            board.castling[flipped] = self.castling[color.index()].flip_vertical();
        }
        board.en_passant = self.en_passant.flip_vertical();
        board.side_to_move = self.side_to_move.opponent();
        board
    }

    /// Returns true if no square holds more than one piece.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for bb in self.pieces.iter().flatten() {
            if seen.intersects(*bb) {
                return false;
            }
            seen |= *bb;
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
