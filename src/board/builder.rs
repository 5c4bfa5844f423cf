//! Fluent builder for constructing chess positions.
//!
//! Allows creating arbitrary positions piece by piece.
//!
//! # Example
//! ```
//! use bitchess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::state::START_CASTLING;
use super::{Bitboard, Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: [Bitboard; 2],
    en_passant: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: [Bitboard::EMPTY; 2],
            en_passant: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let board = Board::new();
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in board.pieces(color, piece).squares() {
                    builder.pieces.push((sq, color, piece));
                }
            }
        }
        builder.castling = START_CASTLING;
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Enable kingside castling (king to the g-file) for a color.
    #[must_use]
    pub fn castle_kingside(self, color: Color) -> Self {
        self.castle_to(color, 6)
    }

    /// Enable queenside castling (king to the c-file) for a color.
    #[must_use]
    pub fn castle_queenside(self, color: Color) -> Self {
        self.castle_to(color, 2)
    }

    fn castle_to(mut self, color: Color, file: usize) -> Self {
        self.castling[color.index()] |= Bitboard::from_square(Square(color.back_rank(), file));
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = [Bitboard::EMPTY; 2];
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant = None;
        self
    }

    /// Build the board. The result has no undo history.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty_board();

        for (square, color, piece) in self.pieces {
            board.put(color, piece, Bitboard::from_square(square));
        }

        board.side_to_move = self.side_to_move;
        board.castling = self.castling;
        board.en_passant = self
            .en_passant
            .map_or(Bitboard::EMPTY, Bitboard::from_square);

        board
    }
}
