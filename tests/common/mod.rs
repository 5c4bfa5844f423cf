//! Position helpers shared by the integration tests.

#![allow(dead_code)]

use bitchess::board::{Bitboard, Board, BoardBuilder, Color, Piece, Square};

/// Build a position from a FEN-style placement field and the side to
/// move. Castling rights and en passant are left empty.
pub fn position(placement: &str, side: Color) -> Board {
    let mut builder = BoardBuilder::new().side_to_move(side);
    for (i, row) in placement.split('/').enumerate() {
        let rank = 7 - i;
        let mut file = 0;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).expect("piece letter");
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            builder = builder.piece(Square(rank, file), color, piece);
            file += 1;
        }
    }
    builder.build()
}

pub fn sq(name: &str) -> Square {
    name.parse().expect("square name")
}

pub fn bb(name: &str) -> Bitboard {
    Bitboard::from_square(sq(name))
}
