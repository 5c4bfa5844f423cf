//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - En passant, castling, mates and promotion
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Negamax
//! - `proptest.rs` - Property-based tests

mod edge_cases;

use crate::board::{Bitboard, Board, BoardBuilder, Color, Piece, Square};

/// Build a position from the first four fields of a FEN string:
/// placement, side to move, castling and en passant.
pub(super) fn position(fen: &str) -> Board {
    let mut fields = fen.split_whitespace();
    let mut builder = BoardBuilder::new();

    let placement = fields.next().expect("placement field");
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

    if fields.next() == Some("b") {
        builder = builder.side_to_move(Color::Black);
    }

    for c in fields.next().unwrap_or("-").chars() {
        builder = match c {
            'K' => builder.castle_kingside(Color::White),
            'Q' => builder.castle_queenside(Color::White),
            'k' => builder.castle_kingside(Color::Black),
            'q' => builder.castle_queenside(Color::Black),
            _ => builder,
        };
    }

    if let Some(ep) = fields.next().filter(|f| *f != "-") {
        builder = builder.en_passant(sq(ep));
    }

    builder.build()
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("square name")
}

pub(super) fn bb(name: &str) -> Bitboard {
    Bitboard::from_square(sq(name))
}

#[test]
fn test_position_helper_matches_start() {
    let board = position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(board, Board::new());
}
