use std::fmt;

use super::{Bitboard, Board, Color, Piece, Square};

impl Board {
    /// One line per non-empty bitboard, in hex.
    #[must_use]
    pub fn describe_bitboards(&self) -> String {
        let mut out = String::new();
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let bb = self.pieces(color, piece);
                if !bb.is_empty() {
                    out.push_str(&format!("{color} {piece}: {bb:#018x}\n"));
                }
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BORDER: &str = "  +---+---+---+---+---+---+---+---+";

        writeln!(f, "{BORDER}")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => piece.to_colored_char(color),
                    None => ' ',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;

        write!(f, "{} to move", self.side_to_move)?;
        let castling = self.castling(Color::White) | self.castling(Color::Black);
        if castling != Bitboard::EMPTY {
            write!(f, ", castling {castling}")?;
        }
        if !self.en_passant.is_empty() {
            write!(f, ", en passant {}", self.en_passant)?;
        }
        Ok(())
    }
}
