use super::super::{Bitboard, Board, Color, Piece, Square};

/// The (up to) eight squares adjacent to each king in `kings`.
#[inline]
pub(crate) fn king_aura(kings: Bitboard) -> Bitboard {
    let sideways = kings.shift_east() | kings.shift_west();
    let row = kings | sideways;
    sideways | row.shift_north() | row.shift_south()
}

/// Back-rank squares involved in one castling move.
struct CastlingLane {
    /// Where the king lands; also the bit in the castling rights.
    destination: usize,
    rook_home: usize,
    /// Must be empty.
    between: &'static [usize],
    /// Must not be attacked: the king's start, path and destination.
    king_path: [usize; 3],
}

const KINGSIDE: CastlingLane = CastlingLane {
    destination: 6,
    rook_home: 7,
    between: &[5, 6],
    king_path: [4, 5, 6],
};

const QUEENSIDE: CastlingLane = CastlingLane {
    destination: 2,
    rook_home: 0,
    between: &[1, 2, 3],
    king_path: [4, 3, 2],
};

impl Board {
    pub(crate) fn king_moves(&self, king: Bitboard, color: Color) -> Bitboard {
        (king_aura(king) & !self.occupied_by(color)) | self.castling_moves(king, color)
    }

    fn castling_moves(&self, king: Bitboard, color: Color) -> Bitboard {
        let rank = color.back_rank();
        let on_rank = |file: usize| Bitboard::from_square(Square(rank, file));

        if self.castling(color).is_empty() || king != on_rank(4) {
            return Bitboard::EMPTY;
        }

        let empty = self.empty();
        let rooks = self.pieces(color, Piece::Rook);
        let mut moves = Bitboard::EMPTY;

        for lane in [KINGSIDE, QUEENSIDE] {
            let destination = on_rank(lane.destination);
            if !self.castling(color).intersects(destination)
                || !rooks.intersects(on_rank(lane.rook_home))
            {
                continue;
            }

            let between = lane
                .between
                .iter()
                .fold(Bitboard::EMPTY, |acc, f| acc | on_rank(*f));
            if between & empty != between {
                continue;
            }

            let path = lane
                .king_path
                .iter()
                .fold(Bitboard::EMPTY, |acc, f| acc | on_rank(*f));
            if self.king_safe_for(color, path) == path {
                moves |= destination;
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn bb(names: &[&str]) -> Bitboard {
        names
            .iter()
            .fold(Bitboard::EMPTY, |acc, n| acc | Bitboard::from_square(sq(n)))
    }

    fn castling_setup() -> BoardBuilder {
        BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("a1"), Color::White, Piece::Rook)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .piece(sq("e8"), Color::Black, Piece::King)
            .castle_kingside(Color::White)
            .castle_queenside(Color::White)
    }

    #[test]
    fn test_aura_in_corner_and_center() {
        assert_eq!(king_aura(bb(&["a1"])), bb(&["a2", "b1", "b2"]));
        assert_eq!(king_aura(bb(&["e4"])).popcount(), 8);
        assert!(!king_aura(bb(&["h4"])).intersects(Bitboard::FILE_A));
    }

    #[test]
    fn test_no_moves_at_start() {
        let board = Board::new();
        let king = board.pieces(Color::White, Piece::King);
        assert!(board.king_moves(king, Color::White).is_empty());
    }

    #[test]
    fn test_both_castling_destinations() {
        let board = castling_setup().build();
        let moves = board.king_moves(bb(&["e1"]), Color::White);
        assert!(moves.contains(sq("g1")));
        assert!(moves.contains(sq("c1")));
    }

    #[test]
    fn test_castling_blocked_by_piece_between() {
        let board = castling_setup()
            .piece(sq("b1"), Color::White, Piece::Knight)
            .build();
        let moves = board.king_moves(bb(&["e1"]), Color::White);
        assert!(moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));
    }

    #[test]
    fn test_castling_through_attacked_square() {
        let board = castling_setup()
            .piece(sq("f8"), Color::Black, Piece::Rook)
            .build();
        let moves = board.king_moves(bb(&["e1"]), Color::White);
        assert!(!moves.contains(sq("g1")));
        assert!(moves.contains(sq("c1")));
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let board = castling_setup()
            .piece(sq("e7"), Color::Black, Piece::Rook)
            .build();
        let moves = board.king_moves(bb(&["e1"]), Color::White);
        assert!(!moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));
    }

    #[test]
    fn test_castling_requires_rook_on_corner() {
        let board = castling_setup().clear(sq("h1")).build();
        let moves = board.king_moves(bb(&["e1"]), Color::White);
        assert!(!moves.contains(sq("g1")));
    }

    #[test]
    fn test_castling_requires_rights() {
        let board = castling_setup().no_castling_rights().build();
        let moves = board.king_moves(bb(&["e1"]), Color::White);
        assert_eq!(moves, bb(&["d1", "d2", "e2", "f2", "f1"]));
    }

    #[test]
    fn test_b1_attack_does_not_stop_queenside() {
        let board = castling_setup()
            .piece(sq("b8"), Color::Black, Piece::Rook)
            .build();
        let moves = board.king_moves(bb(&["e1"]), Color::White);
        assert!(moves.contains(sq("c1")));
    }
}
