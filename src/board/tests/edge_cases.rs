//! Edge case tests for special chess positions and moves.

use super::{bb, position, sq};
use crate::board::{Bitboard, Board, Color, GameStatus, Piece};

// ============================================================================
// En passant
// ============================================================================

#[test]
fn test_double_push_opens_en_passant_for_one_reply() {
    let mut board = Board::new();
    assert!(board.make_move(bb("e2"), bb("e4")));
    assert_eq!(board.en_passant(), bb("e3"));

    assert!(board.make_move(bb("g8"), bb("f6")));
    assert!(board.en_passant().is_empty());

    assert!(board.make_move(bb("g1"), bb("f3")));
    assert!(board.en_passant().is_empty());
}

#[test]
fn test_single_push_sets_no_target() {
    let mut board = Board::new();
    assert!(board.make_move(bb("e2"), bb("e3")));
    assert!(board.en_passant().is_empty());
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut board = position("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let before = board.clone();
    assert!(board.legal_moves(bb("e5")).contains(sq("d6")));

    assert!(board.make_move(bb("e5"), bb("d6")));
    assert!(board.piece_at(sq("d5")).is_none(), "captured pawn removed");
    assert_eq!(board.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));

    assert!(board.unmake_move());
    assert_eq!(board.piece_at(sq("d5")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("e5")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board, before);
}

#[test]
fn test_black_en_passant_removes_white_pawn() {
    let mut board = Board::new();
    for (from, to) in [("h2", "h3"), ("d7", "d5"), ("h3", "h4"), ("d5", "d4"), ("e2", "e4")] {
        assert!(board.make_move(bb(from), bb(to)), "{from}{to}");
    }
    assert_eq!(board.en_passant(), bb("e3"));
    let before = board.clone();

    assert!(board.make_move(bb("d4"), bb("e3")));
    assert!(board.piece_at(sq("e4")).is_none());
    assert_eq!(board.piece_at(sq("e3")), Some((Color::Black, Piece::Pawn)));
    assert!(board.unmake_move());
    assert_eq!(board, before);
}

#[test]
fn test_en_passant_expires_if_not_taken() {
    let mut board = Board::new();
    for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
        assert!(board.make_move(bb(from), bb(to)));
    }
    assert!(board.legal_moves(bb("e5")).contains(sq("d6")));
    assert!(board.make_move(bb("b1"), bb("c3")));
    assert!(board.make_move(bb("a6"), bb("a5")));
    assert!(!board.legal_moves(bb("e5")).contains(sq("d6")));
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Taking on c6 would clear the fifth rank between the rook and king.
    let mut board = position("8/8/8/KPp4r/8/8/8/6k1 w - c6 0 1");
    assert!(!board.legal_moves(bb("b5")).contains(sq("c6")));
    assert!(board.legal_moves(bb("b5")).contains(sq("b6")));
}

// ============================================================================
// Castling
// ============================================================================

#[test]
fn test_kingside_castle_moves_rook_and_undoes() {
    let mut board = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = board.clone();
    assert!(board.legal_moves(bb("e1")).contains(sq("g1")));

    assert!(board.make_move(bb("e1"), bb("g1")));
    assert_eq!(board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert!(board.piece_at(sq("h1")).is_none());
    assert!(board.castling(Color::White).is_empty());
    assert_eq!(board.castling(Color::Black), before.castling(Color::Black));

    assert!(board.unmake_move());
    assert_eq!(board, before);
}

#[test]
fn test_queenside_castle_for_black() {
    let mut board = position("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let before = board.clone();
    assert!(board.make_move(bb("e8"), bb("c8")));
    assert_eq!(board.piece_at(sq("d8")), Some((Color::Black, Piece::Rook)));
    assert_eq!(board.piece_at(sq("c8")), Some((Color::Black, Piece::King)));
    assert!(board.unmake_move());
    assert_eq!(board, before);
}

#[test]
fn test_rook_move_revokes_castling_permanently() {
    let mut board = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
    assert!(board.make_move(bb("h1"), bb("g1")));
    assert_eq!(board.castling(Color::White), bb("c1"));

    for (from, to) in [("a7", "a6"), ("g1", "h1"), ("a6", "a5"), ("a2", "a3"), ("b7", "b6")] {
        assert!(board.make_move(bb(from), bb(to)), "{from}{to}");
    }
    assert!(!board.castling(Color::White).contains(sq("g1")));
    assert!(!board.legal_moves(bb("e1")).contains(sq("g1")));
    assert!(board.legal_moves(bb("e1")).contains(sq("c1")));
}

#[test]
fn test_king_step_revokes_both_sides() {
    let mut board = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(board.make_move(bb("e1"), bb("e2")));
    assert!(board.make_move(bb("a8"), bb("a7")));
    assert!(board.make_move(bb("e2"), bb("e1")));
    assert!(board.castling(Color::White).is_empty());
    assert_eq!(board.castling(Color::Black), bb("g8"));
    assert!(!board.legal_moves(bb("e1")).intersects(bb("c1") | bb("g1")));
}

#[test]
fn test_capturing_rook_on_corner_revokes_victims_right() {
    let mut board = position("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1");
    let before = board.clone();
    assert!(board.make_move(bb("g2"), bb("a8")));
    assert_eq!(board.castling(Color::Black), bb("g8"));
    assert!(!board.legal_moves(bb("e8")).contains(sq("c8")));
    assert!(board.unmake_move());
    assert_eq!(board, before);
}

#[test]
fn test_castling_blocked_by_check() {
    let mut board = position("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    let king_moves = board.legal_moves(bb("e8"));
    assert!(!king_moves.intersects(bb("c8") | bb("g8")));
}

// ============================================================================
// Game status
// ============================================================================

#[test]
fn test_back_rank_mate() {
    let mut board = position("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(board.in_check());
    assert_eq!(board.status(), GameStatus::WhiteWon);
    assert!(board.legal_moves(board.on_move_positions()).is_empty());
}

#[test]
fn test_white_mated() {
    let mut board = Board::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        assert!(board.make_move(bb(from), bb(to)));
    }
    assert_eq!(board.status(), GameStatus::BlackWon);
    assert!(board.status().is_over());
}

#[test]
fn test_stalemate_is_draw() {
    let mut board = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.in_check());
    assert_eq!(board.status(), GameStatus::Draw);
    assert!(board.all_legal_moves().is_empty());
}

#[test]
fn test_check_with_escape_is_in_progress() {
    let mut board = position("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
    assert!(board.in_check());
    assert_eq!(board.status(), GameStatus::InProgress);
}

#[test]
fn test_lone_king_answers_check() {
    let mut board = position("4k3/8/8/1b6/8/8/3r4/3K4 w - - 0 1");
    assert!(board.in_check());
    let moves = board.all_legal_moves();
    assert!(moves.iter().all(|mv| mv.from == sq("d1")));
    assert_eq!(
        board.legal_moves(bb("d1")),
        bb("c1") | bb("d2") | bb("e1")
    );
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let mut board = position("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    assert!(board.legal_moves(bb("e2")).is_empty());
    assert!(!board.is_move_legal(bb("e2"), bb("d3")));
}

#[test]
fn test_king_cannot_step_onto_attacked_square() {
    let mut board = position("4k3/8/8/3r4/8/8/8/4K3 w - - 0 1");
    assert_eq!(board.legal_moves(bb("e1")), bb("e2") | bb("f1") | bb("f2"));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    // The pawn gives check and the rook behind it covers d2.
    let mut board = position("3rk3/8/8/8/8/8/3p4/4K3 w - - 0 1");
    assert!(board.in_check());
    let moves = board.legal_moves(bb("e1"));
    assert_eq!(moves, bb("d1") | bb("e2") | bb("f1") | bb("f2"));
}

#[test]
fn test_empty_and_occupancy_queries() {
    let board = Board::new();
    assert_eq!(board.white() | board.black() | board.empty(), Bitboard::ALL);
    assert!(!board.white().intersects(board.black()));
}
