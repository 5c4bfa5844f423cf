//! Chess board representation and game logic.
//!
//! Twelve bitboards hold the pieces. Moves are applied and taken back
//! through an undo history, and legality is checked by playing each
//! candidate move and looking at the mover's king.
//!
//! # Example
//! ```
//! use bitchess::board::{Bitboard, Board, Square};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(board.on_move_positions());
//! println!("White can reach {} squares", moves.popcount());
//!
//! let e2 = Bitboard::from_square(Square(1, 4));
//! let e4 = Bitboard::from_square(Square(3, 4));
//! assert!(board.make_move(e2, e4));
//! assert!(board.unmake_move());
//! assert_eq!(board, Board::new());
//! ```

mod builder;
mod error;
mod eval;
mod eval_terms;
mod legal;
mod make_unmake;
mod movegen;
pub mod prelude;
mod promotion;
mod render;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, SquareError};
pub use state::Board;
pub use types::{
    Bitboard, Color, GameStatus, Move, Piece, Singles, Square, Squares, PROMOTION_PIECES,
};

// Evaluation configuration
pub use eval::{EvalWeights, Evaluator};
pub use eval_terms::{tables, PawnFlaws, PieceSquareTables, STANDARD_TABLES};

// Search
pub use search::{SearchResult, MATE_SCORE};
