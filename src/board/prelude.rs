//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use bitchess::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.status(), GameStatus::InProgress);
//! ```

pub use super::{
    Bitboard, Board, BoardBuilder, BoardError, Color, EvalWeights, Evaluator, GameStatus, Move,
    Piece, SearchResult, Square,
};
