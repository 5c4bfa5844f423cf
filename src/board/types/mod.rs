//! Core chess types.
//!
//! This module contains the fundamental types used throughout the board core:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit board mask plus the compass shift primitives
//! - `Move` - an origin/destination pair
//! - `GameStatus` - result of the end-of-game check

mod bitboard;
mod moves;
mod piece;
mod square;
mod status;

pub use bitboard::{Bitboard, Singles, Squares};
pub use moves::Move;
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
pub use status::GameStatus;
