//! Error types for chess board operations.

use std::fmt;

use super::types::Piece;

/// Error type for caller contract violations on the board API.
///
/// Game-rule outcomes (an illegal move, nothing to undo) are not errors;
/// those operations report a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// An origin selector had more than one bit set
    MultipleOrigins { count: u32 },
    /// No pawn stands on its promotion rank
    NoPendingPromotion,
    /// Pawns can only promote to knight, bishop, rook or queen
    InvalidPromotionPiece { piece: Piece },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MultipleOrigins { count } => {
                write!(f, "expected exactly one origin square, got {count}")
            }
            BoardError::NoPendingPromotion => {
                write!(f, "no pawn is waiting for promotion")
            }
            BoardError::InvalidPromotionPiece { piece } => {
                write!(f, "cannot promote to a {piece}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
