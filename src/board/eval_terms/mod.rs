//! Evaluation terms.
//!
//! Contains evaluation functions for:
//! - Mobility (legal destinations per side)
//! - Pawn structure (doubled, blocked, isolated pawns)
//!
//! Material and piece-square constants live in [`tables`].

mod mobility;
mod pawn_structure;
pub mod tables;

pub use pawn_structure::PawnFlaws;
pub use tables::{PieceSquareTables, STANDARD_TABLES};
