//! Game status type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Outcome of the end-of-game check for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Draw,
    WhiteWon,
    BlackWon,
}

impl GameStatus {
    /// The status when `color` has been checkmated
    #[must_use]
    pub const fn mated(color: Color) -> Self {
        match color {
            Color::White => GameStatus::BlackWon,
            Color::Black => GameStatus::WhiteWon,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Draw => "draw",
            GameStatus::WhiteWon => "white won",
            GameStatus::BlackWon => "black won",
        };
        f.write_str(text)
    }
}
