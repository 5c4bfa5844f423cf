//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::square::Square;

/// An origin/destination pair. Promotion is not part of a move; it is
/// applied afterwards through `Board::apply_promotion`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Build a move from two single-bit masks. Returns `None` unless both
    /// masks have exactly one bit set.
    #[must_use]
    pub fn from_masks(from: Bitboard, to: Bitboard) -> Option<Self> {
        if !from.is_single() || !to.is_single() {
            return None;
        }
        Some(Move {
            from: from.lsb()?,
            to: to.lsb()?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_mask(self) -> Bitboard {
        Bitboard::from_square(self.from)
    }

    #[inline]
    #[must_use]
    pub const fn to_mask(self) -> Bitboard {
        Bitboard::from_square(self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_masks_requires_single_bits() {
        let e2 = Bitboard::from_square(Square(1, 4));
        let e4 = Bitboard::from_square(Square(3, 4));
        let mv = Move::from_masks(e2, e4).unwrap();
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.from_mask(), e2);
        assert_eq!(mv.to_mask(), e4);

        assert_eq!(Move::from_masks(e2 | e4, e4), None);
        assert_eq!(Move::from_masks(e2, Bitboard::EMPTY), None);
    }
}
