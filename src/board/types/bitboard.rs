//! Bitboard type, compass shifts and operations.
//!
//! Bit `i` is square `i` (a1 = 0, b1 = 1, ..., h8 = 63). Every shift masks
//! off the file that would wrap around *before* shifting, so a piece on the
//! h-file never reappears on the a-file of the next rank.

use std::fmt::{self, Write};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// A 64-bit bitboard representing piece positions or attack squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_B: Bitboard = Bitboard(0x0202020202020202);
    pub const FILE_C: Bitboard = Bitboard(0x0404040404040404);
    pub const FILE_D: Bitboard = Bitboard(0x0808080808080808);
    pub const FILE_E: Bitboard = Bitboard(0x1010101010101010);
    pub const FILE_F: Bitboard = Bitboard(0x2020202020202020);
    pub const FILE_G: Bitboard = Bitboard(0x4040404040404040);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_2: Bitboard = Bitboard(0x000000000000FF00);
    pub const RANK_3: Bitboard = Bitboard(0x0000000000FF0000);
    pub const RANK_4: Bitboard = Bitboard(0x00000000FF000000);
    pub const RANK_5: Bitboard = Bitboard(0x000000FF00000000);
    pub const RANK_6: Bitboard = Bitboard(0x0000FF0000000000);
    pub const RANK_7: Bitboard = Bitboard(0x00FF000000000000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    const NOT_FILE_A: u64 = !Self::FILE_A.0;
    const NOT_FILE_H: u64 = !Self::FILE_H.0;
    const NOT_FILE_AB: u64 = !(Self::FILE_A.0 | Self::FILE_B.0);
    const NOT_FILE_GH: u64 = !(Self::FILE_G.0 | Self::FILE_H.0);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << (sq.0 * 8 + sq.1))
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if exactly one bit is set
    #[inline]
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1 << (sq.0 * 8 + sq.1))) != 0
    }

    /// Returns true if the two bitboards share at least one bit
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// Lowest set square, if any
    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_const(self.0.trailing_zeros() as usize))
        }
    }

    /// Mirror the board vertically (rank 1 <-> rank 8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Bitboard(self.0.swap_bytes())
    }

    /// Get the rank mask for a given rank index (0-7)
    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }

    /// Iterate over the set squares, lowest first
    #[inline]
    #[must_use]
    pub fn squares(self) -> Squares {
        Squares(self)
    }

    /// Iterate over the set bits as single-bit bitboards, lowest first
    #[inline]
    #[must_use]
    pub fn singles(self) -> Singles {
        Singles(self)
    }

    /// Render as an 8x8 grid, rank 8 on top
    #[must_use]
    pub fn grid(self) -> String {
        let mut out = String::with_capacity(8 * 17);
        for rank in (0..8).rev() {
            for file in 0..8 {
                let ch = if self.contains(Square(rank, file)) { '1' } else { '.' };
                out.push(ch);
                if file < 7 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

// Single-step compass shifts
impl Bitboard {
    /// Shift all bits north (toward rank 8)
    #[inline]
    #[must_use]
    pub const fn shift_north(self) -> Self {
        Bitboard(self.0 << 8)
    }

    /// Shift all bits south (toward rank 1)
    #[inline]
    #[must_use]
    pub const fn shift_south(self) -> Self {
        Bitboard(self.0 >> 8)
    }

    /// Shift all bits east (toward file h), dropping the h-file first
    #[inline]
    #[must_use]
    pub const fn shift_east(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_H) << 1)
    }

    /// Shift all bits west (toward file a), dropping the a-file first
    #[inline]
    #[must_use]
    pub const fn shift_west(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_A) >> 1)
    }

    #[inline]
    #[must_use]
    pub const fn shift_north_east(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_H) << 9)
    }

    #[inline]
    #[must_use]
    pub const fn shift_north_west(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_A) << 7)
    }

    #[inline]
    #[must_use]
    pub const fn shift_south_east(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_H) >> 7)
    }

    #[inline]
    #[must_use]
    pub const fn shift_south_west(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_A) >> 9)
    }

    /// One step toward the opponent's side for `color`
    #[inline]
    #[must_use]
    pub const fn shift_forward(self, color: Color) -> Self {
        match color {
            Color::White => self.shift_north(),
            Color::Black => self.shift_south(),
        }
    }

    /// One step back toward `color`'s own side
    #[inline]
    #[must_use]
    pub const fn shift_backward(self, color: Color) -> Self {
        match color {
            Color::White => self.shift_south(),
            Color::Black => self.shift_north(),
        }
    }
}

// Two-step shifts and knight jumps
impl Bitboard {
    #[inline]
    #[must_use]
    pub const fn shift_north_two(self) -> Self {
        Bitboard(self.0 << 16)
    }

    #[inline]
    #[must_use]
    pub const fn shift_south_two(self) -> Self {
        Bitboard(self.0 >> 16)
    }

    #[inline]
    #[must_use]
    pub const fn shift_east_two(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_GH) << 2)
    }

    #[inline]
    #[must_use]
    pub const fn shift_west_two(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_AB) >> 2)
    }

    #[inline]
    #[must_use]
    pub const fn shift_forward_two(self, color: Color) -> Self {
        match color {
            Color::White => self.shift_north_two(),
            Color::Black => self.shift_south_two(),
        }
    }

    /// North-north-east knight jump
    #[inline]
    #[must_use]
    pub const fn knight_nne(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_H) << 17)
    }

    #[inline]
    #[must_use]
    pub const fn knight_nee(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_GH) << 10)
    }

    #[inline]
    #[must_use]
    pub const fn knight_see(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_GH) >> 6)
    }

    #[inline]
    #[must_use]
    pub const fn knight_sse(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_H) >> 15)
    }

    #[inline]
    #[must_use]
    pub const fn knight_ssw(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_A) >> 17)
    }

    #[inline]
    #[must_use]
    pub const fn knight_sww(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_AB) >> 10)
    }

    #[inline]
    #[must_use]
    pub const fn knight_nww(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_AB) << 6)
    }

    #[inline]
    #[must_use]
    pub const fn knight_nnw(self) -> Self {
        Bitboard((self.0 & Self::NOT_FILE_A) << 15)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

impl fmt::Binary for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Bitboard {
    /// Lists the set squares, e.g. `{e2, e4}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, sq) in self.squares().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{sq}")?;
        }
        f.write_char('}')
    }
}

/// Iterator over set squares in a Bitboard
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.0.lsb()?;
        self.0 .0 &= self.0 .0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

/// Iterator over set bits in a Bitboard, one single-bit mask at a time
pub struct Singles(Bitboard);

impl Iterator for Singles {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        let bits = self.0 .0;
        let lowest = bits & bits.wrapping_neg();
        self.0 .0 = bits & (bits - 1);
        Some(Bitboard(lowest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}
