//! Mobility evaluation.
//!
//! Mobility is the number of legal destinations summed over every piece of
//! a side, counted as if that side were to move.

use crate::board::state::Board;
use crate::board::types::Color;

impl Board {
    /// Total legal destination squares over all of `color`'s pieces.
    #[must_use]
    pub fn mobility(&self, color: Color) -> u32 {
        let mut scratch = self.scratch_for(color);
        let origins = scratch.on_move_positions();
        origins
            .singles()
            .map(|origin| scratch.legal_moves(origin).popcount())
            .sum()
    }
}
