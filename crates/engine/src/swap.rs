//! Horizontal swaps and lateslip protection.

use pdp_core::{Action, BitPlane};
use tracing::debug;

use crate::board::Board;
use crate::error::{BoardError, Result};

impl Board {
    /// Swap cell `index` with its right neighbour.
    ///
    /// Either cell may be empty, so a panel can be slid into a gap. A panel
    /// still hanging in the air from last tick's swap cannot be grabbed again:
    /// if the new swap touches one, nothing moves. Either way the previous
    /// swap ends here.
    pub fn swap(&mut self, index: usize) -> Result<()> {
        if !Action::SwapAt(index).is_valid(self.height) {
            return Err(BoardError::SwapOffScreen { index });
        }

        let hanging = self.swapping & self.empty().shift_up();
        self.swapping = BitPlane::EMPTY;

        let cell = BitPlane::cell(index);
        let footprint = cell | cell.shift_right();
        if (hanging & footprint).any() {
            debug!(index, "swap blocked by lateslip");
            return Ok(());
        }

        let num_colors = self.num_colors;
        for plane in self.colors.iter_mut().take(num_colors) {
            let moved = (plane.shift_left() & cell) | (*plane & cell).shift_right();
            *plane &= !footprint;
            *plane |= moved;
            self.swapping |= moved;
        }

        // chain eligibility follows the panel, not the cell
        let chaining = self.chaining;
        self.chaining &= !footprint;
        self.chaining |= (chaining.shift_left() & cell) | (chaining & cell).shift_right();

        // both cells hold up whatever sits above them for one tick
        if self.swapping.any() {
            self.swapping = footprint;
        }
        Ok(())
    }

    /// Finish any in-flight swap without starting a new one.
    #[inline]
    pub(crate) fn end_swap(&mut self) {
        self.swapping = BitPlane::EMPTY;
    }
}
