//! Match clearing and chain bookkeeping.

use pdp_core::BitPlane;

use crate::board::Board;
use crate::score::Resolution;

impl Board {
    /// Clear every run of three or more and update the chain.
    ///
    /// Panels that are falling or mid-swap cannot match. A clear that touches
    /// a chaining panel extends the chain; panels stacked above anything
    /// cleared become chaining so they may extend it once they land. The
    /// chain ends when no chaining panel is left.
    pub fn resolve_matches(&mut self) -> Resolution {
        let mut protected = self.falling | self.swapping;
        let mut chain_beam = BitPlane::EMPTY;
        let mut panels = BitPlane::EMPTY;

        let num_colors = self.num_colors;
        for plane in self.colors.iter_mut().take(num_colors) {
            let matches = (*plane & !protected).match_beam();
            chain_beam |= matches;
            *plane ^= matches;
            panels |= *plane;
        }

        let combo = chain_beam.popcount();
        if (self.chaining & chain_beam).any() {
            self.chain_number += 1;
        }
        let chain = if chain_beam.any() {
            self.chain_number + 1
        } else {
            0
        };

        let mut beam = chain_beam.shift_up() & panels;
        for _ in 0..self.height {
            beam |= beam.shift_up() & panels;
        }

        // a panel sitting on a swap is still in flight
        protected |= self.swapping.shift_up();
        self.chaining &= protected & panels;
        self.chaining |= panels & beam;
        if self.chaining.is_empty() {
            self.chain_number = 0;
        }

        Resolution { chain, combo }
    }
}
