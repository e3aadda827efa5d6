//! Raising the stack - fair random rows pushed in from the bottom.

use pdp_core::{BitPlane, WIDTH};
use rand::Rng;
use tracing::{debug, warn};

use crate::board::Board;
use crate::config::MAX_GARBAGE_ATTEMPTS;

/// One color index per column.
pub type GarbageRow = [u8; WIDTH];

impl Board {
    /// Push every plane up one row and write `row` into the bottom row.
    /// Whatever was in the top row is lost.
    pub fn insert_row(&mut self, row: &GarbageRow) {
        self.falling = self.falling.shift_up();
        self.chaining = self.chaining.shift_up();
        self.swapping = self.swapping.shift_up();

        let bottom = (self.height - 1) * WIDTH;
        let num_colors = self.num_colors;
        for (color, plane) in self.colors.iter_mut().take(num_colors).enumerate() {
            *plane = plane.shift_up();
            for (col, &panel) in row.iter().enumerate() {
                if panel as usize == color {
                    plane.set(bottom + col);
                }
            }
        }
    }

    /// Raise the stack by one random row that does not match on arrival.
    ///
    /// Returns `false` without touching anything when the top row is
    /// occupied. Rows are resampled until one produces no chain; after
    /// [`MAX_GARBAGE_ATTEMPTS`] samples the last one is kept regardless.
    pub fn raise_stack(&mut self) -> bool {
        if self.colors().iter().any(|&plane| (plane & BitPlane::TOP).any()) {
            debug!("stack already at the top, raise ignored");
            return false;
        }

        let mut attempts = 0;
        let row = loop {
            attempts += 1;
            let row = self.sample_row();
            if self.is_fair(&row) {
                break row;
            }
            if attempts >= MAX_GARBAGE_ATTEMPTS {
                warn!(
                    attempts,
                    num_colors = self.num_colors,
                    "no fair garbage row found, keeping a matching one"
                );
                break row;
            }
        };

        debug!(attempts, ?row, "raised stack");
        self.insert_row(&row);
        true
    }

    /// Whether inserting `row` would leave the board without a free chain.
    pub fn is_fair(&self, row: &GarbageRow) -> bool {
        let mut trial = self.clone();
        trial.insert_row(row);
        trial.resolve_matches().chain == 0
    }

    fn sample_row(&mut self) -> GarbageRow {
        let num_colors = self.num_colors;
        let rng = &mut self.rng;
        std::array::from_fn(|_| rng.gen_range(0..num_colors) as u8)
    }
}
