//! Gravity - panels fall exactly one row per tick.
//!
//! Columns are walked bottom-up so a whole stack above a gap moves together,
//! but never more than one row. Two columns reaching the same gap height on
//! different ticks is what decides chain timing, so this must not collapse
//! into a full drop.

use pdp_core::BitPlane;

use crate::board::Board;

impl Board {
    /// Advance gravity by one row and record what moved in `falling`.
    ///
    /// Cells in `swapping` neither fall nor act as gaps: a panel swapped out
    /// from under a stack keeps holding it up for one more tick.
    pub fn drop_one(&mut self) {
        self.falling = BitPlane::EMPTY;
        let protected = self.swapping;
        let mut empty = self.empty() & !protected;
        let mut row = BitPlane::row(self.height - 1);

        let num_colors = self.num_colors;
        for _ in 1..self.height {
            let landing = (self.chaining & !protected).shift_down() & row & empty;
            self.chaining |= landing;
            self.chaining ^= landing.shift_up();

            for plane in self.colors.iter_mut().take(num_colors) {
                let landing = (*plane & !protected).shift_down() & row & empty;
                self.falling |= landing;
                *plane |= landing;
                let vacated = landing.shift_up();
                *plane ^= vacated;
                empty ^= vacated;
            }
            row = row.shift_up();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Option<u8> = Some(0);
    const G: Option<u8> = Some(1);
    const E: Option<u8> = None;

    #[rustfmt::skip]
    fn tower() -> Board {
        let stack = [
            R, E, E, E, E, E,
            G, E, E, E, E, E,
            E, E, E, E, E, E,
            E, E, E, E, E, E,
        ];
        Board::from_list(&stack, None).expect("valid stack")
    }

    #[test]
    fn test_drops_one_row_per_tick() {
        let mut board = tower();
        board.drop_one();
        assert_eq!(board.colors()[0], BitPlane::cell(6));
        assert_eq!(board.colors()[1], BitPlane::cell(12));
        assert_eq!(board.falling(), BitPlane::cell(6) | BitPlane::cell(12));

        board.drop_one();
        assert_eq!(board.colors()[0], BitPlane::cell(12));
        assert_eq!(board.colors()[1], BitPlane::cell(18));
    }

    #[test]
    fn test_settled_board_has_nothing_falling() {
        let mut board = tower();
        for _ in 0..3 {
            board.drop_one();
        }
        assert_eq!(board.colors()[1], BitPlane::cell(18));
        assert!(board.falling().is_empty());
    }

    #[test]
    fn test_chaining_falls_with_panel() {
        let mut board = tower();
        board.chaining = BitPlane::cell(0);
        board.drop_one();
        assert_eq!(board.chaining(), BitPlane::cell(6));
    }

    #[test]
    fn test_swapping_cells_hold_up_stack() {
        let mut board = tower();
        board.swapping = BitPlane::cell(12);
        board.drop_one();
        // the gap is reserved by the swap, so nothing moves
        assert_eq!(board.colors()[0], BitPlane::cell(0));
        assert_eq!(board.colors()[1], BitPlane::cell(6));
        assert!(board.falling().is_empty());
    }
}
