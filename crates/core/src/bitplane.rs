//! bit-plane representation - one bit per grid cell, row-major, bit 0 = top-left
//! 6x12 = 72 cells does not fit a u64, so planes are packed into a u128

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use serde::{Deserialize, Serialize};

/// Panels per row.
pub const WIDTH: usize = 6;
/// Tallest supported board.
pub const MAX_HEIGHT: usize = 12;
/// Cells in a maximum-height board.
pub const NUM_CELLS: usize = WIDTH * MAX_HEIGHT;

const FULL_BITS: u128 = (1u128 << NUM_CELLS) - 1;
const TOP_BITS: u128 = (1u128 << WIDTH) - 1;
const LEFT_WALL_BITS: u128 = {
    let mut bits = 0u128;
    let mut index = 0;
    while index < NUM_CELLS {
        bits |= 1u128 << index;
        index += WIDTH;
    }
    bits
};
const RIGHT_WALL_BITS: u128 = LEFT_WALL_BITS << (WIDTH - 1);
// Everything except the left wall. Masking with this before a right-to-left
// move (or after a left-to-right move) keeps bits from wrapping across rows.
const RIGHT_BLOCK_BITS: u128 = FULL_BITS ^ LEFT_WALL_BITS;

/// One boolean property across every cell of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitPlane(u128);

impl BitPlane {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(FULL_BITS);
    pub const TOP: Self = Self(TOP_BITS);
    pub const BOTTOM: Self = Self(TOP_BITS << (NUM_CELLS - WIDTH));
    pub const LEFT_WALL: Self = Self(LEFT_WALL_BITS);
    pub const RIGHT_WALL: Self = Self(RIGHT_WALL_BITS);

    /// Build a plane from raw bits, dropping anything outside the grid.
    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits & FULL_BITS)
    }

    #[inline(always)]
    pub const fn bits(self) -> u128 {
        self.0
    }

    /// Single-cell plane. Indices past the grid give an empty plane.
    #[inline]
    pub const fn cell(index: usize) -> Self {
        if index < NUM_CELLS {
            Self(1u128 << index)
        } else {
            Self::EMPTY
        }
    }

    /// All cells of one row (0 = top).
    #[inline]
    pub const fn row(row: usize) -> Self {
        if row < MAX_HEIGHT {
            Self(TOP_BITS << (row * WIDTH))
        } else {
            Self::EMPTY
        }
    }

    /// Rows `0..height`, the playable area of a board of that height.
    #[inline]
    pub const fn region(height: usize) -> Self {
        if height >= MAX_HEIGHT {
            Self::FULL
        } else {
            Self((1u128 << (height * WIDTH)) - 1)
        }
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index < NUM_CELLS && (self.0 >> index) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, index: usize) {
        *self |= Self::cell(index);
    }

    #[inline]
    pub fn clear(&mut self, index: usize) {
        self.0 &= !Self::cell(index).0;
    }

    /// Move every bit one column left; column 0 falls off instead of wrapping.
    #[inline(always)]
    pub const fn shift_left(self) -> Self {
        Self((self.0 & RIGHT_BLOCK_BITS) >> 1)
    }

    /// Move every bit one column right; the last column falls off.
    #[inline(always)]
    pub const fn shift_right(self) -> Self {
        Self((self.0 << 1) & RIGHT_BLOCK_BITS)
    }

    /// Move every bit one row towards the top; row 0 falls off.
    #[inline(always)]
    pub const fn shift_up(self) -> Self {
        Self(self.0 >> WIDTH)
    }

    /// Move every bit one row towards the bottom; the last row falls off.
    #[inline(always)]
    pub const fn shift_down(self) -> Self {
        Self((self.0 << WIDTH) & FULL_BITS)
    }

    /// Flood every set bit upward to the top of its column in log2(H) steps.
    #[inline]
    pub const fn beam_up(self) -> Self {
        let mut bits = self.0;
        bits |= bits >> WIDTH;
        bits |= bits >> (2 * WIDTH);
        bits |= bits >> (4 * WIDTH);
        bits |= bits >> (8 * WIDTH);
        Self(bits)
    }

    /// Cells belonging to a horizontal or vertical run of three or more.
    ///
    /// A cell survives the triple AND only as the middle of a run; spreading
    /// the survivors back out one step each way recovers the run's ends.
    #[inline]
    pub const fn match_beam(self) -> Self {
        let residual = Self(self.0 & self.shift_left().0 & self.shift_right().0);
        let horizontal = residual.0 | residual.shift_left().0 | residual.shift_right().0;

        let residual = Self(self.0 & self.shift_up().0 & self.shift_down().0);
        let vertical = residual.0 | residual.shift_up().0 | residual.shift_down().0;

        Self(horizontal | vertical)
    }

    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Indices of set cells, ascending.
    pub fn iter_ones(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(index)
        })
    }

    /// One bool per cell over the whole grid.
    pub fn to_list(self) -> Vec<bool> {
        (0..NUM_CELLS).map(|index| self.contains(index)).collect()
    }

    /// Inverse of [`BitPlane::to_list`]; entries past the grid are ignored.
    pub fn from_list(cells: &[bool]) -> Self {
        cells
            .iter()
            .take(NUM_CELLS)
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .fold(Self::EMPTY, |plane, (index, _)| plane | Self::cell(index))
    }
}

impl BitAnd for BitPlane {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for BitPlane {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for BitPlane {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

/// Complement within the grid.
impl Not for BitPlane {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0 & FULL_BITS)
    }
}

impl BitAndAssign for BitPlane {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for BitPlane {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for BitPlane {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Display for BitPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..MAX_HEIGHT {
            for col in 0..WIDTH {
                let filled = self.contains(col + row * WIDTH);
                write!(f, "{}", if filled { "@ " } else { "* " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
