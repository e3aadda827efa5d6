//! Player actions and their flat discrete index.

use serde::{Deserialize, Serialize};

use crate::bitplane::WIDTH;

/// One tick's worth of player input.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    NoOp,
    RaiseStack,
    /// Swap the panel at this cell with its right neighbour.
    SwapAt(usize),
}

impl Action {
    /// Size of the discrete action space for a board of `height` rows.
    pub const fn count(height: usize) -> usize {
        2 + (WIDTH - 1) * height
    }

    /// Decode a flat action index.
    ///
    /// 0 is `NoOp`, 1 is `RaiseStack`, the rest walk every swappable cell
    /// row by row, skipping the rightmost column.
    pub fn from_index(index: usize, height: usize) -> Option<Self> {
        match index {
            0 => Some(Self::NoOp),
            1 => Some(Self::RaiseStack),
            i if i < Self::count(height) => {
                let swap = i - 2;
                let row = swap / (WIDTH - 1);
                let col = swap % (WIDTH - 1);
                Some(Self::SwapAt(col + row * WIDTH))
            }
            _ => None,
        }
    }

    /// Encode as a flat action index. Swaps in the rightmost column have none.
    pub fn to_index(self) -> Option<usize> {
        match self {
            Self::NoOp => Some(0),
            Self::RaiseStack => Some(1),
            Self::SwapAt(cell) => {
                let col = cell % WIDTH;
                if col == WIDTH - 1 {
                    return None;
                }
                Some(2 + col + (cell / WIDTH) * (WIDTH - 1))
            }
        }
    }

    /// Every action of a board of `height` rows, in index order.
    pub fn all(height: usize) -> impl Iterator<Item = Self> {
        (0..Self::count(height)).filter_map(move |i| Self::from_index(i, height))
    }

    /// Whether a swap can be issued on a board of `height` rows.
    /// Non-swap actions are always valid.
    pub fn is_valid(self, height: usize) -> bool {
        match self {
            Self::SwapAt(cell) => cell % WIDTH != WIDTH - 1 && cell < WIDTH * height,
            _ => true,
        }
    }
}
