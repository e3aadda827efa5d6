use thiserror::Error;

/// Contract violations rejected by the board.
///
/// Context-dependent no-ops (raising a full stack, a swap blocked by a
/// lateslip) are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("height {height} is outside 1..={max}")]
    HeightOutOfRange { height: usize, max: usize },

    #[error("color count {num_colors} is outside 1..={max}")]
    ColorsOutOfRange { num_colors: usize, max: usize },

    #[error("panels must form complete rows, got {len} cells")]
    UnevenRows { len: usize },

    #[error("too many panels: {len} cells exceeds {max}")]
    TooManyPanels { len: usize, max: usize },

    #[error("panel list is empty")]
    EmptyStack,

    #[error("panel {index} has color {color}, board only has {num_colors}")]
    PanelColorOutOfRange {
        index: usize,
        color: u8,
        num_colors: usize,
    },

    #[error("cannot swap off screen at cell {index}")]
    SwapOffScreen { index: usize },

    #[error("action index {index} is outside 0..{count}")]
    ActionIndexOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, BoardError>;
