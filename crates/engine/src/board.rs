//! board state - one bit-plane per color plus falling/swapping/chaining status planes
//! rows 0..height of the shared 6x12 geometry are playable, row 0 is the top

use pdp_core::{BitPlane, NUM_CELLS, WIDTH};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::{BoardConfig, ScoringMethod, MAX_COLORS};
use crate::error::{BoardError, Result};
use crate::score::{self, Resolution, Score};

/// `[plane][row][col]` booleans: colors, then falling, chaining, swapping.
pub type Observation = Vec<Vec<[bool; WIDTH]>>;

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) colors: [BitPlane; MAX_COLORS],
    pub(crate) falling: BitPlane,
    pub(crate) swapping: BitPlane,
    pub(crate) chaining: BitPlane,
    pub(crate) chain_number: u32,
    pub(crate) height: usize,
    pub(crate) num_colors: usize,
    pub(crate) scoring: ScoringMethod,
    pub(crate) rng: ChaCha8Rng,
}

impl Board {
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    fn from_config(config: &BoardConfig) -> Self {
        let mut board = Self {
            colors: [BitPlane::EMPTY; MAX_COLORS],
            falling: BitPlane::EMPTY,
            swapping: BitPlane::EMPTY,
            chaining: BitPlane::EMPTY,
            chain_number: 0,
            height: config.height,
            num_colors: config.num_colors,
            scoring: config.scoring,
            rng: ChaCha8Rng::seed_from_u64(0),
        };
        board.seed(config.seed);
        board
    }

    /// Build a board from a flat row-major list of panels, top row first.
    ///
    /// Height is `stack.len() / WIDTH`. With no explicit color count the
    /// board gets one more color than the highest panel present.
    pub fn from_list(stack: &[Option<u8>], num_colors: Option<usize>) -> Result<Self> {
        if stack.is_empty() {
            return Err(BoardError::EmptyStack);
        }
        if stack.len() % WIDTH != 0 {
            return Err(BoardError::UnevenRows { len: stack.len() });
        }
        if stack.len() > NUM_CELLS {
            return Err(BoardError::TooManyPanels {
                len: stack.len(),
                max: NUM_CELLS,
            });
        }

        let num_colors = num_colors.unwrap_or_else(|| {
            stack
                .iter()
                .flatten()
                .max()
                .map_or(1, |&color| color as usize + 1)
        });
        let config = BoardConfig::default()
            .with_height(stack.len() / WIDTH)
            .with_colors(num_colors);
        let mut board = Self::new(config)?;

        for (index, panel) in stack.iter().enumerate() {
            let Some(color) = *panel else { continue };
            if color as usize >= board.num_colors {
                return Err(BoardError::PanelColorOutOfRange {
                    index,
                    color,
                    num_colors: board.num_colors,
                });
            }
            board.colors[color as usize].set(index);
        }
        Ok(board)
    }

    /// Flat row-major panel list over the playable rows.
    pub fn to_list(&self) -> Vec<Option<u8>> {
        let mut stack = vec![None; WIDTH * self.height];
        for (color, plane) in self.colors().iter().enumerate() {
            for index in (*plane & self.region()).iter_ones() {
                stack[index] = Some(color as u8);
            }
        }
        stack
    }

    /// Reseed the garbage RNG, drawing a fresh seed when none is given.
    /// Returns the seed in use.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(rand::random);
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        debug!(seed, "seeded garbage rng");
        seed
    }

    /// Clear every plane and the chain counter. Configuration and RNG survive.
    pub fn reset(&mut self) {
        self.colors = [BitPlane::EMPTY; MAX_COLORS];
        self.falling = BitPlane::EMPTY;
        self.swapping = BitPlane::EMPTY;
        self.chaining = BitPlane::EMPTY;
        self.chain_number = 0;
    }

    /// Restore the board invariants after direct plane edits: everything is
    /// clipped to the playable rows and a cell claimed by several colors
    /// keeps the lowest one.
    pub fn sanitize(&mut self) {
        let region = self.region();
        let mut claimed = BitPlane::EMPTY;
        for plane in self.colors.iter_mut().take(self.num_colors) {
            *plane &= region & !claimed;
            claimed |= *plane;
        }
        for plane in self.colors.iter_mut().skip(self.num_colors) {
            *plane = BitPlane::EMPTY;
        }
        self.falling &= region;
        self.swapping &= region;
        self.chaining &= region;
    }

    /// One-hot observation tensor, `[num_colors + 3][height][WIDTH]`.
    pub fn encode(&self) -> Observation {
        self.colors()
            .iter()
            .copied()
            .chain([self.falling, self.chaining, self.swapping])
            .map(|plane| {
                (0..self.height)
                    .map(|row| -> [bool; WIDTH] {
                        std::array::from_fn(|col| plane.contains(col + row * WIDTH))
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn calculate_score(&self, resolution: Resolution) -> Score {
        score::calculate_score(self.scoring, resolution, self.chain_number)
    }

    /// Playable rows of this board.
    #[inline]
    pub fn region(&self) -> BitPlane {
        BitPlane::region(self.height)
    }

    /// Cells holding any panel.
    #[inline]
    pub fn occupied(&self) -> BitPlane {
        self.colors()
            .iter()
            .fold(BitPlane::EMPTY, |acc, &plane| acc | plane)
    }

    /// Playable cells with no panel.
    #[inline]
    pub fn empty(&self) -> BitPlane {
        self.region() & !self.occupied()
    }

    #[inline]
    pub fn colors(&self) -> &[BitPlane] {
        &self.colors[..self.num_colors]
    }

    /// Direct plane access. Call [`Board::sanitize`] afterwards.
    #[inline]
    pub fn colors_mut(&mut self) -> &mut [BitPlane] {
        &mut self.colors[..self.num_colors]
    }

    #[inline]
    pub fn falling(&self) -> BitPlane {
        self.falling
    }

    #[inline]
    pub fn swapping(&self) -> BitPlane {
        self.swapping
    }

    #[inline]
    pub fn chaining(&self) -> BitPlane {
        self.chaining
    }

    #[inline]
    pub fn chain_number(&self) -> u32 {
        self.chain_number
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    #[inline]
    pub fn scoring(&self) -> ScoringMethod {
        self.scoring
    }

    pub fn set_scoring(&mut self, scoring: ScoringMethod) {
        self.scoring = scoring;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
