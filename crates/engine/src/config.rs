//! Board configuration and scoring presets.

use pdp_core::MAX_HEIGHT;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Most colors a board can hold.
pub const MAX_COLORS: usize = 6;

/// Samples tried by the garbage fairness loop before it gives up and keeps
/// the last row.
pub const MAX_GARBAGE_ATTEMPTS: usize = 1024;

/// How a tick's `(chain, combo)` resolution is turned into a score.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum ScoringMethod {
    /// Hand back the raw resolution, for search.
    #[default]
    Raw,
    /// Chain value, or the running chain number for a same-chain combo.
    Endless,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: usize,
    pub num_colors: usize,
    pub scoring: ScoringMethod,
    /// Garbage RNG seed; `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl BoardConfig {
    /// Full-size endless mode.
    pub fn endless() -> Self {
        Self {
            scoring: ScoringMethod::Endless,
            ..Self::default()
        }
    }

    /// Four rows, three colors. Small enough for quick training runs.
    pub fn endless_small() -> Self {
        Self {
            height: 4,
            num_colors: 3,
            scoring: ScoringMethod::Endless,
            seed: None,
        }
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn with_colors(mut self, num_colors: usize) -> Self {
        self.num_colors = num_colors;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringMethod) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HEIGHT).contains(&self.height) {
            return Err(BoardError::HeightOutOfRange {
                height: self.height,
                max: MAX_HEIGHT,
            });
        }
        if !(1..=MAX_COLORS).contains(&self.num_colors) {
            return Err(BoardError::ColorsOutOfRange {
                num_colors: self.num_colors,
                max: MAX_COLORS,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: MAX_HEIGHT,
            num_colors: MAX_COLORS,
            scoring: ScoringMethod::Raw,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_maximum() {
        let config = BoardConfig::default();
        assert_eq!(config.height, MAX_HEIGHT);
        assert_eq!(config.num_colors, MAX_COLORS);
        assert_eq!(config.scoring, ScoringMethod::Raw);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_validate() {
        assert!(BoardConfig::endless().validate().is_ok());
        assert!(BoardConfig::endless_small().validate().is_ok());
        assert_eq!(BoardConfig::endless_small().height, 4);
    }

    #[test]
    fn test_rejects_tall_board() {
        let err = BoardConfig::default().with_height(MAX_HEIGHT + 1).validate();
        assert_eq!(
            err,
            Err(BoardError::HeightOutOfRange {
                height: MAX_HEIGHT + 1,
                max: MAX_HEIGHT
            })
        );
    }

    #[test]
    fn test_rejects_zero_height_and_colors() {
        assert!(BoardConfig::default().with_height(0).validate().is_err());
        assert!(BoardConfig::default().with_colors(0).validate().is_err());
        assert!(BoardConfig::default()
            .with_colors(MAX_COLORS + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = BoardConfig::endless_small().with_seed(7);
        let json = serde_json::to_string(&config).expect("serialize");
        let back: BoardConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
