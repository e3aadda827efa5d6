//! pdp-engine - panel board simulation.
//!
//! Holds one bit-plane per color plus falling, swapping and chaining status
//! planes, and advances them one discrete tick at a time: swap, one row of
//! gravity, match clearing with chain tracking, and fair garbage rows.

pub mod board;
pub mod config;
pub mod error;
pub mod garbage;
pub mod gravity;
pub mod matching;
pub mod score;
pub mod step;
pub mod swap;

pub use board::{Board, Observation};
pub use config::{BoardConfig, ScoringMethod, MAX_COLORS, MAX_GARBAGE_ATTEMPTS};
pub use error::{BoardError, Result};
pub use garbage::GarbageRow;
pub use score::{calculate_score, Resolution, Score};

pub use pdp_core::{Action, BitPlane, MAX_HEIGHT, NUM_CELLS, WIDTH};
