//! pdp core crate - bit-plane primitives and actions for the panel grid.

mod action;
mod bitplane;

pub use action::Action;
pub use bitplane::{BitPlane, MAX_HEIGHT, NUM_CELLS, WIDTH};
