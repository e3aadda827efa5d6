//! pdp-search - look-ahead action selection over the panel engine.

mod beam;

pub use beam::BeamSearch;
