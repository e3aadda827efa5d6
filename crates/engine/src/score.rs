use serde::{Deserialize, Serialize};

use crate::config::ScoringMethod;

/// Outcome of one match-and-chain pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// Chain link scored this tick, 0 if nothing cleared.
    pub chain: u32,
    /// Panels cleared this tick.
    pub combo: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Score {
    Raw(Resolution),
    Endless(u32),
}

impl Score {
    /// Scalar view: the chain value for raw scores, the reward otherwise.
    pub fn value(self) -> u32 {
        match self {
            Score::Raw(resolution) => resolution.chain,
            Score::Endless(reward) => reward,
        }
    }
}

/// Score a resolution. `chain_number` is the chain depth after the pass.
pub fn calculate_score(method: ScoringMethod, resolution: Resolution, chain_number: u32) -> Score {
    match method {
        ScoringMethod::Raw => Score::Raw(resolution),
        ScoringMethod::Endless => {
            let reward = if resolution.chain > 0 {
                resolution.chain
            } else if resolution.combo > 0 {
                chain_number
            } else {
                0
            };
            Score::Endless(reward)
        }
    }
}
