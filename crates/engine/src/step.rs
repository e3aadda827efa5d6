//! The per-tick state transition and one-ply expansion for search.

use pdp_core::Action;
use rayon::prelude::*;
use tracing::trace;

use crate::board::Board;
use crate::error::{BoardError, Result};
use crate::score::Score;

impl Board {
    /// Advance the board by exactly one tick.
    ///
    /// Input is applied first (a raise cancels any in-flight swap), then one
    /// row of gravity, then matching. A requested raise lands after matching
    /// so the new row never takes part in this tick's clear. An invalid swap
    /// is rejected before anything changes.
    pub fn step(&mut self, action: Action) -> Result<Score> {
        match action {
            Action::NoOp | Action::RaiseStack => self.end_swap(),
            Action::SwapAt(index) => self.swap(index)?,
        }

        self.drop_one();
        let resolution = self.resolve_matches();

        if action == Action::RaiseStack {
            self.raise_stack();
        }

        trace!(
            ?action,
            chain = resolution.chain,
            combo = resolution.combo,
            chain_number = self.chain_number,
            "step"
        );
        Ok(self.calculate_score(resolution))
    }

    /// [`Board::step`] addressed by flat action index.
    pub fn step_index(&mut self, index: usize) -> Result<Score> {
        let action = Action::from_index(index, self.height).ok_or(
            BoardError::ActionIndexOutOfRange {
                index,
                count: Action::count(self.height),
            },
        )?;
        self.step(action)
    }

    /// Every action's successor, in action-index order.
    pub fn children(&self) -> Result<Vec<(Board, Score)>> {
        let actions: Vec<Action> = Action::all(self.height).collect();
        actions
            .into_par_iter()
            .map(|action| {
                let mut child = self.clone();
                let score = child.step(action)?;
                Ok((child, score))
            })
            .collect()
    }
}
