use maze_core::{Grid, Position};

use crate::budget::Budget;
use crate::error::SearchError;
use crate::kind::StrategyKind;
use crate::result::RawOutput;

/// A grid search strategy.
///
/// Implementations receive endpoints that [`solve`](crate::solve) has already
/// checked (in bounds and open) and report their findings in their own
/// [`RawOutput`] shape. Failing to reach the goal is `Ok`, never an error.
pub trait Strategy {
    /// Identity tag, used to pick the result adapter.
    fn kind(&self) -> StrategyKind;

    /// Name recorded in results. Defaults to the kind's display name.
    fn name(&self) -> &str {
        self.kind().name()
    }

    /// Restart the strategy's random source from `seed`, so that the next
    /// search replays regardless of earlier ones. Deterministic strategies
    /// have nothing to restart.
    fn reseed(&mut self, _seed: u64) {}

    /// Search from `start` to `goal`, calling [`Budget::tick`] once per
    /// expansion.
    fn search(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
        budget: &mut Budget,
    ) -> Result<RawOutput, SearchError>;
}
