use maze_core::{Grid, Position, Tile};

use crate::annealing::{AnnealingParams, SimulatedAnnealing};
use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::budget::Budget;
use crate::dfs::DepthFirst;
use crate::error::{Endpoint, EndpointFault, SearchError};
use crate::greedy::GreedyBestFirst;
use crate::kind::StrategyKind;
use crate::normalize::normalize;
use crate::result::SearchResult;
use crate::traits::Strategy;

/// Check that `pos` is usable as the `endpoint` of a search on `grid`.
pub fn validate_endpoint(grid: &Grid, endpoint: Endpoint, pos: Position) -> Result<(), SearchError> {
    let reason = match grid.tile(pos) {
        Some(Tile::Open) => return Ok(()),
        Some(Tile::Wall) => EndpointFault::Wall,
        None => EndpointFault::OutOfBounds,
    };
    Err(SearchError::Configuration {
        endpoint,
        pos,
        reason,
    })
}

/// Run `strategy` from `start` to `goal` and normalize its output.
///
/// Both endpoints are validated before the strategy is invoked, identically
/// for every strategy. An unreachable goal yields `Ok` with
/// `found == false`.
pub fn solve(
    strategy: &mut dyn Strategy,
    grid: &Grid,
    start: Position,
    goal: Position,
    budget: &mut Budget,
) -> Result<SearchResult, SearchError> {
    validate_endpoint(grid, Endpoint::Start, start)?;
    validate_endpoint(grid, Endpoint::Goal, goal)?;

    let raw = strategy.search(grid, start, goal, budget)?;
    let result = normalize(strategy.kind(), strategy.name(), raw);
    log::trace!(
        "{} {start} -> {goal}: found={} steps={} expansions={}",
        result.strategy,
        result.found,
        result.steps,
        budget.expansions()
    );
    Ok(result)
}

/// Build the strategy for `kind`.
///
/// `seed` only affects [`StrategyKind::SimulatedAnnealing`]; without one the
/// annealer seeds itself from the thread-local generator.
pub fn build_strategy(
    kind: StrategyKind,
    annealing: &AnnealingParams,
    seed: Option<u64>,
) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::BreadthFirst => Box::new(BreadthFirst),
        StrategyKind::DepthFirst => Box::new(DepthFirst),
        StrategyKind::AStar => Box::new(AStar),
        StrategyKind::GreedyBestFirst => Box::new(GreedyBestFirst),
        StrategyKind::SimulatedAnnealing => match seed {
            Some(seed) => Box::new(SimulatedAnnealing::seeded(*annealing, seed)),
            None => Box::new(SimulatedAnnealing::from_entropy(*annealing)),
        },
    }
}
