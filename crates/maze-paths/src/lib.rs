//! Search strategies for maze grids and a single result contract.
//!
//! Five interchangeable strategies implement [`Strategy`]:
//!
//! - **BFS** ([`BreadthFirst`]): shortest path, complete
//! - **DFS** ([`DepthFirst`]): complete, not optimal, reports cells visited
//! - **A\*** ([`AStar`]): shortest path with the Manhattan heuristic
//! - **Greedy best-first** ([`GreedyBestFirst`]): heuristic-only ordering
//! - **Simulated annealing** ([`SimulatedAnnealing`]): randomised local walk
//!   that may legitimately fail
//!
//! Each reports in its own [`RawOutput`] shape. [`solve`] validates the
//! endpoints, runs the strategy under a [`Budget`] and hands the output to
//! [`normalize`], which always yields a complete [`SearchResult`].
//!
//! | Outcome | Representation |
//! |---|---|
//! | path found | `Ok(SearchResult { found: true, .. })` |
//! | no path | `Ok(SearchResult { found: false, .. })` |
//! | start/goal off-grid or on a wall | `Err(SearchError::Configuration { .. })` |
//! | expansion cap or deadline hit | `Err(SearchError::BudgetExceeded { .. })` |

mod annealing;
mod astar;
mod bfs;
mod budget;
mod dfs;
mod distance;
mod error;
mod greedy;
mod kind;
mod normalize;
mod result;
mod solve;
mod space;
mod traits;

pub use annealing::{AnnealingParams, SimulatedAnnealing};
pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use budget::Budget;
pub use dfs::DepthFirst;
pub use distance::manhattan;
pub use error::{Endpoint, EndpointFault, SearchError};
pub use greedy::GreedyBestFirst;
pub use kind::{StrategyKind, UnknownStrategy};
pub use normalize::normalize;
pub use result::{RawOutput, SearchResult, UNKNOWN_VISITED};
pub use solve::{build_strategy, solve, validate_endpoint};
pub use traits::Strategy;
