use std::fmt;
use std::time::Duration;

use maze_core::Position;

/// Which end of a search an invalid position was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndpointFault {
    OutOfBounds,
    Wall,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => f.write_str("out of bounds"),
            EndpointFault::Wall => f.write_str("a wall"),
        }
    }
}

/// Errors raised by [`solve`](crate::solve).
///
/// "No path" is not an error: it is a [`SearchResult`](crate::SearchResult)
/// with `found == false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start or goal is outside the grid or on a wall. Raised before the
    /// strategy runs.
    #[error("configuration error: {endpoint} {pos} is {reason}")]
    Configuration {
        endpoint: Endpoint,
        pos: Position,
        reason: EndpointFault,
    },
    /// The run hit its expansion cap or deadline.
    #[error("search budget exhausted after {expansions} expansions ({elapsed:?})")]
    BudgetExceeded { expansions: u64, elapsed: Duration },
}

impl SearchError {
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, SearchError::Configuration { .. })
    }

    #[inline]
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, SearchError::BudgetExceeded { .. })
    }
}
