//! Benchmark record types.

use std::fmt;

use maze_core::Position;
use maze_paths::{SearchError, SearchResult, StrategyKind};
use serde::{Deserialize, Serialize};

use crate::fixtures::TestCase;

/// Why a run produced no measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Start or goal off the grid or on a wall.
    Configuration,
    /// The per-run budget ran out.
    Timeout,
    /// The strategy panicked.
    Panic,
}

impl FailureKind {
    /// Classify a search error.
    pub fn of(err: &SearchError) -> Self {
        match err {
            SearchError::Configuration { .. } => FailureKind::Configuration,
            SearchError::BudgetExceeded { .. } => FailureKind::Timeout,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureKind::Configuration => "configuration error",
            FailureKind::Timeout => "timeout",
            FailureKind::Panic => "panic",
        })
    }
}

/// Result of a single strategy run on a single test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Strategy display name.
    pub strategy: String,
    pub kind: StrategyKind,
    /// Test case id.
    pub test_case: u32,
    pub start: Position,
    pub goal: Position,
    pub result: SearchResult,
    /// Wall time of the search, zero for failed runs.
    pub wall_time_secs: f64,
    /// Peak heap growth during the search, zero for failed runs.
    pub peak_memory_bytes: u64,
    /// Error message of a failed run.
    pub error: Option<String>,
    pub failure: Option<FailureKind>,
}

impl BenchmarkRecord {
    /// A completed run. `found == false` is still a success here.
    pub fn completed(
        case: &TestCase,
        kind: StrategyKind,
        result: SearchResult,
        wall_time_secs: f64,
        peak_memory_bytes: u64,
    ) -> Self {
        Self {
            strategy: result.strategy.clone(),
            kind,
            test_case: case.id,
            start: case.start,
            goal: case.goal,
            result,
            wall_time_secs,
            peak_memory_bytes,
            error: None,
            failure: None,
        }
    }

    /// A failed run with zeroed measurements.
    pub fn failed(
        case: &TestCase,
        kind: StrategyKind,
        strategy: &str,
        failure: FailureKind,
        error: impl Into<String>,
    ) -> Self {
        Self {
            strategy: strategy.to_owned(),
            kind,
            test_case: case.id,
            start: case.start,
            goal: case.goal,
            result: SearchResult::not_found(strategy),
            wall_time_secs: 0.0,
            peak_memory_bytes: 0,
            error: Some(error.into()),
            failure: Some(failure),
        }
    }

    /// Whether the run failed instead of completing.
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    pub fn found(&self) -> bool {
        self.result.found
    }

    pub fn steps(&self) -> usize {
        self.result.steps
    }
}
