//! Cooperative execution limits for a single search.

use std::time::{Duration, Instant};

use crate::error::SearchError;

/// How many ticks pass between two clock reads.
const DEADLINE_CHECK_INTERVAL: u64 = 64;

/// Expansion and wall-clock allowance for one run.
///
/// Every strategy calls [`tick`](Budget::tick) once per node expansion (or per
/// annealing iteration). When either limit is crossed the search stops with
/// [`SearchError::BudgetExceeded`]. The clock starts when the budget is
/// created.
#[derive(Debug, Clone)]
pub struct Budget {
    max_expansions: Option<u64>,
    timeout: Option<Duration>,
    started: Instant,
    expansions: u64,
}

impl Budget {
    /// A budget with neither limit.
    pub fn unlimited() -> Self {
        Self {
            max_expansions: None,
            timeout: None,
            started: Instant::now(),
            expansions: 0,
        }
    }

    /// A budget with the given optional limits.
    pub fn new(max_expansions: Option<u64>, timeout: Option<Duration>) -> Self {
        Self {
            max_expansions,
            timeout,
            ..Self::unlimited()
        }
    }

    /// Cap the number of expansions (builder).
    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Cap the wall-clock time (builder).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Expansions counted so far.
    #[inline]
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    /// Time since the budget was created.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Account for one expansion.
    #[inline]
    pub fn tick(&mut self) -> Result<(), SearchError> {
        self.expansions += 1;
        if let Some(max) = self.max_expansions {
            if self.expansions > max {
                return Err(self.exceeded());
            }
        }
        if let Some(timeout) = self.timeout {
            if self.expansions % DEADLINE_CHECK_INTERVAL == 0 && self.elapsed() > timeout {
                return Err(self.exceeded());
            }
        }
        Ok(())
    }

    fn exceeded(&self) -> SearchError {
        SearchError::BudgetExceeded {
            expansions: self.expansions,
            elapsed: self.elapsed(),
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::unlimited()
    }
}
