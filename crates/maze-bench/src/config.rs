//! Benchmark configuration.
//!
//! A [`BenchConfig`] can be built in code or loaded from TOML:
//!
//! ```
//! use maze_bench::BenchConfig;
//!
//! let config = BenchConfig::from_toml_str(r#"
//!     name = "quick"
//!     strategies = ["bfs", "astar"]
//!     seed = 42
//!
//!     [[test_cases]]
//!     id = 1
//!     start = { row = 1, col = 1 }
//!     goal = { row = 13, col = 13 }
//! "#).unwrap();
//!
//! assert_eq!(config.strategies.len(), 2);
//! assert_eq!(config.test_cases.len(), 1);
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use maze_paths::{AnnealingParams, Budget, StrategyKind};
use serde::{Deserialize, Serialize};

use crate::fixtures::{TestCase, default_test_cases};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// What to benchmark and under which limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Benchmark name, used in logs and exports.
    pub name: String,
    /// Strategies to run, in report order.
    pub strategies: Vec<StrategyKind>,
    /// The start/goal pairs of the matrix.
    pub test_cases: Vec<TestCase>,
    /// Simulated annealing parameters.
    pub annealing: AnnealingParams,
    /// Seed for randomised strategies. Unseeded runs are not reproducible.
    pub seed: Option<u64>,
    /// Per-run cap on node expansions (annealing: iterations).
    pub max_expansions: Option<u64>,
    /// Per-run wall-clock limit in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Maze file to load instead of the built-in maze.
    pub maze: Option<PathBuf>,
}

impl BenchConfig {
    /// Creates a configuration with the given name and defaults for
    /// everything else: all five strategies over the ten built-in cases,
    /// unseeded, no limits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strategies: StrategyKind::ALL.to_vec(),
            test_cases: default_test_cases(),
            annealing: AnnealingParams::default(),
            seed: None,
            max_expansions: None,
            timeout_ms: None,
            maze: None,
        }
    }

    /// Loads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = StrategyKind>) -> Self {
        self.strategies = strategies.into_iter().collect();
        self
    }

    pub fn with_test_cases(mut self, cases: impl IntoIterator<Item = TestCase>) -> Self {
        self.test_cases = cases.into_iter().collect();
        self
    }

    pub fn with_annealing(mut self, params: AnnealingParams) -> Self {
        self.annealing = params;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis().try_into().unwrap_or(u64::MAX));
        self
    }

    pub fn with_maze(mut self, path: impl Into<PathBuf>) -> Self {
        self.maze = Some(path.into());
        self
    }

    /// The per-run timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// A fresh budget for one run.
    pub fn budget(&self) -> Budget {
        Budget::new(self.max_expansions, self.timeout())
    }

    /// Seed for one run on `case`, derived from [`seed`](Self::seed) and the
    /// case id. The same case always gets the same seed, whether it runs in a
    /// batch or alone.
    pub fn run_seed(&self, case: &TestCase) -> Option<u64> {
        self.seed
            .map(|seed| seed ^ u64::from(case.id).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// The test case with the given id.
    pub fn test_case(&self, id: u32) -> Option<&TestCase> {
        self.test_cases.iter().find(|c| c.id == id)
    }

    /// Checks the invariants that parsing alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategies.is_empty() {
            return Err(ConfigError::Invalid("no strategies selected".into()));
        }
        let mut ids = HashSet::new();
        if let Some(dup) = self.test_cases.iter().find(|c| !ids.insert(c.id)) {
            return Err(ConfigError::Invalid(format!(
                "duplicate test case id {}",
                dup.id
            )));
        }
        let a = &self.annealing;
        if !(a.cooling_rate > 0.0 && a.cooling_rate <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "cooling rate must be in (0, 1], got {}",
                a.cooling_rate
            )));
        }
        if !(a.initial_temperature.is_finite() && a.initial_temperature >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "initial temperature must be finite and non-negative, got {}",
                a.initial_temperature
            )));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new("maze benchmark")
    }
}
