//! Benchmark harness for maze search strategies.
//!
//! - [`BenchConfig`]: strategies, test cases and per-run limits, loadable
//!   from TOML.
//! - [`Harness`]: runs the strategy × test-case matrix over one shared
//!   [`Grid`](maze_core::Grid), timing each run and measuring its peak memory
//!   through a [`MemoryMeter`]. Failures are recorded, never propagated.
//! - [`aggregate`]: reduces [`BenchmarkRecord`]s to per-strategy
//!   [`MetricSummary`]s.
//!
//! # Example
//!
//! ```
//! use maze_bench::{BenchConfig, Harness, Metric, fixtures};
//! use maze_paths::StrategyKind;
//!
//! let grid = fixtures::default_grid().unwrap();
//! let config = BenchConfig::new("doc")
//!     .with_strategies([StrategyKind::BreadthFirst, StrategyKind::AStar]);
//!
//! let report = Harness::new(&grid, config).run_batch();
//! assert_eq!(report.records.len(), 20);
//!
//! let metrics = report.metrics();
//! let bfs = metrics.summary("BFS", Metric::CostOptimality).unwrap();
//! let astar = metrics.summary("A*", Metric::CostOptimality).unwrap();
//! assert_eq!(bfs.mean, astar.mean);
//! ```

pub mod config;
pub mod fixtures;
pub mod harness;
pub mod memory;
pub mod metrics;
pub mod record;

pub use config::{BenchConfig, ConfigError};
pub use fixtures::{DEFAULT_MAZE, TestCase, default_grid, default_test_cases};
pub use harness::{BatchReport, Harness};
pub use memory::{MemoryMeter, NullMeter, TrackingAllocator};
pub use metrics::{
    Leader, Leaders, Metric, MetricSummary, MetricsReport, StrategyMetrics, aggregate,
};
pub use record::{BenchmarkRecord, FailureKind};
