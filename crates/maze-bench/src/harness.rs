//! Benchmark harness.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use maze_core::Grid;
use maze_paths::{Budget, Strategy, StrategyKind, build_strategy, solve};
use serde::{Deserialize, Serialize};

use crate::config::BenchConfig;
use crate::fixtures::TestCase;
use crate::memory::{MemoryMeter, NullMeter};
use crate::metrics::{MetricsReport, aggregate};
use crate::record::{BenchmarkRecord, FailureKind};

static NULL_METER: NullMeter = NullMeter;

/// Runs strategies against test cases on one shared grid.
///
/// Every run is isolated: configuration errors, exhausted budgets and
/// panics inside a strategy become failed [`BenchmarkRecord`]s and the
/// batch carries on. Runs execute sequentially, one strategy at a time
/// over all test cases. With a configured seed every run reseeds its strategy
/// from [`BenchConfig::run_seed`], so a case gives the same result in a batch
/// as on its own, however often it is repeated.
pub struct Harness<'g> {
    grid: &'g Grid,
    config: BenchConfig,
    strategies: Vec<Box<dyn Strategy>>,
    meter: &'g dyn MemoryMeter,
}

impl<'g> Harness<'g> {
    /// Creates a harness running the configured strategies. Memory is not
    /// measured until a meter is attached with [`with_meter`](Self::with_meter).
    pub fn new(grid: &'g Grid, config: BenchConfig) -> Self {
        let strategies = config
            .strategies
            .iter()
            .map(|&kind| build_strategy(kind, &config.annealing, config.seed))
            .collect();
        Self {
            grid,
            config,
            strategies,
            meter: &NULL_METER,
        }
    }

    /// Sets the memory meter, usually the installed global allocator.
    pub fn with_meter(mut self, meter: &'g dyn MemoryMeter) -> Self {
        self.meter = meter;
        self
    }

    /// Replaces the configured strategies.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn Strategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Display names of the strategies, in run order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Runs strategy number `index` on `case`. Returns `None` if there is no
    /// such strategy.
    pub fn run_one(&mut self, index: usize, case: &TestCase) -> Option<BenchmarkRecord> {
        let budget = self.config.budget();
        let seed = self.config.run_seed(case);
        let strategy = self.strategies.get_mut(index)?;
        Some(execute(
            self.grid,
            strategy.as_mut(),
            self.meter,
            budget,
            seed,
            case,
        ))
    }

    /// Runs the first strategy of the given kind on `case`.
    pub fn run_case(&mut self, kind: StrategyKind, case: &TestCase) -> Option<BenchmarkRecord> {
        let index = self.strategies.iter().position(|s| s.kind() == kind)?;
        self.run_one(index, case)
    }

    /// Runs every strategy on every configured test case.
    pub fn run_batch(&mut self) -> BatchReport {
        let started = Instant::now();
        let Self {
            grid,
            config,
            strategies,
            meter,
        } = self;

        let mut records = Vec::with_capacity(strategies.len() * config.test_cases.len());
        for strategy in strategies.iter_mut() {
            for case in &config.test_cases {
                records.push(execute(
                    *grid,
                    strategy.as_mut(),
                    *meter,
                    config.budget(),
                    config.run_seed(case),
                    case,
                ));
            }
        }

        let report = BatchReport {
            name: config.name.clone(),
            records,
        };
        log::info!(
            "benchmark '{}': {} runs, {} failed in {:.3}s",
            report.name,
            report.records.len(),
            report.failures().count(),
            started.elapsed().as_secs_f64()
        );
        report
    }
}

fn execute(
    grid: &Grid,
    strategy: &mut dyn Strategy,
    meter: &dyn MemoryMeter,
    mut budget: Budget,
    seed: Option<u64>,
    case: &TestCase,
) -> BenchmarkRecord {
    let kind = strategy.kind();
    let name = strategy.name().to_owned();
    if let Some(seed) = seed {
        strategy.reseed(seed);
    }

    meter.reset();
    let started = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        solve(&mut *strategy, grid, case.start, case.goal, &mut budget)
    }));
    let elapsed = started.elapsed();
    let peak = meter.peak_bytes();

    match outcome {
        Ok(Ok(result)) => {
            log::debug!(
                "{name} case {}: found={} steps={} visited={} in {elapsed:?}, {peak} bytes",
                case.id,
                result.found,
                result.steps,
                result.visited
            );
            BenchmarkRecord::completed(case, kind, result, elapsed.as_secs_f64(), peak)
        }
        Ok(Err(err)) => {
            let failure = FailureKind::of(&err);
            log::warn!("{name} case {} failed ({failure}): {err}", case.id);
            BenchmarkRecord::failed(case, kind, &name, failure, err.to_string())
        }
        Err(payload) => {
            let msg = panic_message(&*payload);
            log::warn!("{name} case {} panicked: {msg}", case.id);
            BenchmarkRecord::failed(
                case,
                kind,
                &name,
                FailureKind::Panic,
                format!("strategy panicked: {msg}"),
            )
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

/// All records of one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Benchmark name from the configuration.
    pub name: String,
    /// One record per strategy and test case, strategy-major.
    pub records: Vec<BenchmarkRecord>,
}

impl BatchReport {
    /// Records of the strategy with the given display name.
    pub fn records_for<'a>(
        &'a self,
        strategy: &'a str,
    ) -> impl Iterator<Item = &'a BenchmarkRecord> + 'a {
        self.records.iter().filter(move |r| r.strategy == strategy)
    }

    /// Records of failed runs.
    pub fn failures(&self) -> impl Iterator<Item = &BenchmarkRecord> + '_ {
        self.records.iter().filter(|r| r.is_failure())
    }

    /// Aggregate the records into per-strategy metrics.
    pub fn metrics(&self) -> MetricsReport {
        aggregate(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_messages() {
        let p: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(&*p), "static");
        let p: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(&*p), "owned");
        let p: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(&*p), "unknown panic");
    }
}
