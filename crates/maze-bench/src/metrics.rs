//! Per-strategy statistics over benchmark records.
//!
//! [`aggregate`] reduces a record set to one [`StrategyMetrics`] per
//! strategy. Each metric keeps its raw values next to the mean, population
//! standard deviation, minimum and maximum. Failed runs contribute their
//! zeroed measurements like any other record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::BenchmarkRecord;

/// The four measured quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// 1 for a found path, 0 otherwise. The mean is the success rate.
    Completeness,
    /// Path length in steps.
    CostOptimality,
    /// Wall time in seconds.
    TimeComplexity,
    /// Peak memory in bytes.
    SpaceComplexity,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Completeness,
        Metric::CostOptimality,
        Metric::TimeComplexity,
        Metric::SpaceComplexity,
    ];

    /// Stable machine-readable key.
    pub const fn key(self) -> &'static str {
        match self {
            Metric::Completeness => "completeness",
            Metric::CostOptimality => "cost_optimality",
            Metric::TimeComplexity => "time_complexity",
            Metric::SpaceComplexity => "space_complexity",
        }
    }

    fn value(self, record: &BenchmarkRecord) -> f64 {
        match self {
            Metric::Completeness => {
                if record.found() {
                    1.0
                } else {
                    0.0
                }
            }
            Metric::CostOptimality => record.steps() as f64,
            Metric::TimeComplexity => record.wall_time_secs,
            Metric::SpaceComplexity => record.peak_memory_bytes as f64,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Summary statistics of one metric for one strategy.
///
/// All statistics are `None` when there are no values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub values: Vec<f64>,
    pub mean: Option<f64>,
    /// Population standard deviation.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MetricSummary {
    pub fn from_values(values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            values,
            mean: Some(mean),
            std: Some(variance.sqrt()),
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// All metric summaries of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    pub strategy: String,
    pub runs: usize,
    pub completeness: MetricSummary,
    pub cost_optimality: MetricSummary,
    pub time_complexity: MetricSummary,
    pub space_complexity: MetricSummary,
}

impl StrategyMetrics {
    fn from_records(strategy: &str, records: &[&BenchmarkRecord]) -> Self {
        let summary =
            |m: Metric| MetricSummary::from_values(records.iter().map(|r| m.value(r)).collect());
        Self {
            strategy: strategy.to_owned(),
            runs: records.len(),
            completeness: summary(Metric::Completeness),
            cost_optimality: summary(Metric::CostOptimality),
            time_complexity: summary(Metric::TimeComplexity),
            space_complexity: summary(Metric::SpaceComplexity),
        }
    }

    pub fn get(&self, metric: Metric) -> &MetricSummary {
        match metric {
            Metric::Completeness => &self.completeness,
            Metric::CostOptimality => &self.cost_optimality,
            Metric::TimeComplexity => &self.time_complexity,
            Metric::SpaceComplexity => &self.space_complexity,
        }
    }
}

/// The best strategy for one metric and its mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub strategy: String,
    pub mean: f64,
}

/// The best strategy per metric. On equal means the strategy listed first
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaders {
    /// Highest success rate.
    pub most_complete: Option<Leader>,
    /// Fewest average steps.
    pub most_cost_optimal: Option<Leader>,
    /// Lowest average wall time.
    pub fastest: Option<Leader>,
    /// Lowest average peak memory.
    pub most_memory_efficient: Option<Leader>,
}

/// Metrics of every strategy, in the order strategies first appear in the
/// records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    strategies: Vec<StrategyMetrics>,
}

impl MetricsReport {
    pub fn get(&self, strategy: &str) -> Option<&StrategyMetrics> {
        self.strategies.iter().find(|s| s.strategy == strategy)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyMetrics> + '_ {
        self.strategies.iter()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// One metric of one strategy.
    pub fn summary(&self, strategy: &str, metric: Metric) -> Option<&MetricSummary> {
        self.get(strategy).map(|s| s.get(metric))
    }

    pub fn leaders(&self) -> Leaders {
        Leaders {
            most_complete: self.best(Metric::Completeness, |a, b| a > b),
            most_cost_optimal: self.best(Metric::CostOptimality, |a, b| a < b),
            fastest: self.best(Metric::TimeComplexity, |a, b| a < b),
            most_memory_efficient: self.best(Metric::SpaceComplexity, |a, b| a < b),
        }
    }

    fn best(&self, metric: Metric, better: impl Fn(f64, f64) -> bool) -> Option<Leader> {
        let mut best: Option<Leader> = None;
        for s in &self.strategies {
            let Some(mean) = s.get(metric).mean else {
                continue;
            };
            if best.as_ref().is_none_or(|b| better(mean, b.mean)) {
                best = Some(Leader {
                    strategy: s.strategy.clone(),
                    mean,
                });
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a MetricsReport {
    type Item = &'a StrategyMetrics;
    type IntoIter = std::slice::Iter<'a, StrategyMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.strategies.iter()
    }
}

/// Group `records` by strategy name and summarise every metric.
pub fn aggregate(records: &[BenchmarkRecord]) -> MetricsReport {
    let mut groups: Vec<(&str, Vec<&BenchmarkRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(name, _)| *name == record.strategy) {
            Some((_, group)) => group.push(record),
            None => groups.push((record.strategy.as_str(), vec![record])),
        }
    }
    MetricsReport {
        strategies: groups
            .iter()
            .map(|(name, group)| StrategyMetrics::from_records(name, group))
            .collect(),
    }
}
