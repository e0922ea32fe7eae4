//! Turns every [`RawOutput`] shape into a [`SearchResult`].
//!
//! One adapter exists per [`StrategyKind`]; the kind tag, not the shape of
//! the value, decides which one runs. Each adapter checks the fields only its
//! shape carries: a reported step count that disagrees with the path, or a
//! `found` flag that contradicts it, is logged at debug level and the path
//! wins. An adapter that receives a shape it does not expect still produces a
//! result, falling back to the conservative defaults below instead of failing:
//!
//! - `found` is `true` only when a non-empty path is present (and, if the
//!   strategy reported a flag, that flag is `true`);
//! - `steps` is `path.len() - 1`, or 0 for an empty path;
//! - `visited` is [`UNKNOWN_VISITED`] unless reported.

use crate::kind::StrategyKind;
use crate::result::{RawOutput, SearchResult, UNKNOWN_VISITED};

/// The fields kept from a raw output, before defaults are applied.
#[derive(Debug, Default)]
struct Adapted {
    path: Vec<maze_core::Position>,
    found: Option<bool>,
    visited: Option<usize>,
}

impl From<RawOutput> for Adapted {
    fn from(raw: RawOutput) -> Self {
        match raw {
            RawOutput::Path(path) => Adapted {
                path: path.unwrap_or_default(),
                ..Adapted::default()
            },
            RawOutput::PathSteps { path, .. } => Adapted {
                path,
                ..Adapted::default()
            },
            RawOutput::Explored {
                path,
                found,
                visited,
            } => Adapted {
                path,
                found: Some(found),
                visited: Some(visited),
            },
        }
    }
}

type Adapter = fn(&str, RawOutput) -> Adapted;

/// Path-only output (A*, greedy).
fn adapt_path(strategy: &str, raw: RawOutput) -> Adapted {
    match raw {
        RawOutput::Path(path) => Adapted {
            path: path.unwrap_or_default(),
            ..Adapted::default()
        },
        other => unexpected(strategy, "path", other),
    }
}

/// Path plus step count (BFS, simulated annealing). The count is checked
/// against the path and then dropped.
fn adapt_path_steps(strategy: &str, raw: RawOutput) -> Adapted {
    match raw {
        RawOutput::PathSteps { path, steps } => {
            let derived = path.len().saturating_sub(1);
            if steps != derived {
                log::debug!("{strategy}: reported {steps} steps, path has {derived}");
            }
            Adapted {
                path,
                ..Adapted::default()
            }
        }
        other => unexpected(strategy, "path+steps", other),
    }
}

/// Path, found flag and visited count (DFS).
fn adapt_explored(strategy: &str, raw: RawOutput) -> Adapted {
    match raw {
        RawOutput::Explored {
            path,
            found,
            visited,
        } => {
            if found == path.is_empty() {
                log::debug!(
                    "{strategy}: reported found={found} with a {}-cell path",
                    path.len()
                );
            }
            Adapted {
                path,
                found: Some(found),
                visited: Some(visited),
            }
        }
        other => unexpected(strategy, "path+found+visited", other),
    }
}

fn unexpected(strategy: &str, expected: &str, raw: RawOutput) -> Adapted {
    log::debug!("{strategy}: expected a {expected} output, adapting {raw:?} with defaults");
    Adapted::from(raw)
}

/// The adapter registered for `kind`.
fn adapter(kind: StrategyKind) -> Adapter {
    match kind {
        StrategyKind::BreadthFirst | StrategyKind::SimulatedAnnealing => adapt_path_steps,
        StrategyKind::DepthFirst => adapt_explored,
        StrategyKind::AStar | StrategyKind::GreedyBestFirst => adapt_path,
    }
}

/// Normalize the raw output of a `kind` strategy named `strategy`.
pub fn normalize(kind: StrategyKind, strategy: &str, raw: RawOutput) -> SearchResult {
    let adapted = adapter(kind)(strategy, raw);

    let found = !adapted.path.is_empty() && adapted.found.unwrap_or(true);
    let path = if found { adapted.path } else { Vec::new() };
    let steps = path.len().saturating_sub(1);

    SearchResult {
        found,
        path,
        steps,
        visited: adapted.visited.unwrap_or(UNKNOWN_VISITED),
        strategy: strategy.to_string(),
    }
}
