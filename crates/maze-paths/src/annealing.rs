use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use maze_core::{Grid, Position};

use crate::budget::Budget;
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::kind::StrategyKind;
use crate::result::RawOutput;
use crate::space::SearchSpace;
use crate::traits::Strategy;

/// Tuning knobs for [`SimulatedAnnealing`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealingParams {
    /// Upper bound on loop iterations.
    pub max_iterations: u32,
    /// Temperature at the first iteration.
    pub initial_temperature: f64,
    /// Multiplicative decay applied after every iteration.
    pub cooling_rate: f64,
}

impl Default for AnnealingParams {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
        }
    }
}

/// Stochastic local search over single steps.
///
/// The walker never revisits a cell. At each iteration it draws one unvisited
/// open neighbour uniformly at random and moves there if the move brings it
/// closer to the goal than the best distance so far, or otherwise with
/// probability `exp((best - candidate) / temperature)`. The temperature decays
/// every iteration, accepted or not. The walk fails when it is boxed in or the
/// iteration limit runs out; that is an expected outcome, not an error.
///
/// All random draws come from the injected generator `R`, so a seeded
/// generator replays a run exactly.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<R: Rng = StdRng> {
    params: AnnealingParams,
    rng: R,
}

impl SimulatedAnnealing<StdRng> {
    /// Annealing with a deterministic generator seeded from `seed`.
    pub fn seeded(params: AnnealingParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    /// Annealing with a generator seeded from the thread-local source.
    pub fn from_entropy(params: AnnealingParams) -> Self {
        Self::seeded(params, rand::random())
    }
}

impl<R: Rng> SimulatedAnnealing<R> {
    /// Annealing drawing from `rng`.
    pub fn with_rng(params: AnnealingParams, rng: R) -> Self {
        Self { params, rng }
    }

    fn accepts(&mut self, best_cost: i32, candidate_cost: i32, temperature: f64) -> bool {
        if candidate_cost < best_cost {
            return true;
        }
        if temperature <= 0.0 {
            return false;
        }
        let p = (f64::from(best_cost - candidate_cost) / temperature).exp();
        self.rng.random::<f64>() < p
    }
}

impl<R: Rng + SeedableRng> Strategy for SimulatedAnnealing<R> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SimulatedAnnealing
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }

    fn search(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
        budget: &mut Budget,
    ) -> Result<RawOutput, SearchError> {
        let mut visited = SearchSpace::new(grid);
        let mut current = start;
        let mut temperature = self.params.initial_temperature;
        let mut path = vec![start];
        let mut best_cost = manhattan(start, goal);
        let mut candidates: Vec<Position> = Vec::with_capacity(4);
        visited.mark(start);

        let mut iterations = 0u32;
        while iterations < self.params.max_iterations && current != goal {
            budget.tick()?;
            iterations += 1;

            candidates.clear();
            candidates.extend(grid.neighbors(current).filter(|&n| !visited.is_marked(n)));
            if candidates.is_empty() {
                break;
            }

            let next = candidates[self.rng.random_range(0..candidates.len())];
            let next_cost = manhattan(next, goal);

            if self.accepts(best_cost, next_cost, temperature) {
                current = next;
                path.push(next);
                visited.mark(next);
                best_cost = next_cost;
            }

            temperature *= self.params.cooling_rate;
        }

        let found = current == goal;
        log::trace!(
            "annealing stopped after {iterations} iterations at {current} (found: {found}, temperature: {temperature:.3e})"
        );

        if found {
            let steps = path.len() - 1;
            Ok(RawOutput::PathSteps { path, steps })
        } else {
            Ok(RawOutput::PathSteps {
                path: Vec::new(),
                steps: 0,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#######
#.....#
#.....#
#.....#
#.....#
#######";

    fn run(sa: &mut SimulatedAnnealing, grid: &Grid, start: Position, goal: Position) -> RawOutput {
        sa.search(grid, start, goal, &mut Budget::unlimited()).unwrap()
    }

    #[test]
    fn corridor_is_always_solved() {
        // A one-wide corridor leaves exactly one unvisited neighbour, and it
        // always improves on the best distance.
        let g = Grid::parse("########\n#......#\n########").unwrap();
        let mut sa = SimulatedAnnealing::seeded(AnnealingParams::default(), 7);
        let out = run(&mut sa, &g, Position::new(1, 1), Position::new(1, 6));
        let RawOutput::PathSteps { path, steps } = out else {
            panic!("unexpected shape");
        };
        assert_eq!(steps, 5);
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn same_seed_same_walk() {
        let g = Grid::parse(ROOM).unwrap();
        let start = Position::new(1, 1);
        let goal = Position::new(4, 5);
        let a = run(
            &mut SimulatedAnnealing::seeded(AnnealingParams::default(), 42),
            &g,
            start,
            goal,
        );
        let b = run(
            &mut SimulatedAnnealing::seeded(AnnealingParams::default(), 42),
            &g,
            start,
            goal,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn reseeding_replays_the_walk() {
        let g = Grid::parse(ROOM).unwrap();
        let start = Position::new(1, 1);
        let goal = Position::new(4, 5);
        let mut sa = SimulatedAnnealing::seeded(AnnealingParams::default(), 42);
        let first = run(&mut sa, &g, start, goal);
        for _ in 0..3 {
            run(&mut sa, &g, start, goal);
        }
        sa.reseed(42);
        assert_eq!(run(&mut sa, &g, start, goal), first);
    }

    #[test]
    fn zero_iterations_only_solves_trivial_case() {
        let g = Grid::parse(ROOM).unwrap();
        let params = AnnealingParams {
            max_iterations: 0,
            ..AnnealingParams::default()
        };
        let mut sa = SimulatedAnnealing::seeded(params, 1);
        assert_eq!(
            run(&mut sa, &g, Position::new(2, 2), Position::new(2, 2)),
            RawOutput::PathSteps {
                path: vec![Position::new(2, 2)],
                steps: 0
            }
        );
        assert_eq!(
            run(&mut sa, &g, Position::new(2, 2), Position::new(2, 3)),
            RawOutput::PathSteps {
                path: Vec::new(),
                steps: 0
            }
        );
    }

    #[test]
    fn frozen_walk_only_takes_improving_steps() {
        // With zero temperature only strictly closer cells are accepted, so a
        // successful walk is a shortest path.
        let g = Grid::parse(ROOM).unwrap();
        let params = AnnealingParams {
            initial_temperature: 0.0,
            ..AnnealingParams::default()
        };
        for seed in 0..20 {
            let mut sa = SimulatedAnnealing::seeded(params, seed);
            let out = run(&mut sa, &g, Position::new(1, 1), Position::new(4, 5));
            if let RawOutput::PathSteps { path, steps } = out {
                if !path.is_empty() {
                    assert_eq!(steps, 7, "seed {seed}");
                }
            }
        }
    }

    #[test]
    fn single_exit_leads_straight_to_adjacent_goal() {
        let g = Grid::parse("#####\n#..##\n#####").unwrap();
        let mut sa = SimulatedAnnealing::seeded(AnnealingParams::default(), 3);
        let out = run(&mut sa, &g, Position::new(1, 2), Position::new(1, 1));
        assert_eq!(
            out,
            RawOutput::PathSteps {
                path: vec![Position::new(1, 2), Position::new(1, 1)],
                steps: 1
            }
        );
    }

    #[test]
    fn boxed_in_walk_fails() {
        // The walk can only wander right into a dead end; the goal is sealed off.
        let g = Grid::parse("######\n#.#..#\n######").unwrap();
        let mut sa = SimulatedAnnealing::seeded(AnnealingParams::default(), 3);
        let out = run(&mut sa, &g, Position::new(1, 3), Position::new(1, 1));
        assert_eq!(
            out,
            RawOutput::PathSteps {
                path: Vec::new(),
                steps: 0
            }
        );
    }

    #[test]
    fn iterations_are_charged_to_budget() {
        let g = Grid::parse(ROOM).unwrap();
        let mut sa = SimulatedAnnealing::seeded(AnnealingParams::default(), 5);
        let mut budget = Budget::unlimited().with_max_expansions(1);
        let res = sa.search(&g, Position::new(1, 1), Position::new(4, 5), &mut budget);
        assert!(res.unwrap_err().is_budget_exceeded());
    }
}
