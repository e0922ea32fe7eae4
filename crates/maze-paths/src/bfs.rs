use std::collections::VecDeque;

use maze_core::{Grid, Position};

use crate::budget::Budget;
use crate::error::SearchError;
use crate::kind::StrategyKind;
use crate::result::RawOutput;
use crate::space::SearchSpace;
use crate::traits::Strategy;

/// Breadth-first search.
///
/// FIFO frontier; a cell is marked the moment it is enqueued, so it is never
/// queued twice. Returns a shortest path by edge count.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BreadthFirst
    }

    fn search(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
        budget: &mut Budget,
    ) -> Result<RawOutput, SearchError> {
        let mut space = SearchSpace::new(grid);
        let mut queue: VecDeque<Position> = VecDeque::new();

        space.mark(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                let path = space.path_to(goal);
                let steps = path.len().saturating_sub(1);
                return Ok(RawOutput::PathSteps { path, steps });
            }

            budget.tick()?;

            for next in grid.neighbors(current) {
                if space.mark(next) {
                    space.set_parent(next, current);
                    queue.push_back(next);
                }
            }
        }

        Ok(RawOutput::PathSteps {
            path: Vec::new(),
            steps: 0,
        })
    }
}
