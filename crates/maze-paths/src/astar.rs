use std::cmp::Ordering;
use std::collections::BinaryHeap;

use maze_core::{Grid, Position};

use crate::budget::Budget;
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::kind::StrategyKind;
use crate::result::RawOutput;
use crate::space::SearchSpace;
use crate::traits::Strategy;

/// Frontier entry, ordered for use in a max-heap `BinaryHeap` so that the
/// lowest `f` pops first, then the lowest `h`, then the lowest position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    h: i32,
    g: i32,
    pos: Position,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search with the Manhattan heuristic.
///
/// Keeps the best known `g` for every cell and re-queues a cell whenever a
/// strictly cheaper route to it is found. Outdated heap entries are not
/// removed; they are recognised on dequeue (their `g` is above the best known
/// one) and skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Strategy for AStar {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AStar
    }

    fn search(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
        budget: &mut Budget,
    ) -> Result<RawOutput, SearchError> {
        let (Some(start_idx), Some(_)) = (grid.index(start), grid.index(goal)) else {
            return Ok(RawOutput::Path(None));
        };

        let mut space = SearchSpace::new(grid);
        let mut best_g = vec![i32::MAX; grid.len()];
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();

        best_g[start_idx] = 0;
        let h = manhattan(start, goal);
        open.push(OpenEntry {
            f: h,
            h,
            g: 0,
            pos: start,
        });

        while let Some(current) = open.pop() {
            let Some(ci) = grid.index(current.pos) else {
                continue;
            };

            // Skip stale entries.
            if current.g > best_g[ci] {
                continue;
            }

            if current.pos == goal {
                return Ok(RawOutput::Path(Some(space.path_to(goal))));
            }

            budget.tick()?;

            let tentative_g = current.g + 1;
            for next in grid.neighbors(current.pos) {
                let Some(ni) = grid.index(next) else {
                    continue;
                };
                if tentative_g >= best_g[ni] {
                    continue;
                }
                best_g[ni] = tentative_g;
                space.set_parent(next, current.pos);
                let h = manhattan(next, goal);
                open.push(OpenEntry {
                    f: tentative_g + h,
                    h,
                    g: tentative_g,
                    pos: next,
                });
            }
        }

        Ok(RawOutput::Path(None))
    }
}
