use std::cmp::Reverse;
use std::collections::BinaryHeap;

use maze_core::{Grid, Position};

use crate::budget::Budget;
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::kind::StrategyKind;
use crate::result::RawOutput;
use crate::space::SearchSpace;
use crate::traits::Strategy;

/// Greedy best-first search.
///
/// The frontier is ordered only by the Manhattan distance to the goal (ties on
/// position); the cost already paid is ignored. Cells are marked visited when
/// *expanded*, not when generated, so an unexpanded cell can sit in the
/// frontier several times and its parent is whichever expanded cell generated
/// it last. Duplicate entries of an already expanded cell are dropped when
/// they surface. Paths are not guaranteed to be shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBestFirst;

impl Strategy for GreedyBestFirst {
    fn kind(&self) -> StrategyKind {
        StrategyKind::GreedyBestFirst
    }

    fn search(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
        budget: &mut Budget,
    ) -> Result<RawOutput, SearchError> {
        let mut space = SearchSpace::new(grid);
        let mut open: BinaryHeap<Reverse<(i32, Position)>> = BinaryHeap::new();
        open.push(Reverse((manhattan(start, goal), start)));

        while let Some(Reverse((_, current))) = open.pop() {
            if current == goal {
                return Ok(RawOutput::Path(Some(space.path_to(goal))));
            }

            if !space.mark(current) {
                continue;
            }

            budget.tick()?;

            for next in grid.neighbors(current) {
                if space.is_marked(next) {
                    continue;
                }
                space.set_parent(next, current);
                open.push(Reverse((manhattan(next, goal), next)));
            }
        }

        Ok(RawOutput::Path(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
        match GreedyBestFirst
            .search(grid, start, goal, &mut Budget::unlimited())
            .unwrap()
        {
            RawOutput::Path(p) => p,
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn straight_line_when_unobstructed() {
        let g = Grid::parse("#######\n#.....#\n#######").unwrap();
        let path = run(&g, Position::new(1, 1), Position::new(1, 5)).unwrap();
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn path_is_valid_in_winding_maze() {
        let g = Grid::parse(
            "\
#########
#.......#
#.#####.#
#.#...#.#
#.#.#.#.#
#...#...#
#########",
        )
        .unwrap();
        let start = Position::new(5, 1);
        let goal = Position::new(3, 3);
        let path = run(&g, start, goal).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(path.iter().all(|&p| g.is_open(p)));
    }

    #[test]
    fn cell_keeps_its_last_generator() {
        // (3,1) is generated by the start, then again by (2,1) after the walk
        // goes round the block, and only then expanded. The later parent wins,
        // so the path takes the long way round; the duplicate entry is
        // dropped on dequeue.
        let g = Grid::parse(
            "\
#######
#...#.#
#.#.#.#
#...#.#
#.###.#
#.....#
#######",
        )
        .unwrap();
        let start = Position::new(3, 2);
        let goal = Position::new(1, 5);
        let mut budget = Budget::unlimited();
        let RawOutput::Path(Some(path)) = GreedyBestFirst
            .search(&g, start, goal, &mut budget)
            .unwrap()
        else {
            panic!("goal is reachable");
        };

        assert_eq!(path.len() - 1, 17);
        assert_eq!(path[1], Position::new(3, 3));
        assert_eq!(&path[6..8], &[Position::new(2, 1), Position::new(3, 1)]);
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert_eq!(budget.expansions(), 17);
    }

    #[test]
    fn unreachable_goal() {
        let g = Grid::parse("#####\n#.#.#\n#####").unwrap();
        assert_eq!(run(&g, Position::new(1, 1), Position::new(1, 3)), None);
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::parse("###\n#.#\n###").unwrap();
        assert_eq!(
            run(&g, Position::new(1, 1), Position::new(1, 1)),
            Some(vec![Position::new(1, 1)])
        );
    }
}
