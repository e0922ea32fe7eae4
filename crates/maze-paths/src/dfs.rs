use maze_core::{Grid, Position};

use crate::budget::Budget;
use crate::error::SearchError;
use crate::kind::StrategyKind;
use crate::result::RawOutput;
use crate::space::SearchSpace;
use crate::traits::Strategy;

/// Depth-first search.
///
/// LIFO frontier; a cell is marked when pushed. Finds *a* path whenever one
/// exists, with no guarantee on its length. Reports how many cells it marked.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl Strategy for DepthFirst {
    fn kind(&self) -> StrategyKind {
        StrategyKind::DepthFirst
    }

    fn search(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
        budget: &mut Budget,
    ) -> Result<RawOutput, SearchError> {
        let mut space = SearchSpace::new(grid);
        let mut stack = vec![start];
        space.mark(start);

        let mut found = false;
        while let Some(current) = stack.pop() {
            if current == goal {
                found = true;
                break;
            }

            budget.tick()?;

            for next in grid.neighbors(current) {
                if space.mark(next) {
                    space.set_parent(next, current);
                    stack.push(next);
                }
            }
        }

        let path = if found {
            space.path_to(goal)
        } else {
            Vec::new()
        };
        Ok(RawOutput::Explored {
            path,
            found,
            visited: space.marked_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(grid: &Grid, start: Position, goal: Position) -> (Vec<Position>, bool, usize) {
        match DepthFirst
            .search(grid, start, goal, &mut Budget::unlimited())
            .unwrap()
        {
            RawOutput::Explored {
                path,
                found,
                visited,
            } => (path, found, visited),
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn finds_a_path_in_open_room() {
        let g = Grid::parse(
            "\
######
#....#
#....#
#....#
######",
        )
        .unwrap();
        let (path, found, visited) = run(&g, Position::new(1, 1), Position::new(3, 4));
        assert!(found);
        assert_eq!(path.first(), Some(&Position::new(1, 1)));
        assert_eq!(path.last(), Some(&Position::new(3, 4)));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(visited >= path.len());
        assert!(visited <= g.open_count());
    }

    #[test]
    fn explores_last_pushed_direction_first() {
        // From (1,1) the pushes are down (2,1) then right (1,2); right pops first.
        let g = Grid::parse("####\n#..#\n#..#\n####").unwrap();
        let (path, found, _) = run(&g, Position::new(1, 1), Position::new(2, 2));
        assert!(found);
        assert_eq!(
            path,
            vec![Position::new(1, 1), Position::new(1, 2), Position::new(2, 2)]
        );
    }

    #[test]
    fn unreachable_goal_reports_component_size() {
        let g = Grid::parse("######\n#..#.#\n######").unwrap();
        let (path, found, visited) = run(&g, Position::new(1, 1), Position::new(1, 4));
        assert!(!found);
        assert!(path.is_empty());
        assert_eq!(visited, 2);
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::parse("###\n#.#\n###").unwrap();
        let (path, found, visited) = run(&g, Position::new(1, 1), Position::new(1, 1));
        assert!(found);
        assert_eq!(path, vec![Position::new(1, 1)]);
        assert_eq!(visited, 1);
    }
}
