//! The built-in maze and test cases.

use maze_core::{Grid, GridError, Position};
use serde::{Deserialize, Serialize};

/// The 15×15 maze benchmarked when no other maze is configured.
pub const DEFAULT_MAZE: &str = "\
###############
#.............#
#.#####.#####.#
#.#...#.#...#.#
#.#.#.#.#.#.#.#
#...#...#.#...#
#####.###.#####
#.....#.......#
#.###.#.#####.#
#...#...#.....#
###.#####.###.#
#.........#...#
#.#######.#.#.#
#.............#
###############";

/// One start/goal pair of the benchmark matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// 1-based identifier, unique within a configuration.
    pub id: u32,
    pub start: Position,
    pub goal: Position,
}

impl TestCase {
    pub const fn new(id: u32, start: Position, goal: Position) -> Self {
        Self { id, start, goal }
    }
}

/// Parse [`DEFAULT_MAZE`].
pub fn default_grid() -> Result<Grid, GridError> {
    Grid::parse(DEFAULT_MAZE)
}

/// The ten built-in cases: top row to bottom row, sliding towards each
/// other from `(1,1) -> (13,13)` to `(1,10) -> (13,4)`.
pub fn default_test_cases() -> Vec<TestCase> {
    (0..10)
        .map(|i| {
            TestCase::new(
                i as u32 + 1,
                Position::new(1, 1 + i),
                Position::new(13, 13 - i),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_maze_is_bordered() {
        let g = default_grid().unwrap();
        assert_eq!((g.width(), g.height()), (15, 15));
        for i in 0..15 {
            assert!(!g.is_open(Position::new(0, i)));
            assert!(!g.is_open(Position::new(14, i)));
            assert!(!g.is_open(Position::new(i, 0)));
            assert!(!g.is_open(Position::new(i, 14)));
        }
    }

    #[test]
    fn default_cases_sit_on_open_cells() {
        let g = default_grid().unwrap();
        let cases = default_test_cases();
        assert_eq!(cases.len(), 10);
        assert_eq!(cases[0], TestCase::new(1, Position::new(1, 1), Position::new(13, 13)));
        assert_eq!(cases[9], TestCase::new(10, Position::new(1, 10), Position::new(13, 4)));
        for case in &cases {
            assert!(g.is_open(case.start), "{case:?}");
            assert!(g.is_open(case.goal), "{case:?}");
        }
    }
}
