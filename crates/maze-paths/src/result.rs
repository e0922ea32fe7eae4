//! Raw strategy outputs and the canonical [`SearchResult`].

use maze_core::{Grid, Position};

/// `visited` value of a result whose strategy does not count explored cells.
pub const UNKNOWN_VISITED: usize = 0;

/// What a strategy hands back before normalization.
///
/// Each strategy family reports in its own shape; [`normalize`](crate::normalize)
/// turns any of them into a [`SearchResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOutput {
    /// Only a path, or `None` when the goal was not reached (A*, greedy).
    Path(Option<Vec<Position>>),
    /// A path and its step count; an empty path with zero steps when the goal
    /// was not reached (BFS, simulated annealing).
    PathSteps { path: Vec<Position>, steps: usize },
    /// A path, an explicit found flag and the number of cells visited (DFS).
    Explored {
        path: Vec<Position>,
        found: bool,
        visited: usize,
    },
}

/// The canonical outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Whether the goal was reached.
    pub found: bool,
    /// Start-to-goal path, empty when not found.
    pub path: Vec<Position>,
    /// `path.len() - 1`, or 0 for an empty or single-cell path.
    pub steps: usize,
    /// Cells visited, or [`UNKNOWN_VISITED`] when the strategy doesn't count.
    pub visited: usize,
    /// Name of the strategy that produced the result.
    pub strategy: String,
}

impl SearchResult {
    /// A "goal not reached" result.
    pub fn not_found(strategy: impl Into<String>) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            steps: 0,
            visited: UNKNOWN_VISITED,
            strategy: strategy.into(),
        }
    }

    /// Whether the strategy reported a visited count.
    #[inline]
    pub fn visited_reported(&self) -> bool {
        self.visited != UNKNOWN_VISITED
    }

    /// Check the path contract against `grid`.
    ///
    /// A found result must start at `start`, end at `goal`, move one
    /// orthogonal step at a time over open cells and have
    /// `steps == path.len() - 1`. A not-found result must have an empty path
    /// and zero steps.
    pub fn is_valid_path(&self, grid: &Grid, start: Position, goal: Position) -> bool {
        if !self.found {
            return self.path.is_empty() && self.steps == 0;
        }
        let (Some(&first), Some(&last)) = (self.path.first(), self.path.last()) else {
            return false;
        };
        first == start
            && last == goal
            && self.steps + 1 == self.path.len()
            && self.path.iter().all(|&p| grid.is_open(p))
            && self.path.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::parse("#####\n#...#\n#####").unwrap()
    }

    fn found(path: Vec<Position>) -> SearchResult {
        SearchResult {
            found: true,
            steps: path.len() - 1,
            path,
            visited: UNKNOWN_VISITED,
            strategy: "test".into(),
        }
    }

    #[test]
    fn valid_corridor_path() {
        let g = corridor();
        let r = found(vec![
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(1, 3),
        ]);
        assert!(r.is_valid_path(&g, Position::new(1, 1), Position::new(1, 3)));
        assert!(!r.is_valid_path(&g, Position::new(1, 1), Position::new(1, 2)));
    }

    #[test]
    fn rejects_jumps_and_walls() {
        let g = corridor();
        let jump = found(vec![Position::new(1, 1), Position::new(1, 3)]);
        assert!(!jump.is_valid_path(&g, Position::new(1, 1), Position::new(1, 3)));

        let through_wall = found(vec![
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(0, 2),
        ]);
        assert!(!through_wall.is_valid_path(&g, Position::new(1, 1), Position::new(0, 2)));
    }

    #[test]
    fn not_found_must_be_empty() {
        let g = corridor();
        let r = SearchResult::not_found("x");
        assert!(r.is_valid_path(&g, Position::new(1, 1), Position::new(1, 3)));
        assert!(!r.visited_reported());

        let mut bogus = SearchResult::not_found("x");
        bogus.path.push(Position::new(1, 1));
        assert!(!bogus.is_valid_path(&g, Position::new(1, 1), Position::new(1, 3)));
    }

    #[test]
    fn found_with_empty_path_is_invalid() {
        let g = corridor();
        let mut r = SearchResult::not_found("x");
        r.found = true;
        assert!(!r.is_valid_path(&g, Position::new(1, 1), Position::new(1, 1)));
    }
}
