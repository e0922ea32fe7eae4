use maze_core::{Grid, Position};

/// Parent sentinel for the search root and unreached cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Per-run scratch state shared by the frontier searches.
///
/// Holds a visited mark and a parent link for every cell of the grid, indexed
/// by [`Grid::index`]. A fresh space is allocated for every search so that a
/// run's memory footprint includes its own bookkeeping.
pub(crate) struct SearchSpace<'g> {
    grid: &'g Grid,
    parent: Vec<usize>,
    marked: Vec<bool>,
    marked_count: usize,
}

impl<'g> SearchSpace<'g> {
    pub(crate) fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            parent: vec![NO_PARENT; grid.len()],
            marked: vec![false; grid.len()],
            marked_count: 0,
        }
    }

    /// Mark `p` as visited. Returns `true` if it was not marked before.
    /// Positions outside the grid are never marked.
    #[inline]
    pub(crate) fn mark(&mut self, p: Position) -> bool {
        let Some(i) = self.grid.index(p) else {
            return false;
        };
        if self.marked[i] {
            return false;
        }
        self.marked[i] = true;
        self.marked_count += 1;
        true
    }

    #[inline]
    pub(crate) fn is_marked(&self, p: Position) -> bool {
        self.grid.index(p).is_some_and(|i| self.marked[i])
    }

    /// Number of distinct positions marked so far.
    #[inline]
    pub(crate) fn marked_count(&self) -> usize {
        self.marked_count
    }

    /// Record `parent` as the predecessor of `child`.
    #[inline]
    pub(crate) fn set_parent(&mut self, child: Position, parent: Position) {
        if let (Some(c), Some(p)) = (self.grid.index(child), self.grid.index(parent)) {
            self.parent[c] = p;
        }
    }

    /// Follow parent links back from `goal` and return the root-to-goal path.
    ///
    /// The walk is bounded by the number of cells, so a corrupted link cycle
    /// cannot loop forever.
    pub(crate) fn path_to(&self, goal: Position) -> Vec<Position> {
        let Some(mut ci) = self.grid.index(goal) else {
            return Vec::new();
        };
        let mut path = Vec::new();
        while ci != NO_PARENT && path.len() <= self.parent.len() {
            path.push(self.grid.position(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}
