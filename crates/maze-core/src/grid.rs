//! The [`Grid`] type: an immutable 2D maze of [`Tile`]s.
//!
//! A `Grid` is built once (from a tile vector, a closure or the `#`/`.` text
//! form) and then only queried. There is no way to change a tile after
//! construction, so a single grid can be shared by reference across any
//! number of searches.

use std::fmt;
use std::str::FromStr;

use crate::geom::Position;
use crate::tile::Tile;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid would have no cells.
    #[error("maze is empty")]
    EmptyGrid,
    /// The tile vector does not match `width * height`.
    #[error("expected {expected} tiles, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// A text line is wider or narrower than the first one.
    #[error("maze line {line} has width {actual}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        actual: usize,
    },
    /// A character other than `#` or `.` was found.
    #[error("maze contains invalid tile \u{201c}{ch}\u{201d} at {pos}")]
    InvalidTile { ch: char, pos: Position },
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A dense, row-major, immutable maze.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid from row-major `tiles`.
    pub fn new(width: i32, height: i32, tiles: Vec<Tile>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// Create a grid by evaluating `f` at every position, row by row.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(Position) -> Tile,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                tiles.push(f(Position::new(row, col)));
            }
        }
        Self::new(width, height, tiles)
    }

    /// Parse the text form: one line per row, `#` for walls and `.` for open
    /// cells.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, as is
    /// trailing whitespace of each line (so CRLF input works). Every line must
    /// have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        let mut tiles = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (row, line) in s.lines().enumerate() {
            let line = line.trim_end();
            let mut w = 0usize;
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_glyph(ch).ok_or(GridError::InvalidTile {
                    ch,
                    pos: Position::new(row as i32, col as i32),
                })?;
                tiles.push(tile);
                w += 1;
            }
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(GridError::InconsistentWidth {
                        line: row + 1,
                        expected,
                        actual: w,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        Self::new(width as i32, height as i32, tiles)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`; construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Position) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.height && p.col < self.width
    }

    /// Convert a position to a flat row-major index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(p.row as usize * self.width as usize + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        let w = self.width as usize;
        Position::new((idx / w) as i32, (idx % w) as i32)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn tile(&self, p: Position) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_open(&self, p: Position) -> bool {
        self.tile(p).is_some_and(Tile::is_open)
    }

    /// In-bounds open neighbours of `p`, in up, down, left, right order.
    pub fn neighbors(&self, p: Position) -> impl Iterator<Item = Position> + '_ {
        p.neighbors_4().into_iter().filter(move |&n| self.is_open(n))
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_open()).count()
    }

    /// Row-major iterator over `(Position, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (self.position(i), t))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.width as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#...#
#.#.#
#...#
#####";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 25);
        assert_eq!(g.open_count(), 8);
        assert_eq!(g.tile(Position::new(0, 0)), Some(Tile::Wall));
        assert_eq!(g.tile(Position::new(1, 1)), Some(Tile::Open));
        assert_eq!(g.tile(Position::new(2, 2)), Some(Tile::Wall));
    }

    #[test]
    fn display_round_trips() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
        let again: Grid = g.to_string().parse().unwrap();
        assert_eq!(again, g);
    }

    #[test]
    fn parse_accepts_crlf_and_padding() {
        let g = Grid::parse("\n###\r\n#.#  \r\n###\n").unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        assert!(g.is_open(Position::new(1, 1)));
    }

    #[test]
    fn parse_rejects_inconsistent_width() {
        let err = Grid::parse("###\n#.\n###").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                line: 2,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_glyph() {
        let err = Grid::parse("###\n#S#\n###").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidTile {
                ch: 'S',
                pos: Position::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Grid::parse("  \n ").unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn new_checks_tile_count() {
        let err = Grid::new(3, 3, vec![Tile::Open; 8]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                expected: 9,
                actual: 8
            }
        );
        assert_eq!(Grid::new(0, 3, vec![]).unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn bounds_and_openness() {
        let g = Grid::parse(ROOM).unwrap();
        assert!(g.in_bounds(Position::new(4, 4)));
        assert!(!g.in_bounds(Position::new(5, 0)));
        assert!(!g.in_bounds(Position::new(0, -1)));
        assert!(!g.is_open(Position::new(-1, -1)));
        assert!(!g.is_open(Position::new(0, 2)));
        assert!(g.is_open(Position::new(3, 3)));
        assert_eq!(g.tile(Position::new(9, 9)), None);
    }

    #[test]
    fn neighbors_are_open_and_ordered() {
        let g = Grid::parse(ROOM).unwrap();
        // (1,2): up is wall, down is wall (2,2), left (1,1), right (1,3).
        let n: Vec<_> = g.neighbors(Position::new(1, 2)).collect();
        assert_eq!(n, vec![Position::new(1, 1), Position::new(1, 3)]);
        // (2,1): up (1,1), down (3,1), left wall, right wall.
        let n: Vec<_> = g.neighbors(Position::new(2, 1)).collect();
        assert_eq!(n, vec![Position::new(1, 1), Position::new(3, 1)]);
        let n: Vec<_> = g.neighbors(Position::new(1, 1)).collect();
        assert_eq!(n, vec![Position::new(2, 1), Position::new(1, 2)]);
    }

    #[test]
    fn neighbors_never_leave_the_grid() {
        let g = Grid::from_fn(3, 2, |_| Tile::Open).unwrap();
        let n: Vec<_> = g.neighbors(Position::new(0, 0)).collect();
        assert_eq!(n, vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::from_fn(7, 4, |_| Tile::Open).unwrap();
        for (i, (p, _)) in g.iter().enumerate() {
            assert_eq!(g.index(p), Some(i));
            assert_eq!(g.position(i), p);
        }
        assert_eq!(g.index(Position::new(4, 0)), None);
    }
}
