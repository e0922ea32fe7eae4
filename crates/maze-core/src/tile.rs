//! The [`Tile`] type, the content of a single maze cell.

/// Whether a maze cell can be walked through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Character used in the text form of a maze.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Wall => '#',
        }
    }

    /// Parse a text-maze character.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Open),
            '#' => Some(Tile::Wall),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }
}
