//! **maze-core**: the immutable maze model shared by every search strategy.
//!
//! This crate provides the foundational types of the benchmark: the
//! [`Position`] coordinate, the [`Direction`] enumeration whose order fixes
//! neighbour tie-breaking, the [`Tile`] cell content and the read-only
//! [`Grid`].

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::{Direction, Position};
pub use grid::{Grid, GridError};
pub use tile::Tile;
