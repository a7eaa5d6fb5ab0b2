//! Tiles and board geometry.
//!
//! ## Tile
//!
//! A tile is nothing more than its index on a row-major grid. Labels follow
//! the printed board: column number then row letter, so tile 0 is `1A` and
//! tile 13 on a 12-wide board is `2B`.
//!
//! ## Board
//!
//! `Board` knows the grid dimensions and derives orthogonal adjacency.
//! Adjacency is never stored.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A board tile, identified by its row-major index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(pub u16);

impl Tile {
    /// Create a tile from a raw index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Neighbours of a tile. A tile has at most four.
pub type Neighbours = SmallVec<[Tile; 4]>;

/// Grid geometry.
///
/// ```
/// use acquire_engine::core::{Board, Tile};
///
/// let board = Board::new(9, 12);
/// assert_eq!(board.total_tiles(), 108);
///
/// // Top-left corner has only a right and a lower neighbour.
/// let mut n = board.adjacent(Tile::new(0)).to_vec();
/// n.sort();
/// assert_eq!(n, vec![Tile::new(1), Tile::new(12)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u16,
    columns: u16,
}

impl Board {
    /// Create a board with the given dimensions.
    #[must_use]
    pub const fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns (the row width).
    #[must_use]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Total number of tiles on the board.
    #[must_use]
    pub const fn total_tiles(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Check whether a tile lies on this board.
    #[must_use]
    pub const fn contains(&self, tile: Tile) -> bool {
        tile.index() < self.total_tiles()
    }

    /// Iterate over every tile on the board in index order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> {
        let total = u16::try_from(self.total_tiles()).unwrap_or(u16::MAX);
        (0..total).map(Tile)
    }

    /// Orthogonal neighbours of `tile`: up, down, left, right.
    ///
    /// Left is dropped on the left edge, right on the right edge, and
    /// anything outside the board is dropped.
    #[must_use]
    pub fn adjacent(&self, tile: Tile) -> Neighbours {
        let width = i32::from(self.columns);
        let total = self.total_tiles() as i32;
        let t = i32::from(tile.0);
        let column = t % width;

        let mut candidates: SmallVec<[i32; 4]> = SmallVec::new();
        candidates.push(t - width);
        candidates.push(t + width);
        if column != 0 {
            candidates.push(t - 1);
        }
        if column != width - 1 {
            candidates.push(t + 1);
        }

        candidates
            .into_iter()
            .filter(|&n| (0..total).contains(&n))
            .map(|n| Tile(n as u16))
            .collect()
    }

    /// Neighbours of `tile` that are members of `set`.
    #[must_use]
    pub fn adjacent_from(&self, set: &FxHashSet<Tile>, tile: Tile) -> Neighbours {
        self.adjacent(tile)
            .into_iter()
            .filter(|n| set.contains(n))
            .collect()
    }

    /// Human-readable label for a tile: column number then row letter.
    #[must_use]
    pub fn label(&self, tile: Tile) -> String {
        let column = tile.0 % self.columns + 1;
        let row = tile.0 / self.columns;
        let letter = char::from(b'A' + (row % 26) as u8);
        format!("{column}{letter}")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(9, 12)
    }
}
