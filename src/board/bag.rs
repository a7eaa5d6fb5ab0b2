//! The bag of undrawn tiles.

use crate::core::{Board, GameRng, Tile};

/// Tiles not yet drawn by anyone.
///
/// Draws are uniformly random and never repeat: a drawn tile leaves the
/// bag until it is explicitly returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// A bag holding every tile of `board`.
    #[must_use]
    pub fn full(board: &Board) -> Self {
        Self {
            tiles: board.tiles().collect(),
        }
    }

    /// Number of tiles left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check whether a tile is still in the bag.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Remaining tiles, in no particular order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Draw one random tile, or `None` if the bag is empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.tiles.len());
        Some(self.tiles.swap_remove(index))
    }

    /// Draw up to `count` tiles. Returns fewer if the bag runs out.
    pub fn draw_many(&mut self, count: usize, rng: &mut GameRng) -> Vec<Tile> {
        (0..count).map_while(|_| self.draw(rng)).collect()
    }

    /// Remove a specific tile. Returns false if it was not in the bag.
    pub fn take(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(pos) => {
                self.tiles.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Put tiles back into the bag.
    pub fn put_back(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }
}
