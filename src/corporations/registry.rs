//! Corporation registry: live status for every corporation in the catalog.
//!
//! The registry owns each corporation's tiles and unsold shares. It does not
//! know about players; moving shares to a holder is the caller's half of
//! the transfer.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{ActionError, ActionResult, Board, CorpMap, Corporation, Tile};

/// Corporations adjacent to a tile. A tile touches at most four.
pub type AdjacentCorporations = SmallVec<[Corporation; 4]>;

/// Live status of one corporation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CorporationState {
    active: bool,
    tiles: Vec<Tile>,
    stock_remaining: u32,
}

impl CorporationState {
    fn new(stock_pool: u32) -> Self {
        Self {
            active: false,
            tiles: Vec::new(),
            stock_remaining: stock_pool,
        }
    }

    /// Whether the corporation is on the board.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tiles owned by the corporation.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles owned.
    #[must_use]
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Unsold shares.
    #[must_use]
    pub fn stock_remaining(&self) -> u32 {
        self.stock_remaining
    }
}

/// Status of every corporation.
///
/// ## Example
///
/// ```
/// use acquire_engine::corporations::CorporationRegistry;
/// use acquire_engine::core::{Corporation, Tile};
///
/// let mut registry = CorporationRegistry::new(25, 11);
/// registry.establish(Corporation::Zeta, &[Tile::new(12), Tile::new(13)]).unwrap();
///
/// assert!(registry.is_active(Corporation::Zeta));
/// assert_eq!(registry.share_price(Corporation::Zeta), 200);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorporationRegistry {
    entries: CorpMap<CorporationState>,
    safe_size: usize,
}

impl CorporationRegistry {
    /// Every corporation inactive with a full pool of `stock_pool` shares.
    #[must_use]
    pub fn new(stock_pool: u32, safe_size: usize) -> Self {
        Self {
            entries: CorpMap::new(|_| CorporationState::new(stock_pool)),
            safe_size,
        }
    }

    /// Status of one corporation.
    #[must_use]
    pub fn get(&self, corporation: Corporation) -> &CorporationState {
        &self.entries[corporation]
    }

    /// Status of every corporation, keyed by corporation.
    #[must_use]
    pub fn entries(&self) -> &CorpMap<CorporationState> {
        &self.entries
    }

    /// Whether the corporation is on the board.
    #[must_use]
    pub fn is_active(&self, corporation: Corporation) -> bool {
        self.entries[corporation].active
    }

    /// Number of tiles the corporation owns.
    #[must_use]
    pub fn area(&self, corporation: Corporation) -> usize {
        self.entries[corporation].area()
    }

    /// Whether the corporation is too large to be acquired.
    #[must_use]
    pub fn is_stable(&self, corporation: Corporation) -> bool {
        self.area(corporation) >= self.safe_size
    }

    /// Current share price.
    #[must_use]
    pub fn share_price(&self, corporation: Corporation) -> u32 {
        corporation.share_price(self.area(corporation))
    }

    /// Unsold shares.
    #[must_use]
    pub fn stock_remaining(&self, corporation: Corporation) -> u32 {
        self.entries[corporation].stock_remaining
    }

    /// Active corporations in catalog order.
    #[must_use]
    pub fn active(&self) -> Vec<Corporation> {
        self.filter(|s| s.active)
    }

    /// Inactive corporations in catalog order.
    #[must_use]
    pub fn inactive(&self) -> Vec<Corporation> {
        self.filter(|s| !s.active)
    }

    fn filter(&self, keep: impl Fn(&CorporationState) -> bool) -> Vec<Corporation> {
        self.entries
            .iter()
            .filter(|(_, s)| keep(s))
            .map(|(c, _)| c)
            .collect()
    }

    /// Whether any corporation is active.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.entries.values().any(|s| s.active)
    }

    /// Whether any corporation is still available to found.
    #[must_use]
    pub fn any_inactive(&self) -> bool {
        self.entries.values().any(|s| !s.active)
    }

    /// The corporation owning `tile`, if any.
    #[must_use]
    pub fn owner_of(&self, tile: Tile) -> Option<Corporation> {
        self.entries
            .iter()
            .find(|(_, s)| s.tiles.contains(&tile))
            .map(|(c, _)| c)
    }

    /// Total tiles owned across all corporations.
    #[must_use]
    pub fn owned_tile_count(&self) -> usize {
        self.entries.values().map(CorporationState::area).sum()
    }

    // === Lifecycle ===

    /// Found `corporation` on `tiles`.
    ///
    /// Fails if the corporation is already active.
    pub fn establish(&mut self, corporation: Corporation, tiles: &[Tile]) -> ActionResult<()> {
        let entry = &mut self.entries[corporation];
        if entry.active {
            return Err(ActionError::CorporationActive(corporation));
        }
        entry.active = true;
        entry.tiles = tiles.to_vec();
        Ok(())
    }

    /// Give tiles to a corporation. Tiles it already owns are skipped.
    pub fn add_tiles(&mut self, corporation: Corporation, tiles: impl IntoIterator<Item = Tile>) {
        let entry = &mut self.entries[corporation];
        for tile in tiles {
            if !entry.tiles.contains(&tile) {
                entry.tiles.push(tile);
            }
        }
    }

    /// Take a corporation off the board, returning the tiles it owned.
    ///
    /// Outstanding shares stay with their holders; the pool is untouched.
    pub fn dissolve(&mut self, corporation: Corporation) -> Vec<Tile> {
        let entry = &mut self.entries[corporation];
        entry.active = false;
        std::mem::take(&mut entry.tiles)
    }

    /// Take `count` shares out of the pool.
    ///
    /// Returns false, without removing anything, if the pool is short.
    pub fn remove_stocks(&mut self, corporation: Corporation, count: u32) -> bool {
        let entry = &mut self.entries[corporation];
        match entry.stock_remaining.checked_sub(count) {
            Some(rest) => {
                entry.stock_remaining = rest;
                true
            }
            None => false,
        }
    }

    // === Adjacency ===

    /// Active corporations owning a tile orthogonally adjacent to `tile`,
    /// in catalog order.
    #[must_use]
    pub fn adjacent_to(&self, board: &Board, tile: Tile) -> AdjacentCorporations {
        let neighbours = board.adjacent(tile);
        self.entries
            .iter()
            .filter(|(_, s)| s.active && s.tiles.iter().any(|t| neighbours.contains(t)))
            .map(|(c, _)| c)
            .collect()
    }

    /// Sort corporations by area, largest first. Equal areas keep catalog
    /// order.
    #[must_use]
    pub fn in_desc_order(&self, corporations: &[Corporation]) -> AdjacentCorporations {
        let mut sorted: AdjacentCorporations = corporations.iter().copied().collect();
        sorted.sort_by(|a, b| {
            self.area(*b)
                .cmp(&self.area(*a))
                .then_with(|| a.index().cmp(&b.index()))
        });
        sorted
    }

    /// Whether placing `tile` would force a merge with a safe corporation.
    ///
    /// True when the tile touches two or more active corporations and the
    /// second largest of them is stable.
    #[must_use]
    pub fn blocks_merge(&self, board: &Board, tile: Tile) -> bool {
        let adjacent = self.adjacent_to(board, tile);
        if adjacent.len() < 2 {
            return false;
        }
        let ordered = self.in_desc_order(&adjacent);
        self.is_stable(ordered[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(raw: &[u16]) -> Vec<Tile> {
        raw.iter().copied().map(Tile::new).collect()
    }

    #[test]
    fn test_establish_inactive() {
        let mut registry = CorporationRegistry::new(25, 11);
        assert!(registry.establish(Corporation::Zeta, &tiles(&[13, 14])).is_ok());
        assert!(registry.is_active(Corporation::Zeta));
        assert_eq!(registry.area(Corporation::Zeta), 2);
    }

    #[test]
    fn test_establish_active_fails() {
        let mut registry = CorporationRegistry::new(25, 11);
        registry.establish(Corporation::Zeta, &tiles(&[13, 14])).unwrap();
        assert_eq!(
            registry.establish(Corporation::Zeta, &tiles(&[13, 14])),
            Err(ActionError::CorporationActive(Corporation::Zeta))
        );
    }

    #[test]
    fn test_active_and_inactive_lists() {
        let mut registry = CorporationRegistry::new(25, 11);
        registry.establish(Corporation::Zeta, &tiles(&[12, 13, 14])).unwrap();
        registry.establish(Corporation::Sackson, &tiles(&[16, 17])).unwrap();

        assert_eq!(registry.active(), vec![Corporation::Sackson, Corporation::Zeta]);
        assert_eq!(
            registry.inactive(),
            vec![
                Corporation::Phoenix,
                Corporation::Quantum,
                Corporation::Hydra,
                Corporation::Fusion,
                Corporation::America,
            ]
        );
        assert!(registry.any_active());
        assert!(registry.any_inactive());
    }

    #[test]
    fn test_remove_stocks() {
        let mut registry = CorporationRegistry::new(25, 11);
        assert!(registry.remove_stocks(Corporation::Zeta, 1));
        assert_eq!(registry.stock_remaining(Corporation::Zeta), 24);
        assert!(!registry.remove_stocks(Corporation::Zeta, 25));
        assert_eq!(registry.stock_remaining(Corporation::Zeta), 24);
    }

    #[test]
    fn test_area_and_price() {
        let mut registry = CorporationRegistry::new(25, 11);
        assert_eq!(registry.area(Corporation::Zeta), 0);
        assert_eq!(registry.share_price(Corporation::Zeta), 0);

        registry.establish(Corporation::Zeta, &tiles(&[2, 3, 4])).unwrap();
        assert_eq!(registry.area(Corporation::Zeta), 3);
        assert_eq!(registry.share_price(Corporation::Zeta), 300);
    }

    #[test]
    fn test_add_tiles_skips_duplicates() {
        let mut registry = CorporationRegistry::new(25, 11);
        registry.establish(Corporation::Zeta, &tiles(&[0, 1])).unwrap();
        registry.add_tiles(Corporation::Zeta, tiles(&[1, 2]));
        assert_eq!(registry.get(Corporation::Zeta).tiles(), tiles(&[0, 1, 2]).as_slice());
        assert_eq!(registry.owner_of(Tile::new(2)), Some(Corporation::Zeta));
        assert_eq!(registry.owner_of(Tile::new(3)), None);
        assert_eq!(registry.owned_tile_count(), 3);
    }

    #[test]
    fn test_dissolve() {
        let mut registry = CorporationRegistry::new(25, 11);
        registry.establish(Corporation::Hydra, &tiles(&[0, 1])).unwrap();
        registry.remove_stocks(Corporation::Hydra, 4);

        let taken = registry.dissolve(Corporation::Hydra);

        assert_eq!(taken, tiles(&[0, 1]));
        assert!(!registry.is_active(Corporation::Hydra));
        assert_eq!(registry.area(Corporation::Hydra), 0);
        assert_eq!(registry.stock_remaining(Corporation::Hydra), 21);
        // Can be founded again.
        assert!(registry.establish(Corporation::Hydra, &tiles(&[5, 6])).is_ok());
    }

    #[test]
    fn test_stability_threshold() {
        let mut registry = CorporationRegistry::new(25, 11);
        registry.establish(Corporation::Zeta, &tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9])).unwrap();
        assert!(!registry.is_stable(Corporation::Zeta));
        registry.add_tiles(Corporation::Zeta, tiles(&[10]));
        assert!(registry.is_stable(Corporation::Zeta));
    }

    #[test]
    fn test_adjacent_to_ignores_inactive_and_diagonals() {
        let board = Board::default();
        let mut registry = CorporationRegistry::new(25, 11);
        registry.establish(Corporation::Zeta, &tiles(&[0, 1])).unwrap();
        registry.establish(Corporation::Hydra, &tiles(&[26, 27])).unwrap();

        // 13 touches 1 (zeta) and diagonally 26 (hydra).
        assert_eq!(
            registry.adjacent_to(&board, Tile::new(13)).to_vec(),
            vec![Corporation::Zeta]
        );
        // 14 touches 26 (hydra below) only.
        assert_eq!(
            registry.adjacent_to(&board, Tile::new(14)).to_vec(),
            vec![Corporation::Hydra]
        );

        registry.dissolve(Corporation::Zeta);
        assert!(registry.adjacent_to(&board, Tile::new(13)).is_empty());
    }

    #[test]
    fn test_desc_order_ties_use_catalog() {
        let mut registry = CorporationRegistry::new(25, 11);
        registry.establish(Corporation::Zeta, &tiles(&[0, 1, 2])).unwrap();
        registry.establish(Corporation::Sackson, &tiles(&[20, 21])).unwrap();
        registry.establish(Corporation::Phoenix, &tiles(&[40, 41])).unwrap();

        let ordered = registry.in_desc_order(&[
            Corporation::Sackson,
            Corporation::Zeta,
            Corporation::Phoenix,
        ]);
        assert_eq!(
            ordered.to_vec(),
            vec![Corporation::Zeta, Corporation::Phoenix, Corporation::Sackson]
        );
    }

    #[test]
    fn test_blocks_merge_when_smaller_is_stable() {
        let board = Board::default();
        let mut registry = CorporationRegistry::new(25, 11);
        // Zeta: full row A (12 tiles). Sackson: 24, 36 (column 1, rows C and D).
        registry
            .establish(Corporation::Zeta, &tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]))
            .unwrap();
        registry.establish(Corporation::Sackson, &tiles(&[24, 36])).unwrap();

        // 12 touches zeta (0) and sackson (24); sackson is second and small.
        assert!(!registry.blocks_merge(&board, Tile::new(12)));

        // Grow sackson to safe size; now both are safe.
        registry.add_tiles(Corporation::Sackson, tiles(&[48, 60, 72, 84, 96, 37, 49, 61, 73]));
        assert!(registry.is_stable(Corporation::Sackson));
        assert!(registry.blocks_merge(&board, Tile::new(12)));

        // Only one neighbour corporation never blocks.
        assert!(!registry.blocks_merge(&board, Tile::new(23)));
    }
}
