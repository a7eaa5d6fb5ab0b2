//! Unincorporated tile groups.
//!
//! A group is a maximal connected set of at least two placed tiles that no
//! corporation owns. Only groups can be claimed by a new corporation, so a
//! lone tile is never a group.
//!
//! Groups are recomputed from scratch after every board change: mergers
//! and establishments can split or erase them, and a fresh fold is cheap
//! on a 108-tile board.

use rustc_hash::FxHashSet;

use crate::core::{Board, Tile};

/// A connected set of unincorporated tiles, in discovery order.
pub type Group = Vec<Tile>;

/// Compute the unincorporated groups of `placed`.
///
/// Folds over the placed tiles; each tile together with its placed
/// neighbours is merged into every group it touches, or starts a new group
/// when it touches none and has at least one neighbour.
#[must_use]
pub fn unincorporated_groups(board: &Board, placed: &[Tile]) -> Vec<Group> {
    let on_board: FxHashSet<Tile> = placed.iter().copied().collect();

    placed.iter().fold(Vec::new(), |groups, &tile| {
        let mut reach: Group = Vec::with_capacity(5);
        reach.push(tile);
        reach.extend(board.adjacent_from(&on_board, tile));
        merge_into(groups, reach)
    })
}

fn shares_tile(group: &[Tile], tiles: &[Tile]) -> bool {
    tiles.iter().any(|t| group.contains(t))
}

fn merge_into(mut groups: Vec<Group>, tiles: Group) -> Vec<Group> {
    let Some(first) = groups.iter().position(|g| shares_tile(g, &tiles)) else {
        if tiles.len() > 1 {
            groups.push(tiles);
        }
        return groups;
    };

    // Groups are disjoint, so only the new tiles need deduplicating.
    let mut merged = std::mem::take(&mut groups[first]);
    let mut i = first + 1;
    while i < groups.len() {
        if shares_tile(&groups[i], &tiles) {
            merged.extend(groups.remove(i));
        } else {
            i += 1;
        }
    }
    for tile in tiles {
        if !merged.contains(&tile) {
            merged.push(tile);
        }
    }
    groups[first] = merged;
    groups
}

/// The group containing `tile`, if any.
#[must_use]
pub fn group_containing(groups: &[Group], tile: Tile) -> Option<&Group> {
    groups.iter().find(|g| g.contains(&tile))
}

/// Placed tiles a new tile at `tile` would pull along with it.
///
/// Every placed neighbour of `tile` is included, expanded to its whole
/// group when it belongs to one. The result is deduplicated.
#[must_use]
pub fn adjacent_placed_tiles(
    board: &Board,
    placed: &[Tile],
    groups: &[Group],
    tile: Tile,
) -> Vec<Tile> {
    let on_board: FxHashSet<Tile> = placed.iter().copied().collect();

    board
        .adjacent_from(&on_board, tile)
        .into_iter()
        .fold(Vec::new(), |mut pulled, neighbour| {
            if pulled.contains(&neighbour) {
                return pulled;
            }
            match group_containing(groups, neighbour) {
                Some(group) => pulled.extend(group.iter().copied()),
                None => pulled.push(neighbour),
            }
            pulled
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(raw: &[u16]) -> Vec<Tile> {
        raw.iter().copied().map(Tile::new).collect()
    }

    fn normalized(groups: Vec<Group>) -> Vec<Vec<u16>> {
        let mut out: Vec<Vec<u16>> = groups
            .into_iter()
            .map(|g| {
                let mut v: Vec<u16> = g.into_iter().map(|t| t.0).collect();
                v.sort_unstable();
                v
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_singletons_are_not_groups() {
        let board = Board::default();
        let groups = unincorporated_groups(&board, &tiles(&[0, 5, 30]));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_pair_forms_group() {
        let board = Board::default();
        let groups = unincorporated_groups(&board, &tiles(&[13, 14, 50]));
        assert_eq!(normalized(groups), vec![vec![13, 14]]);
    }

    #[test]
    fn test_row_wrap_is_not_adjacent() {
        let board = Board::default();
        // 11 ends row A, 12 starts row B.
        let groups = unincorporated_groups(&board, &tiles(&[11, 12]));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_bridge_joins_two_groups() {
        let board = Board::default();
        // Two pairs placed first, the bridging tile last.
        let groups = unincorporated_groups(&board, &tiles(&[0, 1, 3, 4, 2]));
        assert_eq!(normalized(groups), vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn test_order_independent() {
        let board = Board::default();
        let a = unincorporated_groups(&board, &tiles(&[0, 1, 3, 4, 2, 40, 52, 90]));
        let b = unincorporated_groups(&board, &tiles(&[90, 2, 52, 4, 0, 40, 3, 1]));
        assert_eq!(normalized(a), normalized(b));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let board = Board::default();
        let placed = tiles(&[7, 19, 31, 60, 61, 100]);
        let first = unincorporated_groups(&board, &placed);
        let second = unincorporated_groups(&board, &placed);
        assert_eq!(first, second);
    }

    #[test]
    fn test_l_shape_is_one_group() {
        let board = Board::default();
        let groups = unincorporated_groups(&board, &tiles(&[24, 12, 25, 26, 38]));
        assert_eq!(normalized(groups), vec![vec![12, 24, 25, 26, 38]]);
    }

    #[test]
    fn test_group_containing() {
        let board = Board::default();
        let groups = unincorporated_groups(&board, &tiles(&[13, 14, 50, 51]));
        assert!(group_containing(&groups, Tile::new(14)).unwrap().contains(&Tile::new(13)));
        assert!(group_containing(&groups, Tile::new(99)).is_none());
    }

    #[test]
    fn test_adjacent_placed_tiles_expands_groups() {
        let board = Board::default();
        // Group {0,1}, singleton 14; placing 13 touches 1 and 14.
        let placed = tiles(&[0, 1, 14]);
        let groups = unincorporated_groups(&board, &placed);

        let mut pulled: Vec<u16> = adjacent_placed_tiles(&board, &placed, &groups, Tile::new(13))
            .into_iter()
            .map(|t| t.0)
            .collect();
        pulled.sort_unstable();

        assert_eq!(pulled, vec![0, 1, 14]);
    }

    #[test]
    fn test_adjacent_placed_tiles_deduplicates() {
        let board = Board::default();
        // 13 touches 1 and 12, both in group {0,1,12}.
        let placed = tiles(&[0, 1, 12]);
        let groups = unincorporated_groups(&board, &placed);
        let pulled = adjacent_placed_tiles(&board, &placed, &groups, Tile::new(13));
        assert_eq!(pulled.len(), 3);
    }
}
