//! Per-player turn state.

use serde::{Deserialize, Serialize};

use crate::core::Tile;

pub const PLACE_TILE_MSG: &str = "It is your turn, place a tile";
pub const UNPLAYABLE_MSG: &str = "It is your turn, do you want to replace unplayable tiles?";
pub const ESTABLISH_MSG: &str = "You can establish a corporation";
pub const NO_CORPS_MSG: &str = "No corporation is available to establish";
pub const BUY_STOCKS_MSG: &str = "You can buy stocks";

/// Where a player is in their turn.
///
/// Players who are not the current player are always in `Wait`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnState {
    /// Not this player's turn.
    #[default]
    Wait,
    /// Must place a tile from hand.
    PlaceTile,
    /// Some hand tiles would merge a safe corporation; the player may
    /// replace them before placing.
    UnplayableTile { tiles: Vec<Tile> },
    /// May found a corporation on a group.
    Establish,
    /// Groups exist but every corporation is already active.
    #[serde(rename = "no-corps")]
    NoCorps,
    /// May buy shares, which ends the turn.
    BuyStocks,
}

impl TurnState {
    /// Wire name of the state.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TurnState::Wait => "wait",
            TurnState::PlaceTile => "placeTile",
            TurnState::UnplayableTile { .. } => "unplayableTile",
            TurnState::Establish => "establish",
            TurnState::NoCorps => "no-corps",
            TurnState::BuyStocks => "buyStocks",
        }
    }

    /// Flagged tiles, empty unless in `UnplayableTile`.
    #[must_use]
    pub fn unplayable_tiles(&self) -> &[Tile] {
        match self {
            TurnState::UnplayableTile { tiles } => tiles,
            _ => &[],
        }
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_wire_format() {
        let states = [
            TurnState::Wait,
            TurnState::PlaceTile,
            TurnState::UnplayableTile { tiles: vec![Tile::new(3)] },
            TurnState::Establish,
            TurnState::NoCorps,
            TurnState::BuyStocks,
        ];
        for state in states {
            let json = serde_json::to_value(&state).unwrap();
            let wire = match &json {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Object(map) => map.keys().next().unwrap().clone(),
                other => panic!("unexpected {other}"),
            };
            assert_eq!(wire, state.name());
        }
    }

    #[test]
    fn test_unplayable_tiles() {
        let state = TurnState::UnplayableTile {
            tiles: vec![Tile::new(1), Tile::new(2)],
        };
        assert_eq!(state.unplayable_tiles(), &[Tile::new(1), Tile::new(2)]);
        assert!(TurnState::Establish.unplayable_tiles().is_empty());
    }
}
