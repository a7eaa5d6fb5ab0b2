//! Read-only status snapshots.
//!
//! A snapshot is everything one player is allowed to see: the public board
//! and corporation status, that player's own assets, the roster, the
//! activity log, and what the player can do next.

use serde::Serialize;

use crate::board::Group;
use crate::core::{ActivityLog, CorpMap, Corporation, Tile};

/// Full status as seen by one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub status: GameStatus,
    pub action: ActionOptions,
}

/// Public game status plus the requester's private assets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    /// Unincorporated tiles on the board, in placement order.
    pub placed_tiles: Vec<Tile>,
    pub corporations: CorpMap<CorporationStatus>,
    pub player: PlayerStatus,
    pub players_profile: PlayersProfile,
    pub activity: ActivityLog,
}

/// Public status of one corporation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporationStatus {
    pub active: bool,
    pub area: usize,
    pub tiles: Vec<Tile>,
    pub stock_remaining: u32,
    pub price: u32,
    pub stable: bool,
}

/// The requester's own view of themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatus {
    pub name: String,
    pub money: u32,
    pub tiles: Vec<Tile>,
    pub stocks: CorpMap<u32>,
    pub status_msg: String,
    pub turn: bool,
}

/// Seating order and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersProfile {
    pub all_players_name: Vec<String>,
    pub current_player: usize,
}

/// The requester's turn state with the choices it offers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state")]
pub enum ActionOptions {
    #[serde(rename = "wait")]
    Wait,
    #[serde(rename = "placeTile")]
    PlaceTile,
    #[serde(rename = "unplayableTile", rename_all = "camelCase")]
    UnplayableTile { unplayable_tiles: Vec<Tile> },
    #[serde(rename = "establish", rename_all = "camelCase")]
    Establish {
        available_corporations: Vec<Corporation>,
        groups: Vec<Group>,
    },
    #[serde(rename = "no-corps")]
    NoCorps,
    #[serde(rename = "buyStocks", rename_all = "camelCase")]
    BuyStocks { active_corps: Vec<Corporation> },
}

impl ActionOptions {
    /// Wire name of the underlying state.
    #[must_use]
    pub const fn state_name(&self) -> &'static str {
        match self {
            ActionOptions::Wait => "wait",
            ActionOptions::PlaceTile => "placeTile",
            ActionOptions::UnplayableTile { .. } => "unplayableTile",
            ActionOptions::Establish { .. } => "establish",
            ActionOptions::NoCorps => "no-corps",
            ActionOptions::BuyStocks { .. } => "buyStocks",
        }
    }
}
