//! Player identification and per-player assets.
//!
//! ## PlayerId
//!
//! Opaque identifier supplied by the host when a player joins. The engine
//! only compares ids; it never allocates them itself.
//!
//! ## Player
//!
//! A player's hand, money, share holdings and current turn state. Players
//! are created when they join and live as long as the game.

use serde::{Deserialize, Serialize};

use super::corporation::{CorpMap, Corporation};
use super::tile::Tile;
use crate::rules::TurnState;

/// Externally supplied player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Status shown to a player who is waiting.
pub const WAIT_MSG: &str = "Wait for your turn";

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<Tile>,
    money: u32,
    stocks: CorpMap<u32>,
    turn: bool,
    state: TurnState,
    status_msg: String,
}

impl Player {
    /// Create a player with an empty hand and no shares.
    pub fn new(id: PlayerId, name: impl Into<String>, money: u32) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            money,
            stocks: CorpMap::default(),
            turn: false,
            state: TurnState::Wait,
            status_msg: WAIT_MSG.to_string(),
        }
    }

    /// Player id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tiles in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// Cash on hand.
    #[must_use]
    pub fn money(&self) -> u32 {
        self.money
    }

    /// Shares held in every corporation.
    #[must_use]
    pub fn stocks(&self) -> &CorpMap<u32> {
        &self.stocks
    }

    /// Whether it is this player's turn.
    #[must_use]
    pub fn is_turn(&self) -> bool {
        self.turn
    }

    /// Current turn state.
    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Current status message.
    #[must_use]
    pub fn status_msg(&self) -> &str {
        &self.status_msg
    }

    // === Hand ===

    /// Check whether a tile is in hand.
    #[must_use]
    pub fn has_tile(&self, tile: Tile) -> bool {
        self.hand.contains(&tile)
    }

    /// Add a tile to the hand.
    pub fn add_tile(&mut self, tile: Tile) {
        self.hand.push(tile);
    }

    /// Remove a tile from the hand.
    ///
    /// Returns true if the tile was found and removed.
    pub fn remove_tile(&mut self, tile: Tile) -> bool {
        if let Some(pos) = self.hand.iter().position(|&t| t == tile) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    // === Assets ===

    /// Add shares of a corporation.
    pub fn add_stocks(&mut self, corporation: Corporation, count: u32) {
        self.stocks[corporation] += count;
    }

    /// Receive money.
    pub fn add_money(&mut self, amount: u32) {
        self.money += amount;
    }

    /// Pay money. Returns false, without paying, if the player cannot afford it.
    pub fn deduct_money(&mut self, amount: u32) -> bool {
        match self.money.checked_sub(amount) {
            Some(rest) => {
                self.money = rest;
                true
            }
            None => false,
        }
    }

    // === Turn ===

    /// Set whether it is this player's turn.
    pub fn set_turn(&mut self, turn: bool) {
        self.turn = turn;
    }

    /// Move to a new state with a new status message.
    pub fn set_state(&mut self, state: TurnState, msg: impl Into<String>) {
        self.state = state;
        self.status_msg = msg.into();
    }

    /// Replace the status message only.
    pub fn set_status_msg(&mut self, msg: impl Into<String>) {
        self.status_msg = msg.into();
    }
}
