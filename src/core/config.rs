//! Game configuration.
//!
//! Every rule constant the engine uses lives here: board size, seat
//! count, hand size, starting stake, stock pool, safe size and the
//! purchase limits. `GameConfig::default()` is the standard game.
//!
//! Hosts can build a config in code with the `with_*` setters or load one
//! from JSON; fields missing from the JSON take their default values.
//!
//! ```
//! use acquire_engine::core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "required_players": 4 }"#).unwrap();
//! assert_eq!(config.required_players, 4);
//! assert_eq!(config.hand_size, 6);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::Board;

/// Most players a single game can seat.
pub const MAX_PLAYERS: usize = 6;

/// Largest board a game can use: every tile index must fit a `u16`.
pub const MAX_TILES: usize = u16::MAX as usize;

/// Errors from building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("board must have at least one row and one column, got {rows}x{columns}")]
    EmptyBoard { rows: u16, columns: u16 },
    #[error("a game needs 1 to 6 players, got {0}")]
    PlayerCount(usize),
    #[error("{needed} tiles are needed to seat every player but the board has {available}")]
    NotEnoughTiles { needed: usize, available: usize },
    #[error("safe size must be at least 2, got {0}")]
    SafeSize(usize),
    #[error("a {rows}x{columns} board exceeds the {max} tile limit")]
    BoardTooLarge { rows: u16, columns: u16, max: usize },
    #[error("hand size {0} is too large to deal")]
    HandSize(usize),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board rows.
    pub rows: u16,

    /// Board columns (row width).
    pub columns: u16,

    /// Players that must join before the game can start.
    pub required_players: usize,

    /// Tiles dealt to each player, and kept in hand between turns.
    pub hand_size: usize,

    /// Money each player starts with.
    pub starting_money: u32,

    /// Shares issued per corporation.
    pub stock_pool: u32,

    /// Area at which a corporation becomes safe from mergers.
    pub safe_size: usize,

    /// Most shares one player may buy per turn.
    pub max_stocks_per_turn: u32,

    /// Flat fee added to every purchase.
    pub base_fee: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            columns: 12,
            required_players: 2,
            hand_size: 6,
            starting_money: 6000,
            stock_pool: 25,
            safe_size: 11,
            max_stocks_per_turn: 3,
            base_fee: 0,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration for `required_players` players.
    #[must_use]
    pub fn new(required_players: usize) -> Self {
        Self {
            required_players,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.board().total_tiles() > MAX_TILES {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                columns: self.columns,
                max: MAX_TILES,
            });
        }
        if self.required_players == 0 || self.required_players > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount(self.required_players));
        }
        if self.safe_size < 2 {
            return Err(ConfigError::SafeSize(self.safe_size));
        }
        // One order-deciding draw plus a full hand per seat.
        let needed = self
            .hand_size
            .checked_add(1)
            .and_then(|per_seat| per_seat.checked_mul(self.required_players))
            .ok_or(ConfigError::HandSize(self.hand_size))?;
        let available = self.board().total_tiles();
        if needed > available {
            return Err(ConfigError::NotEnoughTiles { needed, available });
        }
        Ok(())
    }

    /// Board geometry for this configuration.
    #[must_use]
    pub fn board(&self) -> Board {
        Board::new(self.rows, self.columns)
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_board(mut self, rows: u16, columns: u16) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the starting money.
    #[must_use]
    pub fn with_starting_money(mut self, money: u32) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the per-corporation stock pool.
    #[must_use]
    pub fn with_stock_pool(mut self, pool: u32) -> Self {
        self.stock_pool = pool;
        self
    }

    /// Set the safe size.
    #[must_use]
    pub fn with_safe_size(mut self, safe_size: usize) -> Self {
        self.safe_size = safe_size;
        self
    }

    /// Set the per-turn purchase limit.
    #[must_use]
    pub fn with_max_stocks_per_turn(mut self, max: u32) -> Self {
        self.max_stocks_per_turn = max;
        self
    }

    /// Set the flat purchase fee.
    #[must_use]
    pub fn with_base_fee(mut self, fee: u32) -> Self {
        self.base_fee = fee;
        self
    }
}
