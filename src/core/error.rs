//! Error types.
//!
//! `ActionError` covers every ordinary rule violation a caller can trigger.
//! None of them leave a mark on the game: the rejected call performs no
//! mutation. Internal consistency failures live in
//! [`crate::rules::InvariantViolation`] instead.

use thiserror::Error;

use super::corporation::Corporation;
use super::player::PlayerId;
use super::tile::Tile;

/// A rejected game operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the game has not started")]
    NotStarted,
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("the game already has {required} players")]
    GameFull { required: usize },
    #[error("{joined} of {required} players have joined")]
    NotEnoughPlayers { joined: usize, required: usize },
    #[error("{0} has already joined")]
    DuplicatePlayer(PlayerId),
    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("cannot {action} while in state {state}")]
    WrongState {
        action: &'static str,
        state: &'static str,
    },
    #[error("{0} is not in hand")]
    TileNotInHand(Tile),
    #[error("{0} would merge a safe corporation")]
    UnplayableTile(Tile),
    #[error("{0} is already active")]
    CorporationActive(Corporation),
    #[error("{0} is not active")]
    CorporationInactive(Corporation),
    #[error("no unincorporated group contains {0}")]
    NoSuchGroup(Tile),
    #[error("requested {requested} shares, at most {limit} per turn")]
    PurchaseLimit { requested: u32, limit: u32 },
    #[error("{corporation} has {remaining} shares left, requested {requested}")]
    InsufficientStock {
        corporation: Corporation,
        requested: u32,
        remaining: u32,
    },
    #[error("costs {cost}, only {money} available")]
    InsufficientFunds { cost: u32, money: u32 },
    #[error("tiles offered for replacement do not match the unplayable tiles")]
    ReplacementMismatch,
}

/// Result type for game operations.
pub type ActionResult<T> = Result<T, ActionError>;
