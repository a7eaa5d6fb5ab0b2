//! Game orchestration: one table, its players and its turn flow.
//!
//! ## Key Types
//!
//! - `Game`: Owns the board, bag, corporations and players of one table
//! - `GameId`: Identifier assigned by the registry
//! - `StatusSnapshot`: What one player is allowed to see

#[allow(clippy::module_inception)]
pub mod game;
pub mod status;

pub use game::{Game, GameId};
pub use status::{
    ActionOptions, CorporationStatus, GameStatus, PlayerStatus, PlayersProfile, StatusSnapshot,
};
