//! Core engine types: tiles, corporations, players, intents, activity,
//! RNG, configuration and errors.
//!
//! Everything here is plain data with no knowledge of turn flow. The
//! rules and the `Game` orchestrator are built on top.

pub mod action;
pub mod activity;
pub mod config;
pub mod corporation;
pub mod error;
pub mod player;
pub mod rng;
pub mod tile;

pub use action::{Intent, StockOrder};
pub use activity::{ActivityKind, ActivityLog, ActivityRecord};
pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MAX_TILES};
pub use corporation::{CorpMap, Corporation, Tier, CORPORATION_COUNT};
pub use error::{ActionError, ActionResult};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use tile::{Board, Neighbours, Tile};
