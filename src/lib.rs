//! # acquire-engine
//!
//! Rules engine for an Acquire-style tile and stock trading board game.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: Every operation checks all of its
//!    preconditions before touching state. A rejected call is an `Err`
//!    value and leaves the game exactly as it was.
//!
//! 2. **Closed vocabularies**: Corporations, turn states and intents are
//!    enums. Per-corporation data lives in `CorpMap<T>`, indexed by the
//!    enum, never by string.
//!
//! 3. **Configuration Over Constants**: Board size, hand size, stock pool,
//!    safe size and purchase limits all come from `GameConfig`.
//!
//! ## Architecture
//!
//! - **Single writer per game**: `GameRegistry` keeps each game behind its
//!   own mutex; different games never contend.
//!
//! - **Deterministic RNG**: Seeded games replay identically (`ChaCha8Rng`).
//!
//! - **Invariant checks**: The service checks tile and stock conservation
//!   after every accepted mutation.
//!
//! ## Modules
//!
//! - `core`: Tiles, corporations, players, intents, activity, RNG, config, errors
//! - `board`: The tile bag and unincorporated grouping
//! - `corporations`: Corporation registry and lifecycle
//! - `rules`: Turn states, stock pricing, merger bonuses, invariants
//! - `game`: The `Game` orchestrator and status snapshots
//! - `service`: Host-facing façade and multi-game registry

pub mod core;
pub mod board;
pub mod corporations;
pub mod rules;
pub mod game;
pub mod service;

// Re-export commonly used types
pub use crate::core::{
    Board, Tile,
    CorpMap, Corporation, Tier,
    Player, PlayerId,
    ActivityKind, ActivityLog, ActivityRecord,
    Intent, StockOrder,
    GameConfig, ConfigError,
    GameRng,
    ActionError, ActionResult,
};

pub use crate::board::{Group, TileBag};

pub use crate::corporations::{CorporationRegistry, CorporationState};

pub use crate::rules::{check_invariants, InvariantViolation, TurnState};

pub use crate::game::{ActionOptions, Game, GameId, StatusSnapshot};

pub use crate::service::{GameRegistry, GameService, IdSequence, ServiceError, ServiceResult};
