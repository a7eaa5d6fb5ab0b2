//! Host-facing façade.
//!
//! `GameService` wraps one `Game`, turns every accepted mutation into a
//! fresh status snapshot for the caller, and checks invariants after each
//! one. `GameRegistry` keeps many services behind per-game locks.
//!
//! ```
//! use acquire_engine::core::{GameConfig, GameRng, Intent, PlayerId};
//! use acquire_engine::game::{Game, GameId};
//! use acquire_engine::service::GameService;
//!
//! let game = Game::new(GameId(1), GameConfig::new(2), GameRng::new(7)).unwrap();
//! let mut service = GameService::new(game);
//! service.add_player(PlayerId::new(1), "alice").unwrap();
//! service.add_player(PlayerId::new(2), "bob").unwrap();
//! service.start_game().unwrap();
//!
//! let first = service.game().players()[0].id();
//! let tile = service.game().players()[0].hand()[0];
//! let snapshot = service.apply(first, &Intent::PlaceTile { tile }).unwrap();
//! assert!(!snapshot.status.activity.is_empty());
//! ```

pub mod registry;

use thiserror::Error;

use crate::core::{
    ActionError, ActionResult, ConfigError, Corporation, Intent, PlayerId, StockOrder, Tile,
};
use crate::game::{Game, GameId, StatusSnapshot};
use crate::rules::{check_invariants, InvariantViolation};

pub use registry::{GameRegistry, IdSequence};

/// Errors surfaced to hosts.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error("no game with id {0}")]
    UnknownGame(GameId),
    #[error("game {0} is unavailable after a panic")]
    Poisoned(GameId),
}

/// Result type for service calls.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// One game behind the host-facing surface.
#[derive(Clone, Debug)]
pub struct GameService {
    game: Game,
}

impl GameService {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// The wrapped game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Seat a player. A full or started game rejects the join.
    pub fn add_player(&mut self, player: PlayerId, name: impl Into<String>) -> ServiceResult<()> {
        let result = self.game.add_player(player, name);
        self.settle(player, "join", result)
    }

    /// Start the game once every seat is taken.
    pub fn start_game(&mut self) -> ServiceResult<()> {
        let result = self.game.start();
        if let Err(err) = &result {
            tracing::debug!(
                target: "acquire::service",
                game = self.game.id().0,
                error = %err,
                "action.rejected"
            );
        }
        result?;
        self.verify()
    }

    pub fn place_tile(&mut self, player: PlayerId, tile: Tile) -> ServiceResult<StatusSnapshot> {
        self.apply(player, &Intent::PlaceTile { tile })
    }

    pub fn establish_corporation(
        &mut self,
        player: PlayerId,
        tile: Tile,
        corporation: Corporation,
    ) -> ServiceResult<StatusSnapshot> {
        self.apply(player, &Intent::Establish { tile, corporation })
    }

    pub fn buy_stocks(&mut self, player: PlayerId, stocks: StockOrder) -> ServiceResult<StatusSnapshot> {
        self.apply(player, &Intent::BuyStocks { stocks })
    }

    pub fn skip(&mut self, player: PlayerId) -> ServiceResult<StatusSnapshot> {
        self.apply(player, &Intent::Skip)
    }

    pub fn replace_tiles(&mut self, player: PlayerId, tiles: Vec<Tile>) -> ServiceResult<StatusSnapshot> {
        self.apply(player, &Intent::ReplaceTiles { tiles })
    }

    /// Everything `player` may see. Never mutates.
    pub fn status(&self, player: PlayerId) -> ServiceResult<StatusSnapshot> {
        Ok(self.game.status(player)?)
    }

    /// Perform one move for `player` and return their new status.
    pub fn apply(&mut self, player: PlayerId, intent: &Intent) -> ServiceResult<StatusSnapshot> {
        let result = match intent {
            Intent::PlaceTile { tile } => self.game.place_tile(player, *tile),
            Intent::Establish { tile, corporation } => {
                self.game.establish_corporation(player, *tile, *corporation)
            }
            Intent::BuyStocks { stocks } => self.game.buy_stocks(player, stocks),
            Intent::Skip => self.game.skip(player),
            Intent::ReplaceTiles { tiles } => self.game.replace_tiles(player, tiles),
        };
        self.settle(player, intent.verb(), result)?;
        self.status(player)
    }

    fn settle(&self, player: PlayerId, action: &str, result: ActionResult<()>) -> ServiceResult<()> {
        if let Err(err) = &result {
            tracing::debug!(
                target: "acquire::service",
                game = self.game.id().0,
                player = player.0,
                action,
                error = %err,
                "action.rejected"
            );
        }
        result?;
        self.verify()
    }

    fn verify(&self) -> ServiceResult<()> {
        let mut violations = check_invariants(&self.game).into_iter();
        let Some(first) = violations.next() else {
            return Ok(());
        };
        for violation in std::iter::once(&first).chain(violations.as_slice()) {
            tracing::error!(
                target: "acquire::service",
                game = self.game.id().0,
                violation = %violation,
                "invariant.violated"
            );
        }
        Err(first.into())
    }
}
