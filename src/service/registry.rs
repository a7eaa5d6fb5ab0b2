//! Many games, each behind its own lock.
//!
//! The registry map is guarded by a read-write lock that is held only long
//! enough to look a game up; each operation then runs to completion under
//! that game's mutex. Operations on different games never wait on each
//! other.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use rustc_hash::FxHashMap;

use super::{GameService, ServiceError, ServiceResult};
use crate::core::{GameConfig, GameRng, Intent, PlayerId};
use crate::game::{Game, GameId, StatusSnapshot};

/// Source of fresh game ids.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// A sequence whose first id is `start`.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Take the next id.
    pub fn next_id(&self) -> GameId {
        GameId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Shared handle to one game.
pub type SharedGame = Arc<Mutex<GameService>>;

/// Every live game, keyed by id.
#[derive(Debug, Default)]
pub struct GameRegistry {
    ids: IdSequence,
    template: GameConfig,
    seed: Option<u64>,
    games: RwLock<FxHashMap<GameId, SharedGame>>,
}

impl GameRegistry {
    /// Registry whose games use `template` for every rule except the
    /// player count, and draw from OS entropy.
    #[must_use]
    pub fn new(template: GameConfig) -> Self {
        Self {
            template,
            ..Self::default()
        }
    }

    /// Registry whose games are deterministic: each game seeds its RNG
    /// from `seed` and its own id.
    #[must_use]
    pub fn seeded(template: GameConfig, seed: u64) -> Self {
        Self {
            template,
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Use a custom id source.
    #[must_use]
    pub fn with_ids(mut self, ids: IdSequence) -> Self {
        self.ids = ids;
        self
    }

    /// Open a new table for `required_players` players.
    pub fn create_game(&self, required_players: usize) -> ServiceResult<GameId> {
        let id = self.ids.next_id();
        let config = GameConfig {
            required_players,
            ..self.template.clone()
        };
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed.wrapping_add(id.0)),
            None => GameRng::from_entropy(),
        };
        let service = GameService::new(Game::new(id, config, rng)?);

        self.games
            .write()
            .map_err(|_| ServiceError::Poisoned(id))?
            .insert(id, Arc::new(Mutex::new(service)));
        tracing::info!(
            target: "acquire::service",
            game = id.0,
            required_players,
            "game.created"
        );
        Ok(id)
    }

    /// Look a game up.
    pub fn game(&self, id: GameId) -> ServiceResult<SharedGame> {
        self.games
            .read()
            .map_err(|_| ServiceError::Poisoned(id))?
            .get(&id)
            .cloned()
            .ok_or(ServiceError::UnknownGame(id))
    }

    /// Drop a game. Returns false if it did not exist.
    pub fn remove_game(&self, id: GameId) -> ServiceResult<bool> {
        let removed = self
            .games
            .write()
            .map_err(|_| ServiceError::Poisoned(id))?
            .remove(&id)
            .is_some();
        Ok(removed)
    }

    /// Number of live games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().map(|games| games.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` with exclusive access to one game.
    pub fn with_game<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut GameService) -> ServiceResult<T>,
    ) -> ServiceResult<T> {
        let game = self.game(id)?;
        let mut service = game.lock().map_err(|_| ServiceError::Poisoned(id))?;
        f(&mut *service)
    }

    pub fn add_player(&self, id: GameId, player: PlayerId, name: &str) -> ServiceResult<()> {
        self.with_game(id, |service| service.add_player(player, name))
    }

    pub fn start_game(&self, id: GameId) -> ServiceResult<()> {
        self.with_game(id, GameService::start_game)
    }

    pub fn status(&self, id: GameId, player: PlayerId) -> ServiceResult<StatusSnapshot> {
        self.with_game(id, |service| service.status(player))
    }

    pub fn apply(&self, id: GameId, player: PlayerId, intent: &Intent) -> ServiceResult<StatusSnapshot> {
        self.with_game(id, |service| service.apply(player, intent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let ids = IdSequence::starting_at(10);
        assert_eq!(ids.next_id(), GameId(10));
        assert_eq!(ids.next_id(), GameId(11));
    }

    #[test]
    fn test_create_and_lookup() {
        let registry = GameRegistry::seeded(GameConfig::default(), 5);
        assert!(registry.is_empty());

        let a = registry.create_game(2).unwrap();
        let b = registry.create_game(3).unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);

        let required = registry
            .with_game(b, |service| Ok(service.game().config().required_players))
            .unwrap();
        assert_eq!(required, 3);
    }

    #[test]
    fn test_unknown_game() {
        let registry = GameRegistry::default();
        assert!(matches!(
            registry.start_game(GameId(404)),
            Err(ServiceError::UnknownGame(GameId(404)))
        ));
    }

    #[test]
    fn test_invalid_player_count_rejected() {
        let registry = GameRegistry::default();
        assert!(matches!(registry.create_game(0), Err(ServiceError::Config(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_game() {
        let registry = GameRegistry::seeded(GameConfig::default(), 1);
        let id = registry.create_game(2).unwrap();
        assert!(registry.remove_game(id).unwrap());
        assert!(!registry.remove_game(id).unwrap());
        assert!(matches!(registry.game(id), Err(ServiceError::UnknownGame(_))));
    }
}
