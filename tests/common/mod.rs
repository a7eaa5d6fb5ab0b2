//! Shared helpers for integration tests: seating players and a simple
//! driver that picks a legal-looking move for whoever's turn it is.

#![allow(dead_code)]

use acquire_engine::core::{GameConfig, GameRng, Intent, PlayerId, StockOrder};
use acquire_engine::game::{Game, GameId};
use acquire_engine::rules::TurnState;
use acquire_engine::service::GameService;

/// A started game with `players` seated players named p1, p2, ...
pub fn started_service(players: usize, seed: u64) -> GameService {
    let game = Game::new(GameId(1), GameConfig::new(players), GameRng::new(seed)).unwrap();
    let mut service = GameService::new(game);
    for id in 1..=players as u64 {
        service.add_player(PlayerId::new(id), format!("p{id}")).unwrap();
    }
    service.start_game().unwrap();
    service
}

/// The move the driver would make for the current player, steered by
/// `choice`. `None` when the current player has nothing they can do.
pub fn next_intent(game: &Game, choice: usize) -> Option<(PlayerId, Intent)> {
    let player = game.current_player()?;
    let id = player.id();

    let intent = match player.state() {
        TurnState::Wait => return None,
        TurnState::PlaceTile => {
            let blocked = game.unplayable_tiles(player);
            let playable: Vec<_> = player
                .hand()
                .iter()
                .copied()
                .filter(|t| !blocked.contains(t))
                .collect();
            if playable.is_empty() {
                return None;
            }
            Intent::PlaceTile {
                tile: playable[choice % playable.len()],
            }
        }
        TurnState::UnplayableTile { tiles } => Intent::ReplaceTiles { tiles: tiles.clone() },
        TurnState::Establish => {
            let groups = game.groups();
            let inactive = game.corporations().inactive();
            if choice % 5 == 0 || groups.is_empty() || inactive.is_empty() {
                Intent::Skip
            } else {
                Intent::Establish {
                    tile: groups[choice % groups.len()][0],
                    corporation: inactive[choice % inactive.len()],
                }
            }
        }
        TurnState::NoCorps => Intent::Skip,
        TurnState::BuyStocks => {
            let active = game.corporations().active();
            if active.is_empty() {
                Intent::Skip
            } else {
                let corporation = active[choice % active.len()];
                let stocks: StockOrder = [(corporation, (choice % 4) as u32)].into_iter().collect();
                Intent::BuyStocks { stocks }
            }
        }
    };
    Some((id, intent))
}
