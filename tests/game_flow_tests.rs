//! End-to-end game flow through the service surface.

mod common;

use acquire_engine::core::{ActionError, ActivityKind, Intent, PlayerId, Tile};
use acquire_engine::game::ActionOptions;
use acquire_engine::rules::{check_invariants, TurnState};
use acquire_engine::service::ServiceError;

use common::{next_intent, started_service};

/// Test the opening of a two-player game.
#[test]
fn test_two_player_start() {
    let service = started_service(2, 42);
    let game = service.game();

    let kinds: Vec<_> = game.activity().kinds().collect();
    assert_eq!(
        kinds,
        vec![ActivityKind::Order, ActivityKind::TilePlaced, ActivityKind::Turn]
    );

    let hands: Vec<&[Tile]> = game.players().iter().map(|p| p.hand()).collect();
    assert_eq!(hands[0].len(), 6);
    assert_eq!(hands[1].len(), 6);
    assert!(hands[0].iter().all(|t| !hands[1].contains(t)));

    // Turn order follows the opening tiles, which stay on the board.
    let opening = game.placed_tiles();
    assert_eq!(opening.len(), 2);
    assert!(opening[0] < opening[1]);
    assert_eq!(game.current_index(), 0);
    assert_eq!(game.bag().len(), 108 - 2 - 12);
}

/// Test every seat count from one to six.
#[test]
fn test_start_for_every_seat_count() {
    for players in 1..=6 {
        let service = started_service(players, players as u64);
        let game = service.game();
        assert_eq!(game.players().len(), players);
        assert!(game.players().iter().all(|p| p.hand().len() == 6));
        assert!(game.players()[0].is_turn());
        assert!(check_invariants(game).is_empty());
    }
}

/// Test that the turn passes around the table in order.
#[test]
fn test_turns_rotate() {
    let mut service = started_service(3, 8);
    let order: Vec<PlayerId> = service.game().players().iter().map(|p| p.id()).collect();

    let mut seen = Vec::new();
    let mut choice = 0;
    while seen.len() < 6 {
        let game = service.game();
        let current = game.current_player().unwrap().id();
        if seen.last() != Some(&current) {
            seen.push(current);
        }
        let (player, intent) = next_intent(game, choice).unwrap();
        if service.apply(player, &intent).is_err() {
            service.skip(player).unwrap();
        }
        choice += 1;
    }

    assert_eq!(seen[..3], order[..]);
    assert_eq!(seen[3..], order[..]);
}

/// Test that a rejected move from a waiting player changes nothing.
#[test]
fn test_waiting_player_cannot_move() {
    let mut service = started_service(2, 5);
    let waiting = service.game().players()[1].clone();
    let before = service.status(waiting.id()).unwrap();

    for intent in [
        Intent::PlaceTile { tile: waiting.hand()[0] },
        Intent::Skip,
        Intent::ReplaceTiles { tiles: vec![waiting.hand()[0]] },
    ] {
        let err = service.apply(waiting.id(), &intent).unwrap_err();
        assert!(matches!(err, ServiceError::Action(ActionError::NotYourTurn(_))));
    }

    assert_eq!(service.status(waiting.id()).unwrap(), before);
}

/// Test that a snapshot only exposes the requester's own hand.
#[test]
fn test_status_is_per_player() {
    let service = started_service(2, 13);
    let game = service.game();
    let [first, second] = [&game.players()[0], &game.players()[1]];

    let mine = service.status(first.id()).unwrap();
    let theirs = service.status(second.id()).unwrap();

    assert_eq!(mine.status.player.tiles, first.hand());
    assert_eq!(theirs.status.player.tiles, second.hand());
    assert_eq!(mine.status.placed_tiles, theirs.status.placed_tiles);
    assert_eq!(mine.status.activity, theirs.status.activity);
    assert!(matches!(
        mine.action,
        ActionOptions::PlaceTile | ActionOptions::UnplayableTile { .. }
    ));
    assert_eq!(theirs.action, ActionOptions::Wait);
    assert_eq!(theirs.status.player.status_msg, "Wait for your turn");
}

/// Test a long seeded game played by the driver.
#[test]
fn test_long_game_keeps_invariants() {
    let mut service = started_service(4, 2024);

    for choice in 0..400 {
        let Some((player, intent)) = next_intent(service.game(), choice * 7 + 3) else {
            break;
        };
        match service.apply(player, &intent) {
            Ok(snapshot) => {
                assert_eq!(
                    snapshot.status.players_profile.current_player,
                    service.game().current_index()
                );
            }
            Err(ServiceError::Action(_)) => {
                // Rejected purchases fall back to passing.
                assert_eq!(
                    service.game().current_player().unwrap().state(),
                    &TurnState::BuyStocks
                );
                service.skip(player).unwrap();
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert!(check_invariants(service.game()).is_empty());
    }

    let game = service.game();
    assert!(game.activity().len() > 20);
    assert!(game.activity().kinds().any(|k| k == ActivityKind::Establish));
}

/// Test that seeded games replay identically.
#[test]
fn test_seeded_replay() {
    let play = |seed| {
        let mut service = started_service(2, seed);
        for choice in 0..60 {
            let Some((player, intent)) = next_intent(service.game(), choice) else {
                break;
            };
            if service.apply(player, &intent).is_err() {
                service.skip(player).unwrap();
            }
        }
        service.game().activity().clone()
    };

    assert_eq!(play(77), play(77));
}

/// Test intents decoded from JSON request bodies.
#[test]
fn test_json_intents() {
    let mut service = started_service(2, 31);
    let current = service.game().players()[0].clone();
    let Some(tile) = current
        .hand()
        .iter()
        .copied()
        .find(|t| !service.game().unplayable_tiles(&current).contains(t))
    else {
        return;
    };

    let body = format!(r#"{{ "action": "placeTile", "tile": {} }}"#, tile.0);
    let intent: Intent = serde_json::from_str(&body).unwrap();
    let snapshot = service.apply(current.id(), &intent).unwrap();

    assert!(!snapshot.status.player.tiles.contains(&tile));
    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json["status"]["activity"].as_array().unwrap().len() >= 4);
}
