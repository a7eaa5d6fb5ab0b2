//! Game invariants: consistency checks that detect engine bugs.
//!
//! None of these should ever fire for a game driven through its public
//! operations. The service runs them after every accepted mutation.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{Corporation, Tile};
use crate::game::Game;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check all game invariants.
///
/// Returns every violation found, or an empty list if the game is
/// consistent.
#[must_use]
pub fn check_invariants(game: &Game) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    check_tiles(game, &mut violations);
    check_stocks(game, &mut violations);
    check_corporations(game, &mut violations);
    check_turns(game, &mut violations);
    violations
}

/// Every tile is in exactly one place: the bag, a hand, the board, or a
/// corporation.
fn check_tiles(game: &Game, violations: &mut Vec<InvariantViolation>) {
    let board = game.board();
    let mut seen: FxHashSet<Tile> = FxHashSet::default();
    let mut count = 0usize;

    let hands = game.players().iter().flat_map(|p| p.hand().iter());
    let owned = Corporation::ALL
        .iter()
        .flat_map(|c| game.corporations().get(*c).tiles().iter());
    let everywhere = game
        .bag()
        .tiles()
        .iter()
        .chain(hands)
        .chain(game.placed_tiles().iter())
        .chain(owned);

    for &tile in everywhere {
        count += 1;
        if !board.contains(tile) {
            violations.push(InvariantViolation::new(format!("{tile} is off the board")));
        }
        if !seen.insert(tile) {
            violations.push(InvariantViolation::new(format!("{tile} is in two places")));
        }
    }

    let registry = game.corporations();
    for &tile in game.placed_tiles() {
        if let Some(owner) = registry.owner_of(tile) {
            violations.push(InvariantViolation::new(format!(
                "{tile} is placed but owned by {owner}"
            )));
        }
    }
    for corporation in Corporation::ALL {
        for &tile in registry.get(corporation).tiles() {
            if let Some(owner) = registry.owner_of(tile).filter(|&o| o != corporation) {
                violations.push(InvariantViolation::new(format!(
                    "{tile} is owned by both {owner} and {corporation}"
                )));
            }
        }
    }

    if count != board.total_tiles() {
        violations.push(InvariantViolation::new(format!(
            "tile count {count} != board size {}",
            board.total_tiles()
        )));
    }
}

/// Unsold shares plus held shares equal the pool for every corporation.
fn check_stocks(game: &Game, violations: &mut Vec<InvariantViolation>) {
    let pool = game.config().stock_pool;
    for corporation in Corporation::ALL {
        let held: u32 = game.players().iter().map(|p| p.stocks()[corporation]).sum();
        let remaining = game.corporations().stock_remaining(corporation);
        if held + remaining != pool {
            violations.push(InvariantViolation::new(format!(
                "{corporation}: {remaining} unsold + {held} held != pool {pool}"
            )));
        }
    }
}

/// Active corporations hold at least two tiles; inactive ones hold none.
fn check_corporations(game: &Game, violations: &mut Vec<InvariantViolation>) {
    for corporation in Corporation::ALL {
        let registry = game.corporations();
        let area = registry.area(corporation);
        match (registry.is_active(corporation), area) {
            (true, 0 | 1) => violations.push(InvariantViolation::new(format!(
                "{corporation} is active with area {area}"
            ))),
            (false, 1..) => violations.push(InvariantViolation::new(format!(
                "{corporation} is inactive but owns {area} tiles"
            ))),
            _ => {}
        }
    }
}

/// Once started, exactly the current player has the turn and is out of
/// `wait`; before that, nobody has the turn.
fn check_turns(game: &Game, violations: &mut Vec<InvariantViolation>) {
    use super::TurnState;

    let current = game.current_index();
    for (idx, player) in game.players().iter().enumerate() {
        let should_have_turn = game.is_started() && idx == current;
        if player.is_turn() != should_have_turn {
            violations.push(InvariantViolation::new(format!(
                "{} turn flag is {}, expected {should_have_turn}",
                player.id(),
                player.is_turn()
            )));
        }
        let waiting = *player.state() == TurnState::Wait;
        if waiting == should_have_turn {
            violations.push(InvariantViolation::new(format!(
                "{} is in state {} with turn flag {should_have_turn}",
                player.id(),
                player.state()
            )));
        }
    }
    if game.is_started() && current >= game.players().len() {
        violations.push(InvariantViolation::new(format!(
            "current player index {current} out of range"
        )));
    }
}
