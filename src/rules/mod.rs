//! Game rules that sit beside the orchestrator.
//!
//! - `turn`: The per-player turn state machine's states
//! - `stocks`: Purchase validation and pricing
//! - `bonus`: Merger bonus distribution
//! - `invariants`: Consistency checks run after every mutation
//!
//! Everything here is a pure function of its inputs; `Game` applies the
//! results.

pub mod bonus;
pub mod invariants;
pub mod stocks;
pub mod turn;

pub use bonus::merger_bonuses;
pub use invariants::{check_invariants, InvariantViolation};
pub use stocks::{price_purchase, Purchase};
pub use turn::TurnState;
