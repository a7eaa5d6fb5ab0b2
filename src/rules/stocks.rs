//! Stock purchase validation and pricing.

use crate::core::{ActionError, ActionResult, Corporation, GameConfig, StockOrder};
use crate::corporations::CorporationRegistry;

/// A validated purchase, ready to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    /// Corporations with a non-zero quantity, in catalog order.
    pub lines: Vec<(Corporation, u32)>,
    /// Total cost including the base fee.
    pub cost: u32,
}

impl Purchase {
    /// Whether any share is bought.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of shares bought.
    #[must_use]
    pub fn total_shares(&self) -> u32 {
        self.lines.iter().map(|(_, qty)| qty).sum()
    }
}

/// Validate `order` against the registry and the buyer's money.
///
/// Checks, in order: the per-turn cap, that every ordered corporation is
/// active with enough unsold shares, and that the buyer can pay. An order
/// with nothing in it is free.
pub fn price_purchase(
    order: &StockOrder,
    registry: &CorporationRegistry,
    money: u32,
    config: &GameConfig,
) -> ActionResult<Purchase> {
    let lines: Vec<(Corporation, u32)> = order
        .iter()
        .filter(|(_, qty)| **qty > 0)
        .map(|(corp, qty)| (*corp, *qty))
        .collect();

    let requested = lines.iter().fold(0u32, |sum, (_, qty)| sum.saturating_add(*qty));
    if requested > config.max_stocks_per_turn {
        return Err(ActionError::PurchaseLimit {
            requested,
            limit: config.max_stocks_per_turn,
        });
    }
    if lines.is_empty() {
        return Ok(Purchase { lines, cost: 0 });
    }

    let mut cost = config.base_fee;
    for &(corporation, qty) in &lines {
        if !registry.is_active(corporation) {
            return Err(ActionError::CorporationInactive(corporation));
        }
        let remaining = registry.stock_remaining(corporation);
        if remaining < qty {
            return Err(ActionError::InsufficientStock {
                corporation,
                requested: qty,
                remaining,
            });
        }
        cost += registry.share_price(corporation) * qty;
    }

    if cost > money {
        return Err(ActionError::InsufficientFunds { cost, money });
    }
    Ok(Purchase { lines, cost })
}
