//! Player intents: the requests a host forwards to a game.
//!
//! Each intent is one move by one player. The routing layer decodes a
//! request body into an `Intent` and hands it to
//! [`GameService::apply`](crate::service::GameService::apply) together
//! with the authenticated player id.
//!
//! ```
//! use acquire_engine::core::{Corporation, Intent, Tile};
//!
//! let intent: Intent = serde_json::from_str(
//!     r#"{ "action": "establish", "tile": 13, "corporation": "zeta" }"#,
//! ).unwrap();
//! assert_eq!(intent, Intent::Establish { tile: Tile::new(13), corporation: Corporation::Zeta });
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::corporation::Corporation;
use super::tile::Tile;

/// Shares requested per corporation.
///
/// Ordered so activity text lists corporations deterministically.
pub type StockOrder = BTreeMap<Corporation, u32>;

/// A single move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Intent {
    /// Place a tile from hand.
    PlaceTile { tile: Tile },

    /// Found a corporation on the group containing `tile`.
    Establish { tile: Tile, corporation: Corporation },

    /// Buy shares.
    BuyStocks { stocks: StockOrder },

    /// Pass on the current optional step.
    Skip,

    /// Swap the flagged unplayable tiles for fresh ones.
    ReplaceTiles { tiles: Vec<Tile> },
}

impl Intent {
    /// Short verb for logs and errors.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Intent::PlaceTile { .. } => "place a tile",
            Intent::Establish { .. } => "establish a corporation",
            Intent::BuyStocks { .. } => "buy stocks",
            Intent::Skip => "skip",
            Intent::ReplaceTiles { .. } => "replace tiles",
        }
    }
}
