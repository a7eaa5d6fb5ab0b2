//! Board state helpers: the tile bag and unincorporated grouping.
//!
//! ## Key Types
//!
//! - `TileBag`: Undrawn tiles with random, non-repeating draws
//! - `Group`: A connected run of two or more unincorporated tiles
//!
//! Geometry (`Board`, `Tile`) lives in `core::tile`.

pub mod bag;
pub mod groups;

pub use bag::TileBag;
pub use groups::{adjacent_placed_tiles, group_containing, unincorporated_groups, Group};
