//! Corporation lifecycle: founding, growth, dissolution and stock pools.
//!
//! ## Key Types
//!
//! - `Corporation`: The fixed catalog (from `core::corporation`)
//! - `CorporationState`: One corporation's tiles, status and unsold shares
//! - `CorporationRegistry`: Status lookup and lifecycle operations

pub mod registry;

pub use registry::{AdjacentCorporations, CorporationRegistry, CorporationState};

// Re-export catalog types from core for convenience
pub use crate::core::corporation::{CorpMap, Corporation, Tier};
