//! The fixed corporation catalog and per-corporation storage.
//!
//! ## Corporation
//!
//! Seven corporations in catalog order. Catalog order is also the
//! deterministic tie-break whenever two corporations have the same area.
//!
//! ## Tier
//!
//! Each corporation belongs to a price tier. Share price depends on the
//! tier and the corporation's area; merger bonuses are multiples of price.
//!
//! ## CorpMap
//!
//! Dense per-corporation storage, indexed by `Corporation` in O(1).

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::ops::{Index, IndexMut};

/// Number of corporations in the catalog.
pub const CORPORATION_COUNT: usize = 7;

/// One of the seven corporations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corporation {
    Phoenix,
    Quantum,
    Hydra,
    Fusion,
    America,
    Sackson,
    Zeta,
}

impl Corporation {
    /// All corporations in catalog order.
    pub const ALL: [Corporation; CORPORATION_COUNT] = [
        Corporation::Phoenix,
        Corporation::Quantum,
        Corporation::Hydra,
        Corporation::Fusion,
        Corporation::America,
        Corporation::Sackson,
        Corporation::Zeta,
    ];

    /// Position in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used on the wire and in activity text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Corporation::Phoenix => "phoenix",
            Corporation::Quantum => "quantum",
            Corporation::Hydra => "hydra",
            Corporation::Fusion => "fusion",
            Corporation::America => "america",
            Corporation::Sackson => "sackson",
            Corporation::Zeta => "zeta",
        }
    }

    /// Price tier of this corporation.
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Corporation::Sackson | Corporation::Zeta => Tier::Cheap,
            Corporation::Hydra | Corporation::Fusion | Corporation::America => Tier::Medium,
            Corporation::Phoenix | Corporation::Quantum => Tier::Expensive,
        }
    }

    /// Share price at the given area. Zero below two tiles.
    #[must_use]
    pub const fn share_price(self, area: usize) -> u32 {
        self.tier().share_price(area)
    }

    /// Majority shareholder bonus at the given area.
    #[must_use]
    pub const fn majority_bonus(self, area: usize) -> u32 {
        self.share_price(area) * 10
    }

    /// Minority shareholder bonus at the given area.
    #[must_use]
    pub const fn minority_bonus(self, area: usize) -> u32 {
        self.share_price(area) * 5
    }
}

impl std::fmt::Display for Corporation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Price tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Cheap,
    Medium,
    Expensive,
}

impl Tier {
    const fn premium(self) -> u32 {
        match self {
            Tier::Cheap => 0,
            Tier::Medium => 100,
            Tier::Expensive => 200,
        }
    }

    /// Share price for a corporation of this tier with `area` tiles.
    #[must_use]
    pub const fn share_price(self, area: usize) -> u32 {
        let base = match area {
            0 | 1 => return 0,
            2 => 200,
            3 => 300,
            4 => 400,
            5 => 500,
            6..=10 => 600,
            11..=20 => 700,
            21..=30 => 800,
            31..=40 => 900,
            _ => 1000,
        };
        base + self.premium()
    }
}

/// Per-corporation data storage with O(1) access.
///
/// Serializes as a map keyed by corporation name, in catalog order.
///
/// ```
/// use acquire_engine::core::{CorpMap, Corporation};
///
/// let mut stocks: CorpMap<u32> = CorpMap::with_value(0);
/// stocks[Corporation::Zeta] += 2;
/// assert_eq!(stocks[Corporation::Zeta], 2);
/// assert_eq!(stocks.values().sum::<u32>(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CorpMap<T> {
    data: [T; CORPORATION_COUNT],
}

impl<T> CorpMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Corporation) -> T) -> Self {
        Self {
            data: Corporation::ALL.map(factory),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a corporation's entry.
    #[must_use]
    pub fn get(&self, corporation: Corporation) -> &T {
        &self.data[corporation.index()]
    }

    /// Get a mutable reference to a corporation's entry.
    pub fn get_mut(&mut self, corporation: Corporation) -> &mut T {
        &mut self.data[corporation.index()]
    }

    /// Iterate over (Corporation, &T) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Corporation, &T)> {
        Corporation::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Corporation, &mut T) pairs in catalog order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Corporation, &mut T)> {
        Corporation::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in catalog order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for CorpMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Corporation> for CorpMap<T> {
    type Output = T;

    fn index(&self, corporation: Corporation) -> &Self::Output {
        self.get(corporation)
    }
}

impl<T> IndexMut<Corporation> for CorpMap<T> {
    fn index_mut(&mut self, corporation: Corporation) -> &mut Self::Output {
        self.get_mut(corporation)
    }
}

impl<T: Serialize> Serialize for CorpMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CORPORATION_COUNT))?;
        for (corporation, value) in self.iter() {
            map.serialize_entry(corporation.name(), value)?;
        }
        map.end()
    }
}
