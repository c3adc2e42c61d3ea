//! Corporation identities.
//!
//! A game always has exactly [`CORPORATION_COUNT`] corporations. Their slot
//! in [`Corporations`] is their identity: wire payloads refer to them by
//! index, and every per-corporation array in a status snapshot is aligned to
//! the same order.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::player::Named;

/// Number of corporations in every game.
pub const CORPORATION_COUNT: usize = 7;

/// Index of a corporation, always in `0..CORPORATION_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CorporationId(u8);

impl CorporationId {
    /// Build an id from a raw index, rejecting anything out of range.
    ///
    /// ```
    /// use acquire_driver::core::CorporationId;
    ///
    /// assert!(CorporationId::new(6).is_some());
    /// assert!(CorporationId::new(7).is_none());
    /// assert!(CorporationId::new(-1).is_none());
    /// ```
    #[must_use]
    pub fn new(index: i64) -> Option<Self> {
        if (0..CORPORATION_COUNT as i64).contains(&index) {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All ids in slot order.
    pub fn all() -> impl Iterator<Item = CorporationId> {
        (0..CORPORATION_COUNT as u8).map(CorporationId)
    }
}

impl TryFrom<u8> for CorporationId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value)).ok_or_else(|| format!("corporation index {value} out of range"))
    }
}

impl From<CorporationId> for u8 {
    fn from(id: CorporationId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CorporationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Corporation handle owned by the driver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Corporation {
    id: CorporationId,
    name: String,
}

impl Corporation {
    pub fn new(id: CorporationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CorporationId {
        self.id
    }
}

impl Named for Corporation {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The fixed, ordered set of corporations for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corporations([Corporation; CORPORATION_COUNT]);

impl Corporations {
    /// Create the set from display names; slot `i` gets `names[i]`.
    pub fn from_names(names: &[String; CORPORATION_COUNT]) -> Self {
        Self(std::array::from_fn(|i| {
            Corporation::new(CorporationId(i as u8), names[i].clone())
        }))
    }

    #[must_use]
    pub fn get(&self, id: CorporationId) -> &Corporation {
        &self.0[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Corporation> {
        self.0.iter()
    }
}

impl Index<CorporationId> for Corporations {
    type Output = Corporation;

    fn index(&self, id: CorporationId) -> &Self::Output {
        self.get(id)
    }
}
