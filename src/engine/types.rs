//! Values exchanged with the engine.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::core::CorporationId;

/// Share counts per corporation, ordered by corporation index.
pub type ShareAmounts = BTreeMap<CorporationId, u32>;

/// Contents of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Tile placed but not part of any corporation.
    Unincorporated,
    Corporation(CorporationId),
}

impl Cell {
    /// Engine kind name: `empty`, `unincorporated` or `corporation`.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Unincorporated => "unincorporated",
            Cell::Corporation(_) => "corporation",
        }
    }
}

/// Market data for one corporation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorporationStats {
    pub price: u32,
    pub majority_bonus: u32,
    pub minority_bonus: u32,
    /// Shares left in the bank.
    pub remaining_shares: u32,
    /// Tiles on the board.
    pub size: u32,
}

/// Rule violation reported by the engine, identified by its string code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EngineError(String);

impl EngineError {
    /// The shared tile pool ran out while finishing the turn.
    pub const NO_TILES_AVAILABLE: &'static str = "no_tiles_available";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn no_tiles_available() -> Self {
        Self::new(Self::NO_TILES_AVAILABLE)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the pool-exhaustion marker, which the driver records in
    /// history instead of failing the action.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.0 == Self::NO_TILES_AVAILABLE
    }
}
