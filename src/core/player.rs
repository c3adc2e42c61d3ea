//! Player identification.
//!
//! The hosting server numbers its clients; the driver keeps that number as
//! the player's identity for the whole session and pairs it with a display
//! name used in history entries.

use serde::{Deserialize, Serialize};

/// Anything that can be shown to players by name.
///
/// Both players and corporations expose their display name through this
/// trait, so history entries never need to know the concrete handle type.
pub trait Named {
    /// Display name.
    fn name(&self) -> &str;
}

/// Seat number assigned by the hosting server.
///
/// Numbers are unique and stable for a session but not necessarily dense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerNumber(pub u32);

impl PlayerNumber {
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Player handle owned by the driver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    number: PlayerNumber,
    name: String,
}

impl Player {
    pub fn new(number: PlayerNumber, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn number(&self) -> PlayerNumber {
        self.number
    }
}

impl Named for Player {
    fn name(&self) -> &str {
        &self.name
    }
}
