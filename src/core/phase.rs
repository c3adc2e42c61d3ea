//! Turn phases as reported by the engine.

use serde::{Deserialize, Serialize};

/// Stage of the current turn, gating which actions are legal.
///
/// Serialized as the engine's state name. Names the driver doesn't know are
/// kept verbatim in [`Phase::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Phase {
    #[default]
    PlayTile,
    FoundCorp,
    BuyStock,
    SellTrade,
    UntieMerge,
    EndGame,
    InsufficientPlayers,
    Error,
    Other(String),
}

impl Phase {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Phase::PlayTile => "PlayTile",
            Phase::FoundCorp => "FoundCorp",
            Phase::BuyStock => "BuyStock",
            Phase::SellTrade => "SellTrade",
            Phase::UntieMerge => "UntieMerge",
            Phase::EndGame => "EndGame",
            Phase::InsufficientPlayers => "InsufficientPlayers",
            Phase::Error => "Error",
            Phase::Other(name) => name,
        }
    }

    /// True once the game can't continue.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::EndGame | Phase::InsufficientPlayers | Phase::Error)
    }
}

impl From<String> for Phase {
    fn from(name: String) -> Self {
        match name.as_str() {
            "PlayTile" => Phase::PlayTile,
            "FoundCorp" => Phase::FoundCorp,
            "BuyStock" => Phase::BuyStock,
            "SellTrade" => Phase::SellTrade,
            "UntieMerge" => Phase::UntieMerge,
            "EndGame" => Phase::EndGame,
            "InsufficientPlayers" => Phase::InsufficientPlayers,
            "Error" => Phase::Error,
            _ => Phase::Other(name),
        }
    }
}

impl From<Phase> for String {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
