//! Driver errors surfaced to the game server.
//!
//! The hosting runtime forwards errors to clients as plain string codes, so
//! every variant maps to a stable identifier through [`DriverError::code`] and
//! prints that same identifier through `Display`.
//!
//! | Variant | Code |
//! |---------|------|
//! | `NotEndGame` | `not_end_game` |
//! | `MessageParsing` | `message_parsing_error` |
//! | `GameAlreadyStarted` | `game_already_started` |
//! | `GameNotStarted` | `game_not_started` |
//! | `NonexistentPlayer` | `nonexistent_player` |
//! | `CorporationNotFound` | `corporation_not_found` |
//! | `BotNotFound` | `bot_not_found` |
//! | `InvalidConfig` | `invalid_config` |
//! | `Engine` | engine string, verbatim |

use thiserror::Error;

use crate::engine::EngineError;

/// Returned when a player claims the end of the game before it is reachable.
pub const NOT_END_GAME: &str = "not_end_game";
/// Returned when an incoming message can't be decoded.
pub const MESSAGE_PARSING_ERROR: &str = "message_parsing_error";
/// Returned when starting a game while one is already running.
pub const GAME_ALREADY_STARTED: &str = "game_already_started";
/// Returned when an operation needs a running game.
pub const GAME_NOT_STARTED: &str = "game_not_started";
/// Returned when a player number is unknown to the driver.
pub const NONEXISTENT_PLAYER: &str = "nonexistent_player";
/// Returned when a corporation index is outside `0..=6`.
pub const CORPORATION_NOT_FOUND: &str = "corporation_not_found";
/// Returned when asking for a bot level that doesn't exist.
pub const BOT_NOT_FOUND: &str = "bot_not_found";
/// Returned when a driver configuration can't describe a playable board.
pub const INVALID_CONFIG: &str = "invalid_config";

/// Error returned by every fallible driver and bot operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("not_end_game")]
    NotEndGame,

    /// The reason is for logs only; clients just see the code.
    #[error("message_parsing_error")]
    MessageParsing { reason: String },

    #[error("game_already_started")]
    GameAlreadyStarted,

    #[error("game_not_started")]
    GameNotStarted,

    #[error("nonexistent_player")]
    NonexistentPlayer,

    #[error("corporation_not_found")]
    CorporationNotFound,

    #[error("bot_not_found")]
    BotNotFound,

    #[error("invalid_config")]
    InvalidConfig { reason: String },

    /// Rule violation reported by the engine, passed through unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl DriverError {
    /// Build a parsing error from anything printable.
    pub fn parsing(reason: impl std::fmt::Display) -> Self {
        Self::MessageParsing {
            reason: reason.to_string(),
        }
    }

    /// Stable identifier sent to clients.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NotEndGame => NOT_END_GAME,
            Self::MessageParsing { .. } => MESSAGE_PARSING_ERROR,
            Self::GameAlreadyStarted => GAME_ALREADY_STARTED,
            Self::GameNotStarted => GAME_NOT_STARTED,
            Self::NonexistentPlayer => NONEXISTENT_PLAYER,
            Self::CorporationNotFound => CORPORATION_NOT_FOUND,
            Self::BotNotFound => BOT_NOT_FOUND,
            Self::InvalidConfig { .. } => INVALID_CONFIG,
            Self::Engine(err) => err.as_str(),
        }
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(err: serde_json::Error) -> Self {
        Self::parsing(err)
    }
}
