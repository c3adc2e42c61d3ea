//! # acquire-driver
//!
//! Game server driver for the Acquire board game, plus a rule-based bot.
//!
//! ## Design Principles
//!
//! 1. **Rules Stay in the Engine**: Board adjacency, stock prices, merges and
//!    the tile deck live behind the [`Engine`] trait. The driver translates
//!    and reports; it never decides what is legal.
//!
//! 2. **Stable Identities**: Players keep their server seat number, and the
//!    seven corporations keep their slot for the whole session. Every
//!    per-corporation array on the wire is aligned to those slots.
//!
//! 3. **Errors Are Values**: Every failure comes back as a [`DriverError`]
//!    with a stable string code. Nothing panics on bad input.
//!
//! ## Data Flow
//!
//! ```text
//! client action ─> Driver::execute ─> Engine mutation ─> History
//! Driver::status ─> Status snapshot ─> (bot) AiClient::play ─> Driver::dispatch
//! ```
//!
//! ## Modules
//!
//! - `core`: players, corporations, tiles, phases, RNG, configuration
//! - `engine`: the gateway traits the rules engine implements
//! - `protocol`: wire messages (action envelope, status snapshot, history)
//! - `driver`: dispatch, history recording, status projection
//! - `bots`: the chaotic bot and the JSON-facing AI client
//! - `error`: boundary error codes

pub mod core;
pub mod engine;
pub mod protocol;
pub mod driver;
pub mod bots;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    BotConfig, Corporation, CorporationId, Corporations, DriverConfig, GameRng, GameRngState,
    Named, Phase, Player, PlayerNumber, Tile, CORPORATION_COUNT,
};

pub use crate::engine::{Cell, CorporationStats, Engine, EngineError, EngineFactory, ShareAmounts};

pub use crate::protocol::{
    Action, ActionKind, Command, CorpData, HistoryEntry, HistoryKey, PlayerData, Status,
};

pub use crate::driver::{Driver, History, PlayersInfo, DRIVER_NAME};

pub use crate::bots::{AiClient, Bot, Chaotic};

pub use crate::error::DriverError;
