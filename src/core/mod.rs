//! Core driver types: players, corporations, tiles, phases, RNG, configuration.
//!
//! These are the identities the driver owns for the lifetime of a session.
//! The engine is handed references to them and never reorders or replaces them.

pub mod player;
pub mod corporation;
pub mod tile;
pub mod phase;
pub mod rng;
pub mod config;

pub use player::{Named, Player, PlayerNumber};
pub use corporation::{Corporation, CorporationId, Corporations, CORPORATION_COUNT};
pub use tile::Tile;
pub use phase::Phase;
pub use rng::{GameRng, GameRngState};
pub use config::{BotConfig, DriverConfig};
