//! Automated players.
//!
//! A bot is fed a [`Status`] addressed to it and asked for its next move.
//! It keeps only the latest snapshot; each update replaces the previous one
//! wholesale. Update and play are synchronous and must be called in that
//! order.
//!
//! - [`Chaotic`]: fixed random heuristics, one per turn phase
//! - [`AiClient`]: JSON-facing wrapper used by the game server

mod chaotic;
mod client;

pub use chaotic::Chaotic;
pub use client::AiClient;

use crate::core::BotConfig;
use crate::error::DriverError;
use crate::protocol::{Command, Status};

/// Level name of the [`Chaotic`] bot.
pub const CHAOTIC: &str = "chaotic";

/// A computer player.
pub trait Bot {
    /// Replace the held snapshot.
    fn update(&mut self, status: Status);

    /// Next action for the held snapshot, `None` when there is nothing to do
    /// in the current phase.
    fn play(&mut self) -> Option<Command>;
}

/// Create a bot of the given level.
pub fn create(level: &str, config: BotConfig) -> Result<Box<dyn Bot>, DriverError> {
    match level {
        CHAOTIC => Ok(Box::new(Chaotic::new(config))),
        _ => Err(DriverError::BotNotFound),
    }
}
