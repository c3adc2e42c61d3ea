//! JSON-facing bot wrapper used by the game server.

use super::Bot;
use crate::error::DriverError;
use crate::protocol::{Action, Status};

/// Wraps a bot behind the server's AI interface: status messages in, action
/// envelopes out, using the same wire shapes as human clients.
pub struct AiClient {
    bot: Box<dyn Bot>,
}

impl AiClient {
    pub fn new(bot: Box<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Update the bot from a JSON status message.
    ///
    /// A malformed message fails with [`DriverError::MessageParsing`] and
    /// leaves the bot's previous snapshot in place.
    pub fn feed_game_status(&mut self, message: &str) -> Result<(), DriverError> {
        let status: Status = serde_json::from_str(message)?;
        self.bot.update(status);
        Ok(())
    }

    /// Update the bot from an in-process snapshot.
    pub fn update(&mut self, status: Status) {
        self.bot.update(status);
    }

    /// The bot's next action, `None` when it has nothing to do.
    pub fn play(&mut self) -> Option<Action> {
        self.bot.play().map(|command| command.encode())
    }
}
