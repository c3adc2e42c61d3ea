//! Driver and bot configuration.
//!
//! Both structs deserialize from JSON so a hosting server can ship them in
//! its own config files; every field has a default matching the standard
//! game. Fields are public, so a driver checks its config with
//! [`DriverConfig::validate`] before using it.

use serde::{Deserialize, Serialize};

use super::corporation::CORPORATION_COUNT;
use super::tile::{BOARD_COLUMNS, BOARD_ROWS, MAX_BOARD_ROWS};
use crate::error::DriverError;

/// Driver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Display names of the corporations, in slot order.
    pub corporation_names: [String; CORPORATION_COUNT],

    /// Number of board columns (tile numbers start at 1).
    pub board_columns: u8,

    /// Number of board rows (tile letters start at `A`), at most 26.
    pub board_rows: u8,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            corporation_names: [
                "Sackson", "Zeta", "Hydra", "Fusion", "America", "Phoenix", "Quantum",
            ]
            .map(String::from),
            board_columns: BOARD_COLUMNS,
            board_rows: BOARD_ROWS,
        }
    }
}

impl DriverConfig {
    pub fn with_corporation_names(mut self, names: [String; CORPORATION_COUNT]) -> Self {
        self.corporation_names = names;
        self
    }

    pub fn with_board(mut self, columns: u8, rows: u8) -> Self {
        self.board_columns = columns;
        self.board_rows = rows;
        self
    }

    /// Check the board has at least one column and `1..=26` rows.
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.board_columns == 0 {
            return Err(DriverError::InvalidConfig {
                reason: "board needs at least one column".to_string(),
            });
        }
        if !(1..=MAX_BOARD_ROWS).contains(&self.board_rows) {
            return Err(DriverError::InvalidConfig {
                reason: format!(
                    "board rows must be within 1..={MAX_BOARD_ROWS}, got {}",
                    self.board_rows
                ),
            });
        }
        Ok(())
    }
}

/// Thresholds and seeding for the heuristic bot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// A corporation this big lets anyone end the game.
    pub end_game_corporation_size: u32,

    /// A corporation this big can't be absorbed in a merge.
    pub safe_corporation_size: u32,

    /// Shares bought per turn when the bot can afford them.
    pub buy_batch: u32,

    /// RNG seed. `None` seeds from the clock when the bot is created.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            end_game_corporation_size: 41,
            safe_corporation_size: 11,
            buy_batch: 3,
            seed: None,
        }
    }
}

impl BotConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_thresholds(mut self, end_game: u32, safe: u32) -> Self {
        self.end_game_corporation_size = end_game;
        self.safe_corporation_size = safe;
        self
    }
}
