//! The Acquire driver.
//!
//! [`Driver`] sits between the game server and the rules engine. It owns the
//! player and corporation handles for a session, turns wire actions into
//! engine calls (`dispatch`), records what happened (`history`), and builds
//! per-player snapshots (`status`).
//!
//! ## Lifecycle
//!
//! ```text
//! Driver::new(factory) ── start_game ──> running ── execute / status / remove_player
//! ```
//!
//! There is no teardown; a finished game stays readable until the driver is
//! dropped.

mod dispatch;
mod history;
mod status;

pub use history::History;
pub use status::PlayersInfo;

use rustc_hash::FxHashMap;
use tracing::info;

use crate::bots::{self, AiClient};
use crate::core::{BotConfig, Corporations, DriverConfig, Named, Player, PlayerNumber};
use crate::engine::{Engine, EngineFactory};
use crate::error::DriverError;

/// Name the game server uses to pick this driver.
pub const DRIVER_NAME: &str = "acquire";

/// Driver for one game session.
pub struct Driver<F: EngineFactory> {
    factory: F,
    config: DriverConfig,
    /// `None` until a game is started.
    game: Option<F::Engine>,
    players: FxHashMap<PlayerNumber, Player>,
    corporations: Corporations,
    history: History,
}

impl<F: EngineFactory> Driver<F> {
    /// Create an idle driver with the standard corporations.
    pub fn new(factory: F) -> Self {
        Self::build(factory, DriverConfig::default())
    }

    /// Create an idle driver from a host-supplied config.
    ///
    /// Fails with [`DriverError::InvalidConfig`] when the board size can't be
    /// lettered (no columns, or rows outside `1..=26`).
    pub fn with_config(factory: F, config: DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;
        Ok(Self::build(factory, config))
    }

    fn build(factory: F, config: DriverConfig) -> Self {
        let corporations = Corporations::from_names(&config.corporation_names);
        Self {
            factory,
            config,
            game: None,
            players: FxHashMap::default(),
            corporations,
            history: History::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Start a game with the given seat numbers and names.
    ///
    /// Fails with [`DriverError::GameAlreadyStarted`] if a game is running,
    /// leaving it untouched. Engine errors (e.g. too few players), or a
    /// starting player the engine made up, leave the driver idle.
    pub fn start_game<S: Into<String>>(
        &mut self,
        names: impl IntoIterator<Item = (PlayerNumber, S)>,
    ) -> Result<(), DriverError> {
        if self.game.is_some() {
            return Err(DriverError::GameAlreadyStarted);
        }

        let mut players: Vec<Player> = names
            .into_iter()
            .map(|(number, name)| Player::new(number, name))
            .collect();
        players.sort_by_key(Player::number);

        let game = self.factory.start(&players, &self.corporations)?;
        let players: FxHashMap<PlayerNumber, Player> = players
            .into_iter()
            .map(|player| (player.number(), player))
            .collect();
        let starter = players
            .get(&game.current_player())
            .map(|player| player.name().to_string())
            .ok_or(DriverError::NonexistentPlayer)?;

        self.players = players;
        self.game = Some(game);
        self.history.clear();
        info!(players = self.players.len(), starter = %starter, "Game started");
        self.history.starter_player(&starter);
        Ok(())
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        self.game.is_some()
    }

    /// Numbers of the players the engine is waiting for.
    pub fn current_players_numbers(&self) -> Result<Vec<PlayerNumber>, DriverError> {
        Ok(vec![self.session()?.current_player()])
    }

    /// True once the game ended or can't go on.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.as_ref().is_some_and(|game| game.phase().is_over())
    }

    /// Remove a player who left. History is replaced by a single
    /// `player_left` entry.
    pub fn remove_player(&mut self, number: PlayerNumber) -> Result<(), DriverError> {
        let name = self
            .players
            .get(&number)
            .map(|player| player.name().to_string())
            .ok_or(DriverError::NonexistentPlayer)?;

        self.session_mut()?.remove_player(number);
        self.players.remove(&number);
        info!(player = %number, "Player removed");

        self.history.clear();
        self.history.player_left(&name);
        Ok(())
    }

    /// Create a bot client of the given level (`"chaotic"`).
    pub fn create_ai(&self, level: &str, config: BotConfig) -> Result<AiClient, DriverError> {
        bots::create(level, config).map(AiClient::new)
    }

    #[must_use]
    pub fn player(&self, number: PlayerNumber) -> Option<&Player> {
        self.players.get(&number)
    }

    #[must_use]
    pub fn corporations(&self) -> &Corporations {
        &self.corporations
    }

    /// Entries recorded by the latest action.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Running engine session, if any.
    #[must_use]
    pub fn engine(&self) -> Option<&F::Engine> {
        self.game.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut F::Engine> {
        self.game.as_mut()
    }

    fn session(&self) -> Result<&F::Engine, DriverError> {
        self.game.as_ref().ok_or(DriverError::GameNotStarted)
    }

    fn session_mut(&mut self) -> Result<&mut F::Engine, DriverError> {
        self.game.as_mut().ok_or(DriverError::GameNotStarted)
    }

    /// Name of the player the engine is waiting for.
    fn acting_player(&self) -> Result<String, DriverError> {
        let number = self.session()?.current_player();
        self.players
            .get(&number)
            .map(|player| player.name().to_string())
            .ok_or(DriverError::NonexistentPlayer)
    }
}
