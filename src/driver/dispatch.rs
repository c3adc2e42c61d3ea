//! Action dispatch.
//!
//! Each action goes decode -> validate -> engine call -> history. History is
//! cleared first, so after any dispatch it only holds that dispatch's
//! entries (none at all if it failed before reaching the engine).

use serde_json::Value;
use tracing::{debug, warn};

use super::Driver;
use crate::core::{CorporationId, Tile};
use crate::engine::{Engine, EngineError, EngineFactory, ShareAmounts};
use crate::error::DriverError;
use crate::protocol::{Action, Command};

impl<F: EngineFactory> Driver<F> {
    /// Dispatch a wire envelope.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), DriverError> {
        self.execute(&action.kind, &action.params)
    }

    /// Decode and run one action on behalf of the current player.
    pub fn execute(&mut self, action_type: &str, params: &Value) -> Result<(), DriverError> {
        self.history.clear();
        debug!(action_type, "Dispatching action");

        let result = Command::decode(action_type, params).and_then(|command| self.run(command));
        match &result {
            Err(DriverError::Engine(err)) => {
                warn!(action_type, code = err.as_str(), "Engine rejected action")
            }
            Err(err) => debug!(action_type, code = err.code(), "Action rejected"),
            Ok(()) => debug!(action_type, entries = self.history.len(), "Action applied"),
        }
        result
    }

    fn run(&mut self, command: Command) -> Result<(), DriverError> {
        let player = self.acting_player()?;

        match command {
            Command::PlayTile(tile) => self.play_tile(&player, tile),
            Command::FoundCorporation(id) => self.found_corporation(&player, id),
            Command::BuyStock(buy) => self.buy_stock(&player, &buy),
            Command::SellTrade { sell, trade } => self.sell_trade(&player, &sell, &trade),
            Command::UntieMerge(id) => self.untie_merge(&player, id),
            Command::ClaimEndGame => self.claim_end_game(&player),
        }
    }

    fn play_tile(&mut self, player: &str, tile: Tile) -> Result<(), DriverError> {
        if exhaustion(self.session_mut()?.play_tile(tile))? {
            self.history.no_tiles_available(player);
        } else {
            self.history.played_tile(player, tile);
        }
        Ok(())
    }

    fn found_corporation(&mut self, player: &str, id: CorporationId) -> Result<(), DriverError> {
        self.session_mut()?.found_corporation(id)?;
        self.history.founded_corporation(player, &self.corporations[id]);
        Ok(())
    }

    fn buy_stock(&mut self, player: &str, buy: &ShareAmounts) -> Result<(), DriverError> {
        let exhausted = exhaustion(self.session_mut()?.buy_stock(buy))?;

        for (id, amount) in buy {
            self.history.bought_stock(player, *amount, &self.corporations[*id]);
        }
        if exhausted {
            self.history.no_tiles_available(player);
        }
        Ok(())
    }

    fn sell_trade(
        &mut self,
        player: &str,
        sell: &ShareAmounts,
        trade: &ShareAmounts,
    ) -> Result<(), DriverError> {
        self.session_mut()?.sell_trade(sell, trade)?;

        for (id, amount) in sell {
            self.history.sold_stock(player, *amount, &self.corporations[*id]);
        }
        for (id, amount) in trade {
            self.history.traded_stock(player, *amount, &self.corporations[*id]);
        }
        Ok(())
    }

    fn untie_merge(&mut self, player: &str, id: CorporationId) -> Result<(), DriverError> {
        self.session_mut()?.untie_merge(id)?;
        self.history.untied_merge(player, &self.corporations[id]);
        Ok(())
    }

    fn claim_end_game(&mut self, player: &str) -> Result<(), DriverError> {
        if !self.session_mut()?.claim_end_game() {
            return Err(DriverError::NotEndGame);
        }
        self.history.claimed_end(player);
        Ok(())
    }
}

/// The tile-pool exhaustion marker is not a failure: it becomes `Ok(true)`.
fn exhaustion(result: Result<(), EngineError>) -> Result<bool, DriverError> {
    match result {
        Ok(()) => Ok(false),
        Err(err) if err.is_exhausted() => Ok(true),
        Err(err) => Err(err.into()),
    }
}
