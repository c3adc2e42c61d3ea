//! Engine gateway traits.
//!
//! Hosts implement [`Engine`] over their rules engine and hand the driver an
//! [`EngineFactory`] that opens a session. All turn operations act on the
//! engine's current player.
//!
//! ## Implementation Notes
//!
//! - Mutations return `Err` with the engine's own error code on a rule
//!   violation and must leave the session unchanged in that case, except
//!   for [`EngineError::NO_TILES_AVAILABLE`], which is reported after the
//!   action itself has been applied.
//! - Queries never fail; asking about an unknown player may return zeroes.

use super::types::{Cell, CorporationStats, EngineError, ShareAmounts};
use crate::core::{CorporationId, Corporations, Phase, Player, PlayerNumber, Tile};

/// One running game.
pub trait Engine {
    // === Turn ===

    /// Player whose action the engine is waiting for.
    fn current_player(&self) -> PlayerNumber;

    fn phase(&self) -> Phase;

    fn round(&self) -> u32;

    fn is_last_round(&self) -> bool;

    // === Mutations ===

    fn play_tile(&mut self, tile: Tile) -> Result<(), EngineError>;

    fn found_corporation(&mut self, corporation: CorporationId) -> Result<(), EngineError>;

    /// Buy shares of several corporations at once. Zero amounts are allowed.
    fn buy_stock(&mut self, buy: &ShareAmounts) -> Result<(), EngineError>;

    /// Sell and trade shares of defunct corporations in one step.
    fn sell_trade(&mut self, sell: &ShareAmounts, trade: &ShareAmounts) -> Result<(), EngineError>;

    /// Pick the surviving corporation of a tied merge.
    fn untie_merge(&mut self, corporation: CorporationId) -> Result<(), EngineError>;

    /// Claim the end of the game. Returns whether the game is now in its
    /// last round; a `false` claim must not change the session.
    fn claim_end_game(&mut self) -> bool;

    fn remove_player(&mut self, player: PlayerNumber);

    // === Board and corporations ===

    fn cell(&self, tile: Tile) -> Cell;

    fn corporation(&self, corporation: CorporationId) -> CorporationStats;

    fn is_corporation_defunct(&self, corporation: CorporationId) -> bool;

    /// Corporations tied for largest in the merge being resolved.
    fn tied_corporations(&self) -> Vec<CorporationId>;

    // === Players ===

    fn cash(&self, player: PlayerNumber) -> u32;

    fn shares(&self, player: PlayerNumber, corporation: CorporationId) -> u32;

    fn tiles(&self, player: PlayerNumber) -> Vec<Tile>;

    fn is_tile_playable(&self, tile: Tile) -> bool;
}

/// Opens engine sessions.
pub trait EngineFactory {
    type Engine: Engine;

    /// Start a game for `players` using the driver's corporations. Engine
    /// errors (too few players, too many) are returned unchanged.
    fn start(
        &self,
        players: &[Player],
        corporations: &Corporations,
    ) -> Result<Self::Engine, EngineError>;
}
