//! Per-player status projection.
//!
//! Builds a [`Status`] from engine queries at request time. The snapshot is a
//! value copy: it holds no reference back into the driver, so it can be
//! serialized or fed to a bot while the game moves on.

use std::collections::BTreeMap;

use super::Driver;
use crate::core::{CorporationId, Named, PlayerNumber, Tile, CORPORATION_COUNT};
use crate::engine::{Cell, Engine, EngineFactory};
use crate::error::DriverError;
use crate::protocol::{CorpData, PlayerData, Rivals, Status};

/// Player info split into the viewer and everybody else.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayersInfo {
    /// `None` when the viewer isn't a player of this game.
    pub player: Option<PlayerData>,
    pub rivals: Rivals,
}

impl<F: EngineFactory> Driver<F> {
    /// Snapshot of the game as seen by `number`.
    ///
    /// Fails with [`DriverError::GameNotStarted`] without a session and with
    /// [`DriverError::NonexistentPlayer`] for an unknown viewer. In the latter
    /// case the rival data is still available through [`Driver::players_info`].
    pub fn status(&self, number: PlayerNumber) -> Result<Status, DriverError> {
        let game = self.session()?;
        let PlayersInfo { player, rivals } = self.players_info(number)?;
        let player = player.ok_or(DriverError::NonexistentPlayer)?;

        Ok(Status {
            board: self.board_ownership(game),
            phase: game.phase(),
            hand: Self::hand(game, number),
            corporations: self.corporations_data(game),
            player,
            rivals,
            round: game.round(),
            is_last_round: game.is_last_round(),
            history: self.history.entries().clone(),
        })
    }

    /// Viewer and rival info. Rivals come out in no particular order.
    ///
    /// This never fails for an unknown viewer. Instead `player` is `None`,
    /// which is the case [`Driver::status`] reports as
    /// [`DriverError::NonexistentPlayer`]; the rivals are still filled in.
    pub fn players_info(&self, number: PlayerNumber) -> Result<PlayersInfo, DriverError> {
        let game = self.session()?;
        let current = game.current_player();
        let mut info = PlayersInfo::default();

        for (&other, player) in &self.players {
            let data = PlayerData {
                name: player.name().to_string(),
                in_turn: other == current,
                cash: game.cash(other),
                owned_shares: Self::owned_shares(game, other),
            };
            if other == number {
                info.player = Some(data);
            } else {
                info.rivals.push(data);
            }
        }
        Ok(info)
    }

    fn board_ownership(&self, game: &F::Engine) -> BTreeMap<Tile, String> {
        Tile::board(self.config.board_columns, self.config.board_rows)
            .map(|tile| {
                let owner = match game.cell(tile) {
                    Cell::Corporation(id) => id.to_string(),
                    cell => cell.kind().to_string(),
                };
                (tile, owner)
            })
            .collect()
    }

    fn corporations_data(&self, game: &F::Engine) -> [CorpData; CORPORATION_COUNT] {
        let mut data: [CorpData; CORPORATION_COUNT] = Default::default();

        for (slot, corporation) in data.iter_mut().zip(self.corporations.iter()) {
            let id = corporation.id();
            let stats = game.corporation(id);
            *slot = CorpData {
                name: corporation.name().to_string(),
                price: stats.price,
                majority_bonus: stats.majority_bonus,
                minority_bonus: stats.minority_bonus,
                remaining_shares: stats.remaining_shares,
                size: stats.size,
                defunct: game.is_corporation_defunct(id),
                tied: false,
            };
        }
        for id in game.tied_corporations() {
            data[id.index()].tied = true;
        }
        data
    }

    fn hand(game: &F::Engine, number: PlayerNumber) -> BTreeMap<Tile, bool> {
        game.tiles(number)
            .into_iter()
            .map(|tile| (tile, game.is_tile_playable(tile)))
            .collect()
    }

    fn owned_shares(game: &F::Engine, number: PlayerNumber) -> [u32; CORPORATION_COUNT] {
        let mut owned = [0; CORPORATION_COUNT];
        for id in CorporationId::all() {
            owned[id.index()] = game.shares(number, id);
        }
        owned
    }
}
