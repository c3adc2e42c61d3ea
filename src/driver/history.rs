//! History recording.
//!
//! Every state-changing action leaves zero or more [`HistoryEntry`] values
//! behind for the frontend to translate. The buffer only ever holds the
//! entries of the latest action; the driver clears it before each dispatch.
//!
//! Entries are kept in an `im::Vector` so each status snapshot can share
//! them without copying.

use im::Vector;

use crate::core::{Named, Tile};
use crate::protocol::{HistoryEntry, HistoryKey};

/// Entries produced by the latest action, oldest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vector<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &Vector<HistoryEntry> {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    pub fn starter_player(&mut self, player: &str) {
        self.push(HistoryEntry::new(HistoryKey::StarterPlayer).arg("player", player));
    }

    pub fn played_tile(&mut self, player: &str, tile: Tile) {
        self.push(
            HistoryEntry::new(HistoryKey::PlayedTile)
                .arg("player", player)
                .arg("tile", tile.to_string()),
        );
    }

    pub fn no_tiles_available(&mut self, player: &str) {
        self.push(HistoryEntry::new(HistoryKey::NoTilesAvailable).arg("player", player));
    }

    pub fn founded_corporation(&mut self, player: &str, corporation: &dyn Named) {
        self.push(
            HistoryEntry::new(HistoryKey::FoundedCorporation)
                .arg("player", player)
                .arg("corporation", corporation.name()),
        );
    }

    pub fn bought_stock(&mut self, player: &str, amount: u32, corporation: &dyn Named) {
        self.stock(HistoryKey::BoughtStock, player, amount, corporation);
    }

    pub fn sold_stock(&mut self, player: &str, amount: u32, corporation: &dyn Named) {
        self.stock(HistoryKey::SoldStock, player, amount, corporation);
    }

    pub fn traded_stock(&mut self, player: &str, amount: u32, corporation: &dyn Named) {
        self.stock(HistoryKey::TradedStock, player, amount, corporation);
    }

    // Zero amounts leave no trace.
    fn stock(&mut self, key: HistoryKey, player: &str, amount: u32, corporation: &dyn Named) {
        if amount == 0 {
            return;
        }
        self.push(
            HistoryEntry::new(key)
                .arg("player", player)
                .arg("amount", amount.to_string())
                .arg("corporation", corporation.name()),
        );
    }

    pub fn untied_merge(&mut self, player: &str, corporation: &dyn Named) {
        self.push(
            HistoryEntry::new(HistoryKey::UntiedMerge)
                .arg("player", player)
                .arg("corporation", corporation.name()),
        );
    }

    pub fn claimed_end(&mut self, player: &str) {
        self.push(HistoryEntry::new(HistoryKey::ClaimedEnd).arg("player", player));
    }

    pub fn player_left(&mut self, player: &str) {
        self.push(HistoryEntry::new(HistoryKey::PlayerLeft).arg("player", player));
    }
}
