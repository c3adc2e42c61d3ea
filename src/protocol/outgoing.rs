//! Messages sent from the driver to players, and fed to bots.
//!
//! A [`Status`] is built for one player after every action:
//!
//! ```json
//! {
//!   "brd": { "1A": "empty", "1B": "unincorporated", "1D": "0" },
//!   "sta": "PlayTile",
//!   "hnd": { "1A": true },
//!   "cor": [ { "nam": "Sackson", "prc": 100, "maj": 400, "min": 200,
//!              "rem": 20, "siz": 2, "def": false, "tie": false } ],
//!   "ply": { "nam": "John", "trn": true, "csh": 6000, "own": [2, 0, 0, 0, 0, 0, 0] },
//!   "riv": [ { "nam": "Doe", "trn": false, "csh": 6000, "own": [0, 0, 0, 0, 0, 0, 0] } ],
//!   "rnd": 3,
//!   "lst": false,
//!   "his": [ { "key": "game.history.played_tile", "arg": { "player": "John", "tile": "1B" } } ]
//! }
//! ```
//!
//! `cor` and `own` always have exactly seven entries, one per corporation
//! slot.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

use crate::core::{Phase, Tile, CORPORATION_COUNT};

/// Rival info. Inline capacity covers a full six-player table.
pub type Rivals = SmallVec<[PlayerData; 5]>;

/// Snapshot of the game as seen by one player.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Ownership of every board cell: `empty`, `unincorporated`, or a
    /// corporation index.
    #[serde(rename = "brd")]
    pub board: BTreeMap<Tile, String>,

    #[serde(rename = "sta")]
    pub phase: Phase,

    /// Tiles in the viewer's hand and whether each can be played now.
    #[serde(rename = "hnd")]
    pub hand: BTreeMap<Tile, bool>,

    #[serde(rename = "cor")]
    pub corporations: [CorpData; CORPORATION_COUNT],

    #[serde(rename = "ply")]
    pub player: PlayerData,

    /// Other players, in no particular order.
    #[serde(rename = "riv")]
    pub rivals: Rivals,

    #[serde(rename = "rnd")]
    pub round: u32,

    #[serde(rename = "lst")]
    pub is_last_round: bool,

    /// What happened during the last action, oldest first.
    #[serde(rename = "his")]
    pub history: Vector<HistoryEntry>,
}

/// Public data of one corporation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpData {
    #[serde(rename = "nam")]
    pub name: String,
    #[serde(rename = "prc")]
    pub price: u32,
    #[serde(rename = "maj")]
    pub majority_bonus: u32,
    #[serde(rename = "min")]
    pub minority_bonus: u32,
    #[serde(rename = "rem")]
    pub remaining_shares: u32,
    #[serde(rename = "siz")]
    pub size: u32,
    #[serde(rename = "def")]
    pub defunct: bool,
    /// Part of a tied merge waiting to be resolved.
    #[serde(rename = "tie")]
    pub tied: bool,
}

impl CorpData {
    /// Founded and on the board.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.size > 0
    }
}

/// Data of one player visible to everyone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    #[serde(rename = "nam")]
    pub name: String,
    #[serde(rename = "trn")]
    pub in_turn: bool,
    #[serde(rename = "csh")]
    pub cash: u32,
    #[serde(rename = "own")]
    pub owned_shares: [u32; CORPORATION_COUNT],
}

/// Event kinds recorded in history. Each serializes to a translation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryKey {
    #[serde(rename = "game.history.starter_player")]
    StarterPlayer,
    #[serde(rename = "game.history.played_tile")]
    PlayedTile,
    #[serde(rename = "game.history.no_tiles_available")]
    NoTilesAvailable,
    #[serde(rename = "game.history.founded_corporation")]
    FoundedCorporation,
    #[serde(rename = "game.history.bought_stock")]
    BoughtStock,
    #[serde(rename = "game.history.sold_stock")]
    SoldStock,
    #[serde(rename = "game.history.traded_stock")]
    TradedStock,
    #[serde(rename = "game.history.untied_merge")]
    UntiedMerge,
    #[serde(rename = "game.history.claimed_end")]
    ClaimedEnd,
    #[serde(rename = "game.history.player_left")]
    PlayerLeft,
}

/// One translatable history line: a key plus named string arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub key: HistoryKey,
    #[serde(rename = "arg")]
    pub arguments: BTreeMap<String, String>,
}

impl HistoryEntry {
    pub fn new(key: HistoryKey) -> Self {
        Self {
            key,
            arguments: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, name: &str, value: impl Into<String>) -> Self {
        self.arguments.insert(name.to_string(), value.into());
        self
    }

    /// Value of a named argument.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }
}
