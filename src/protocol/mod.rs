//! Wire messages exchanged with clients and bots.
//!
//! Field tags are three-letter abbreviations throughout, e.g. a play tile
//! action is `{"typ": "ply", "par": {"til": "2A"}}`.
//!
//! - `incoming`: action envelope, payloads, and the decoded [`Command`]
//! - `outgoing`: the per-player [`Status`] snapshot and history entries

pub mod incoming;
pub mod outgoing;

pub use incoming::{
    Action, ActionKind, Buy, Command, NewCorp, PlayTile, SellTrade, SellTradeAmounts, UntieMerge,
};
pub use outgoing::{CorpData, HistoryEntry, HistoryKey, PlayerData, Rivals, Status};
