//! Messages sent by players (and bots) to the driver.
//!
//! Decoding happens in two steps: the payload is deserialized into the
//! struct matching the action tag, then validated into a [`Command`] whose
//! tiles and corporation ids are guaranteed well formed. Nothing reaches the
//! engine until both steps succeed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::{CorporationId, Tile};
use crate::engine::ShareAmounts;
use crate::error::DriverError;

/// Action type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    PlayTile,
    FoundCorporation,
    BuyStock,
    SellTrade,
    UntieMerge,
    ClaimEndGame,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::PlayTile,
        ActionKind::FoundCorporation,
        ActionKind::BuyStock,
        ActionKind::SellTrade,
        ActionKind::UntieMerge,
        ActionKind::ClaimEndGame,
    ];

    /// Wire tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            ActionKind::PlayTile => "ply",
            ActionKind::FoundCorporation => "ncp",
            ActionKind::BuyStock => "buy",
            ActionKind::SellTrade => "sel",
            ActionKind::UntieMerge => "unt",
            ActionKind::ClaimEndGame => "end",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// Action envelope.
///
/// ```json
/// { "typ": "buy", "par": { "cor": { "0": 3, "1": 0 } } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "typ")]
    pub kind: String,

    #[serde(rename = "par", default, skip_serializing_if = "Value::is_null")]
    pub params: Value,
}

impl Action {
    pub fn new(kind: ActionKind, params: Value) -> Self {
        Self {
            kind: kind.tag().to_string(),
            params,
        }
    }

    /// Parsed tag, `None` if it isn't one the driver knows.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        ActionKind::from_tag(&self.kind)
    }
}

/// `ply` payload: `{"til": "2A"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayTile {
    #[serde(rename = "til")]
    pub tile: String,
}

/// `ncp` payload: `{"cor": 2}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCorp {
    #[serde(rename = "cor")]
    pub corporation: i64,
}

/// `buy` payload: `{"cor": {"0": 3, "1": 0}}`, shares wanted per corporation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buy {
    #[serde(rename = "cor")]
    pub corporations: BTreeMap<String, u32>,
}

/// `sel` payload: `{"cor": {"0": {"sel": 2, "tra": 0}}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellTrade {
    #[serde(rename = "cor")]
    pub corporations: BTreeMap<String, SellTradeAmounts>,
}

/// Shares of one corporation to sell and to trade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellTradeAmounts {
    #[serde(rename = "sel", default)]
    pub sell: u32,
    #[serde(rename = "tra", default)]
    pub trade: u32,
}

/// `unt` payload: `{"cor": 2}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntieMerge {
    #[serde(rename = "cor")]
    pub corporation: i64,
}

/// A decoded, validated action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    PlayTile(Tile),
    FoundCorporation(CorporationId),
    /// Every submitted entry, zero amounts included.
    BuyStock(ShareAmounts),
    SellTrade {
        sell: ShareAmounts,
        trade: ShareAmounts,
    },
    UntieMerge(CorporationId),
    ClaimEndGame,
}

impl Command {
    /// Decode the payload of an action with the given tag.
    ///
    /// Unknown tags and payloads that don't match the tag fail with
    /// [`DriverError::MessageParsing`]; corporation indexes outside `0..=6`
    /// fail with [`DriverError::CorporationNotFound`].
    pub fn decode(tag: &str, params: &Value) -> Result<Self, DriverError> {
        let kind = ActionKind::from_tag(tag)
            .ok_or_else(|| DriverError::parsing(format!("unknown action type {tag:?}")))?;

        match kind {
            ActionKind::PlayTile => {
                let payload = PlayTile::deserialize(params)?;
                Ok(Command::PlayTile(payload.tile.parse()?))
            }
            ActionKind::FoundCorporation => {
                let payload = NewCorp::deserialize(params)?;
                Ok(Command::FoundCorporation(corporation_id(payload.corporation)?))
            }
            ActionKind::BuyStock => {
                let payload = Buy::deserialize(params)?;
                let buy: ShareAmounts = payload
                    .corporations
                    .iter()
                    .map(|(key, amount)| Ok((corporation_key(key)?, *amount)))
                    .collect::<Result<_, DriverError>>()?;
                Ok(Command::BuyStock(buy))
            }
            ActionKind::SellTrade => {
                let payload = SellTrade::deserialize(params)?;
                let mut sell = ShareAmounts::new();
                let mut trade = ShareAmounts::new();
                for (key, amounts) in &payload.corporations {
                    let id = corporation_key(key)?;
                    sell.insert(id, amounts.sell);
                    trade.insert(id, amounts.trade);
                }
                Ok(Command::SellTrade { sell, trade })
            }
            ActionKind::UntieMerge => {
                let payload = UntieMerge::deserialize(params)?;
                Ok(Command::UntieMerge(corporation_id(payload.corporation)?))
            }
            ActionKind::ClaimEndGame => Ok(Command::ClaimEndGame),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Command::PlayTile(_) => ActionKind::PlayTile,
            Command::FoundCorporation(_) => ActionKind::FoundCorporation,
            Command::BuyStock(_) => ActionKind::BuyStock,
            Command::SellTrade { .. } => ActionKind::SellTrade,
            Command::UntieMerge(_) => ActionKind::UntieMerge,
            Command::ClaimEndGame => ActionKind::ClaimEndGame,
        }
    }

    /// Encode back into the wire envelope.
    #[must_use]
    pub fn encode(&self) -> Action {
        let params = match self {
            Command::PlayTile(tile) => json_value(&PlayTile {
                tile: tile.to_string(),
            }),
            Command::FoundCorporation(id) => json_value(&NewCorp {
                corporation: id.index() as i64,
            }),
            Command::BuyStock(buy) => json_value(&Buy {
                corporations: buy
                    .iter()
                    .map(|(id, amount)| (id.to_string(), *amount))
                    .collect(),
            }),
            Command::SellTrade { sell, trade } => {
                let mut corporations: BTreeMap<String, SellTradeAmounts> = BTreeMap::new();
                for (id, amount) in sell {
                    corporations.entry(id.to_string()).or_default().sell = *amount;
                }
                for (id, amount) in trade {
                    corporations.entry(id.to_string()).or_default().trade = *amount;
                }
                json_value(&SellTrade { corporations })
            }
            Command::UntieMerge(id) => json_value(&UntieMerge {
                corporation: id.index() as i64,
            }),
            Command::ClaimEndGame => Value::Null,
        };
        Action::new(self.kind(), params)
    }
}

fn corporation_id(index: i64) -> Result<CorporationId, DriverError> {
    CorporationId::new(index).ok_or(DriverError::CorporationNotFound)
}

fn corporation_key(key: &str) -> Result<CorporationId, DriverError> {
    key.parse::<i64>()
        .ok()
        .and_then(CorporationId::new)
        .ok_or(DriverError::CorporationNotFound)
}

// Payload structs only hold strings, integers and string-keyed maps.
fn json_value<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn corp(index: i64) -> CorporationId {
        CorporationId::new(index).unwrap()
    }

    #[test]
    fn test_tags() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ActionKind::from_tag("out"), None);
        assert_eq!(ActionKind::from_tag(""), None);
    }

    #[test]
    fn test_envelope_shape() {
        let action: Action =
            serde_json::from_value(json!({"typ": "ply", "par": {"til": "2A"}})).unwrap();
        assert_eq!(action.action_kind(), Some(ActionKind::PlayTile));
        assert_eq!(action.params, json!({"til": "2A"}));

        let end: Action = serde_json::from_value(json!({"typ": "end"})).unwrap();
        assert_eq!(end.params, Value::Null);
        assert_eq!(serde_json::to_value(&end).unwrap(), json!({"typ": "end"}));
    }

    #[test]
    fn test_decode_play_tile() {
        let command = Command::decode("ply", &json!({"til": "5C"})).unwrap();
        assert_eq!(command, Command::PlayTile(Tile::new(5, 'C')));
    }

    #[test]
    fn test_decode_malformed_payloads() {
        let wrong = json!({"aaa": "bbb"});
        for tag in ["ply", "ncp", "buy", "sel", "unt"] {
            let err = Command::decode(tag, &wrong).unwrap_err();
            assert_eq!(err.code(), "message_parsing_error", "tag {tag}");
        }

        let err = Command::decode("ply", &json!({"til": "C"})).unwrap_err();
        assert_eq!(err.code(), "message_parsing_error");

        let err = Command::decode("buy", &json!({"cor": {"0": -1}})).unwrap_err();
        assert_eq!(err.code(), "message_parsing_error");
    }

    #[test]
    fn test_decode_unknown_tag() {
        let err = Command::decode("err", &Value::Null).unwrap_err();
        assert_eq!(err.code(), "message_parsing_error");
    }

    #[test]
    fn test_decode_end_ignores_params() {
        assert_eq!(
            Command::decode("end", &json!({"aaa": "bbb"})).unwrap(),
            Command::ClaimEndGame
        );
    }

    #[test]
    fn test_decode_corporation_bounds() {
        assert_eq!(
            Command::decode("ncp", &json!({"cor": 6})).unwrap(),
            Command::FoundCorporation(corp(6))
        );
        for params in [json!({"cor": 7}), json!({"cor": -1})] {
            assert_eq!(
                Command::decode("ncp", &params).unwrap_err(),
                DriverError::CorporationNotFound
            );
            assert_eq!(
                Command::decode("unt", &params).unwrap_err(),
                DriverError::CorporationNotFound
            );
        }
        assert_eq!(
            Command::decode("buy", &json!({"cor": {"x": 1}})).unwrap_err(),
            DriverError::CorporationNotFound
        );
    }

    #[test]
    fn test_decode_buy_keeps_zero_entries() {
        let command = Command::decode("buy", &json!({"cor": {"0": 3, "1": 0, "2": 2}})).unwrap();
        let expected = ShareAmounts::from([(corp(0), 3), (corp(1), 0), (corp(2), 2)]);
        assert_eq!(command, Command::BuyStock(expected));
    }

    #[test]
    fn test_decode_sell_trade_splits_maps() {
        let params = json!({"cor": {"0": {"sel": 2, "tra": 0}, "1": {"sel": 0, "tra": 2}}});
        let Command::SellTrade { sell, trade } = Command::decode("sel", &params).unwrap() else {
            panic!("expected sell/trade command");
        };
        assert_eq!(sell, ShareAmounts::from([(corp(0), 2), (corp(1), 0)]));
        assert_eq!(trade, ShareAmounts::from([(corp(0), 0), (corp(1), 2)]));
    }

    #[test]
    fn test_encode_matches_wire_shapes() {
        let buy = Command::BuyStock(ShareAmounts::from([(corp(3), 3)])).encode();
        assert_eq!(
            serde_json::to_value(&buy).unwrap(),
            json!({"typ": "buy", "par": {"cor": {"3": 3}}})
        );

        let sell = Command::SellTrade {
            sell: ShareAmounts::from([(corp(1), 4)]),
            trade: ShareAmounts::from([(corp(1), 0)]),
        }
        .encode();
        assert_eq!(sell.params, json!({"cor": {"1": {"sel": 4, "tra": 0}}}));

        let untie = Command::UntieMerge(corp(2)).encode();
        assert_eq!(untie.params, json!({"cor": 2}));

        assert_eq!(Command::ClaimEndGame.encode().params, Value::Null);
    }

    #[test]
    fn test_encoded_commands_decode_to_themselves() {
        let commands = [
            Command::PlayTile(Tile::new(12, 'I')),
            Command::FoundCorporation(corp(4)),
            Command::UntieMerge(corp(0)),
            Command::ClaimEndGame,
        ];
        for command in commands {
            let action = command.encode();
            assert_eq!(Command::decode(&action.kind, &action.params).unwrap(), command);
        }
    }

    proptest! {
        #[test]
        fn prop_out_of_range_index_is_corporation_not_found(index in any::<i64>()) {
            prop_assume!(!(0..=6).contains(&index));
            let params = json!({"cor": index});
            prop_assert_eq!(
                Command::decode("ncp", &params).unwrap_err(),
                DriverError::CorporationNotFound
            );

            let buy = json!({"cor": {index.to_string(): 1}});
            prop_assert_eq!(
                Command::decode("buy", &buy).unwrap_err(),
                DriverError::CorporationNotFound
            );
        }
    }
}
