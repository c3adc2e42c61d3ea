//! The chaotic bot: random choices within a few fixed rules.
//!
//! Decisions, checked in order:
//!
//! 1. Claim the end of the game when allowed (not already the last round,
//!    and either one corporation reached the end-game size or every active
//!    corporation is safe).
//! 2. Otherwise act on the current phase:
//!    - play tile: a random playable tile
//!    - found corporation: a random corporation not on the board
//!    - buy stock: a random active corporation, a batch of shares if
//!      affordable, else whatever is left if affordable, else nothing
//!    - sell/trade: sell every share of each defunct corporation
//!    - untie merge: the first tied corporation

use tracing::debug;

use super::Bot;
use crate::core::{BotConfig, CorporationId, GameRng, Phase, Tile};
use crate::engine::ShareAmounts;
use crate::protocol::{Command, Status};

/// Bot that picks randomly among options that respect the rules above.
#[derive(Clone, Debug)]
pub struct Chaotic {
    status: Status,
    rng: GameRng,
    config: BotConfig,
}

impl Chaotic {
    /// Create a bot; without a configured seed the RNG is seeded from the clock.
    pub fn new(config: BotConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_time, GameRng::new);
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: BotConfig, rng: GameRng) -> Self {
        Self {
            status: Status::default(),
            rng,
            config,
        }
    }

    /// Snapshot the bot currently plays from.
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// End-game conditions as the bot judges them from its snapshot.
    #[must_use]
    pub fn end_game_reached(&self) -> bool {
        let corporations = &self.status.corporations;
        if corporations
            .iter()
            .any(|corp| corp.size >= self.config.end_game_corporation_size)
        {
            return true;
        }

        let active = corporations.iter().filter(|corp| corp.is_active()).count();
        let safe = corporations
            .iter()
            .filter(|corp| corp.is_active() && corp.size >= self.config.safe_corporation_size)
            .count();
        active > 0 && active == safe
    }

    fn play_tile(&mut self) -> Option<Command> {
        let playable: Vec<Tile> = self
            .status
            .hand
            .iter()
            .filter(|(_, playable)| **playable)
            .map(|(tile, _)| *tile)
            .collect();

        self.rng.choose(&playable).copied().map(Command::PlayTile)
    }

    fn found_corporation(&mut self) -> Option<Command> {
        let free: Vec<CorporationId> = CorporationId::all()
            .filter(|id| self.status.corporations[id.index()].size == 0)
            .collect();

        self.rng.choose(&free).copied().map(Command::FoundCorporation)
    }

    fn buy_stock(&mut self) -> Command {
        let active: Vec<CorporationId> = CorporationId::all()
            .filter(|id| self.status.corporations[id.index()].is_active())
            .collect();

        let mut buy = ShareAmounts::new();
        if let Some(&id) = self.rng.choose(&active) {
            let corp = &self.status.corporations[id.index()];
            let batch = self.config.buy_batch;
            let amount = if corp.remaining_shares >= batch && self.can_afford(batch, corp.price) {
                batch
            } else if self.can_afford(corp.remaining_shares, corp.price) {
                corp.remaining_shares
            } else {
                0
            };
            buy.insert(id, amount);
        }
        Command::BuyStock(buy)
    }

    fn sell_trade(&self) -> Command {
        let mut sell = ShareAmounts::new();
        let mut trade = ShareAmounts::new();

        for id in CorporationId::all() {
            let owned = self.status.player.owned_shares[id.index()];
            if self.status.corporations[id.index()].defunct && owned > 0 {
                sell.insert(id, owned);
                trade.insert(id, 0);
            }
        }
        Command::SellTrade { sell, trade }
    }

    fn untie_merge(&self) -> Option<Command> {
        CorporationId::all()
            .find(|id| self.status.corporations[id.index()].tied)
            .map(Command::UntieMerge)
    }

    /// Cost must stay strictly below the cash in hand.
    fn can_afford(&self, amount: u32, price: u32) -> bool {
        u64::from(amount) * u64::from(price) < u64::from(self.status.player.cash)
    }
}

impl Bot for Chaotic {
    fn update(&mut self, status: Status) {
        self.status = status;
    }

    fn play(&mut self) -> Option<Command> {
        if !self.status.is_last_round && self.end_game_reached() {
            debug!("Bot claims end of game");
            return Some(Command::ClaimEndGame);
        }

        let command = match self.status.phase {
            Phase::PlayTile => self.play_tile(),
            Phase::FoundCorp => self.found_corporation(),
            Phase::BuyStock => Some(self.buy_stock()),
            Phase::SellTrade => Some(self.sell_trade()),
            Phase::UntieMerge => self.untie_merge(),
            _ => None,
        };
        debug!(
            phase = %self.status.phase,
            action = ?command.as_ref().map(Command::kind),
            "Bot move"
        );
        command
    }
}
