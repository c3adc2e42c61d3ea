//! Shared helpers: a scripted in-memory engine.
//!
//! `FakeEngine` keeps just enough state to answer every gateway query and
//! records each mutation in `calls`, so tests can check what reached the
//! engine. Rules are minimal: turn order, hands, cash, and a few failure
//! switches.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use acquire_driver::{
    Cell, CorporationId, CorporationStats, Corporations, Driver, Engine, EngineError,
    EngineFactory, Phase, Player, PlayerNumber, ShareAmounts, Tile, CORPORATION_COUNT,
};

pub const STARTING_CASH: u32 = 6000;
pub const HAND_SIZE: usize = 6;

/// Mutation received by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    PlayTile(Tile),
    FoundCorporation(CorporationId),
    BuyStock(ShareAmounts),
    SellTrade(ShareAmounts, ShareAmounts),
    UntieMerge(CorporationId),
    ClaimEndGame,
    RemovePlayer(PlayerNumber),
}

#[derive(Debug)]
pub struct FakeEngine {
    pub order: Vec<PlayerNumber>,
    pub turn: usize,
    pub phase: Phase,
    pub round: u32,
    pub last_round: bool,
    /// Whether a claim would put the game in its last round.
    pub end_game_claimable: bool,
    /// Phase entered after a tile is played.
    pub phase_after_tile: Phase,
    pub board: HashMap<Tile, Cell>,
    pub stats: [CorporationStats; CORPORATION_COUNT],
    pub defunct: [bool; CORPORATION_COUNT],
    pub tied: Vec<CorporationId>,
    pub cash: HashMap<PlayerNumber, u32>,
    pub shares: HashMap<PlayerNumber, [u32; CORPORATION_COUNT]>,
    pub hands: HashMap<PlayerNumber, Vec<Tile>>,
    pub unplayable: HashSet<Tile>,
    /// Returned (once) by the next mutation instead of applying it.
    pub fail_next: Option<EngineError>,
    /// Tile plays and purchases apply, then report the empty tile pool.
    pub tiles_exhausted: bool,
    pub calls: Vec<Call>,
}

impl FakeEngine {
    pub fn new(players: &[Player]) -> Result<Self, EngineError> {
        match players.len() {
            0..=2 => return Err(EngineError::new("not_enough_players")),
            3..=6 => {}
            _ => return Err(EngineError::new("too_many_players")),
        }

        let order: Vec<PlayerNumber> = players.iter().map(Player::number).collect();
        let mut deck = Tile::board(12, 9);
        let hands: HashMap<PlayerNumber, Vec<Tile>> = order
            .iter()
            .map(|number| (*number, deck.by_ref().take(HAND_SIZE).collect()))
            .collect();
        let default_stats = CorporationStats {
            price: 100,
            majority_bonus: 1000,
            minority_bonus: 500,
            remaining_shares: 25,
            size: 0,
        };

        Ok(Self {
            cash: order.iter().map(|n| (*n, STARTING_CASH)).collect(),
            shares: order.iter().map(|n| (*n, [0; CORPORATION_COUNT])).collect(),
            order,
            turn: 0,
            phase: Phase::PlayTile,
            round: 1,
            last_round: false,
            end_game_claimable: false,
            phase_after_tile: Phase::BuyStock,
            board: HashMap::new(),
            stats: [default_stats; CORPORATION_COUNT],
            defunct: [false; CORPORATION_COUNT],
            tied: Vec::new(),
            hands,
            unplayable: HashSet::new(),
            fail_next: None,
            tiles_exhausted: false,
            calls: Vec::new(),
        })
    }

    pub fn give_tile(&mut self, player: PlayerNumber, tile: Tile) {
        self.hands.entry(player).or_default().push(tile);
    }

    pub fn set_size(&mut self, id: usize, size: u32) {
        self.stats[id].size = size;
    }

    fn check_failure(&mut self) -> Result<(), EngineError> {
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn end_turn(&mut self) -> Result<(), EngineError> {
        self.turn = (self.turn + 1) % self.order.len();
        if self.turn == 0 {
            self.round += 1;
        }
        self.phase = Phase::PlayTile;
        if self.tiles_exhausted {
            return Err(EngineError::no_tiles_available());
        }
        Ok(())
    }
}

impl Engine for FakeEngine {
    fn current_player(&self) -> PlayerNumber {
        self.order[self.turn]
    }

    fn phase(&self) -> Phase {
        self.phase.clone()
    }

    fn round(&self) -> u32 {
        self.round
    }

    fn is_last_round(&self) -> bool {
        self.last_round
    }

    fn play_tile(&mut self, tile: Tile) -> Result<(), EngineError> {
        self.check_failure()?;
        let current = self.current_player();
        let hand = self.hands.entry(current).or_default();
        let position = hand
            .iter()
            .position(|held| *held == tile)
            .ok_or_else(|| EngineError::new("tile_not_on_hand"))?;
        hand.remove(position);

        self.calls.push(Call::PlayTile(tile));
        self.board.insert(tile, Cell::Unincorporated);
        self.phase = self.phase_after_tile.clone();
        if self.tiles_exhausted {
            return Err(EngineError::no_tiles_available());
        }
        Ok(())
    }

    fn found_corporation(&mut self, corporation: CorporationId) -> Result<(), EngineError> {
        self.check_failure()?;
        if self.stats[corporation.index()].size > 0 {
            return Err(EngineError::new("corporation_already_on_board"));
        }
        self.calls.push(Call::FoundCorporation(corporation));
        self.stats[corporation.index()].size = 2;
        self.phase = Phase::BuyStock;
        Ok(())
    }

    fn buy_stock(&mut self, buy: &ShareAmounts) -> Result<(), EngineError> {
        self.check_failure()?;
        let current = self.current_player();
        let cost: u32 = buy
            .iter()
            .map(|(id, amount)| amount * self.stats[id.index()].price)
            .sum();
        if cost > self.cash[&current] {
            return Err(EngineError::new("not_enough_cash"));
        }

        self.calls.push(Call::BuyStock(buy.clone()));
        *self.cash.entry(current).or_default() -= cost;
        let owned = self.shares.entry(current).or_default();
        for (id, amount) in buy {
            owned[id.index()] += amount;
            self.stats[id.index()].remaining_shares -= amount;
        }
        self.end_turn()
    }

    fn sell_trade(&mut self, sell: &ShareAmounts, trade: &ShareAmounts) -> Result<(), EngineError> {
        self.check_failure()?;
        let current = self.current_player();
        self.calls.push(Call::SellTrade(sell.clone(), trade.clone()));
        let owned = self.shares.entry(current).or_default();
        for (id, amount) in sell.iter().chain(trade) {
            owned[id.index()] = owned[id.index()].saturating_sub(*amount);
        }
        Ok(())
    }

    fn untie_merge(&mut self, corporation: CorporationId) -> Result<(), EngineError> {
        self.check_failure()?;
        if !self.tied.contains(&corporation) {
            return Err(EngineError::new("not_tied"));
        }
        self.calls.push(Call::UntieMerge(corporation));
        self.tied.clear();
        self.phase = Phase::SellTrade;
        Ok(())
    }

    fn claim_end_game(&mut self) -> bool {
        self.calls.push(Call::ClaimEndGame);
        if self.end_game_claimable {
            self.last_round = true;
        }
        self.last_round
    }

    fn remove_player(&mut self, player: PlayerNumber) {
        self.calls.push(Call::RemovePlayer(player));
        let current = self.current_player();
        self.order.retain(|number| *number != player);
        self.hands.remove(&player);
        self.turn = self.order.iter().position(|n| *n == current).unwrap_or(0);
        if self.order.len() < 3 {
            self.phase = Phase::InsufficientPlayers;
        }
    }

    fn cell(&self, tile: Tile) -> Cell {
        self.board.get(&tile).copied().unwrap_or(Cell::Empty)
    }

    fn corporation(&self, corporation: CorporationId) -> CorporationStats {
        self.stats[corporation.index()]
    }

    fn is_corporation_defunct(&self, corporation: CorporationId) -> bool {
        self.defunct[corporation.index()]
    }

    fn tied_corporations(&self) -> Vec<CorporationId> {
        self.tied.clone()
    }

    fn cash(&self, player: PlayerNumber) -> u32 {
        self.cash.get(&player).copied().unwrap_or_default()
    }

    fn shares(&self, player: PlayerNumber, corporation: CorporationId) -> u32 {
        self.shares
            .get(&player)
            .map_or(0, |owned| owned[corporation.index()])
    }

    fn tiles(&self, player: PlayerNumber) -> Vec<Tile> {
        self.hands.get(&player).cloned().unwrap_or_default()
    }

    fn is_tile_playable(&self, tile: Tile) -> bool {
        !self.unplayable.contains(&tile)
    }
}

/// Factory handing out fresh `FakeEngine` sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct FakeFactory;

impl EngineFactory for FakeFactory {
    type Engine = FakeEngine;

    fn start(
        &self,
        players: &[Player],
        _corporations: &Corporations,
    ) -> Result<FakeEngine, EngineError> {
        FakeEngine::new(players)
    }
}

/// Factory whose sessions start with a seat nobody registered.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnknownStarterFactory;

impl EngineFactory for UnknownStarterFactory {
    type Engine = FakeEngine;

    fn start(
        &self,
        players: &[Player],
        _corporations: &Corporations,
    ) -> Result<FakeEngine, EngineError> {
        let mut engine = FakeEngine::new(players)?;
        engine.order.insert(0, PlayerNumber::new(99));
        Ok(engine)
    }
}

pub fn seats(names: &[&str]) -> Vec<(PlayerNumber, String)> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| (PlayerNumber::new(i as u32), name.to_string()))
        .collect()
}

/// Driver with a running game for players "A", "B" and "C" (seats 0-2).
pub fn started_driver() -> Driver<FakeFactory> {
    let mut driver = Driver::new(FakeFactory);
    driver
        .start_game(seats(&["A", "B", "C"]))
        .expect("three players should start a game");
    driver
}

pub fn engine(driver: &Driver<FakeFactory>) -> &FakeEngine {
    driver.engine().expect("game should be running")
}

pub fn engine_mut(driver: &mut Driver<FakeFactory>) -> &mut FakeEngine {
    driver.engine_mut().expect("game should be running")
}

pub fn corp(index: i64) -> CorporationId {
    CorporationId::new(index).expect("index in range")
}
