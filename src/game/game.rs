//! The game orchestrator.
//!
//! `Game` owns every piece of state for one table and drives the turn
//! machine. Each public operation validates first and mutates only once
//! every check has passed, so a rejected call leaves the game untouched.

use serde::{Deserialize, Serialize};

use crate::board::{adjacent_placed_tiles, group_containing, unincorporated_groups, Group, TileBag};
use crate::core::player::WAIT_MSG;
use crate::core::{
    ActionError, ActionResult, ActivityKind, ActivityLog, Board, ConfigError, CorpMap, Corporation,
    GameConfig, GameRng, Player, PlayerId, StockOrder, Tile,
};
use crate::corporations::CorporationRegistry;
use crate::rules::turn::{BUY_STOCKS_MSG, ESTABLISH_MSG, NO_CORPS_MSG, PLACE_TILE_MSG, UNPLAYABLE_MSG};
use crate::rules::{merger_bonuses, price_purchase, TurnState};

use super::status::{
    ActionOptions, CorporationStatus, GameStatus, PlayerStatus, PlayersProfile, StatusSnapshot,
};

/// Identifier of a game, unique within a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One game table.
#[derive(Clone, Debug)]
pub struct Game {
    id: GameId,
    config: GameConfig,
    board: Board,
    bag: TileBag,
    corporations: CorporationRegistry,
    /// Seated players. Sorted into turn order at start.
    players: Vec<Player>,
    /// Unincorporated tiles on the board, in placement order.
    placed: Vec<Tile>,
    groups: Vec<Group>,
    activity: ActivityLog,
    current: usize,
    started: bool,
    rng: GameRng,
}

impl Game {
    /// Create an empty table.
    pub fn new(id: GameId, config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = config.board();
        Ok(Self {
            id,
            board,
            bag: TileBag::full(&board),
            corporations: CorporationRegistry::new(config.stock_pool, config.safe_size),
            players: Vec::with_capacity(config.required_players),
            placed: Vec::new(),
            groups: Vec::new(),
            activity: ActivityLog::new(),
            current: 0,
            started: false,
            rng,
            config,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    #[must_use]
    pub fn corporations(&self) -> &CorporationRegistry {
        &self.corporations
    }

    /// Players in seat order (turn order once started).
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Unincorporated tiles on the board.
    #[must_use]
    pub fn placed_tiles(&self) -> &[Tile] {
        &self.placed
    }

    /// Current unincorporated groups.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player whose turn it is, once started.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.started {
            self.players.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether every seat is taken.
    #[must_use]
    pub fn has_all_joined(&self) -> bool {
        self.players.len() == self.config.required_players
    }

    // === Setup ===

    /// Seat a player.
    pub fn add_player(&mut self, id: PlayerId, name: impl Into<String>) -> ActionResult<()> {
        if self.started {
            return Err(ActionError::AlreadyStarted);
        }
        if self.player(id).is_some() {
            return Err(ActionError::DuplicatePlayer(id));
        }
        if self.has_all_joined() {
            return Err(ActionError::GameFull {
                required: self.config.required_players,
            });
        }

        let player = Player::new(id, name, self.config.starting_money);
        tracing::info!(
            target: "acquire::game",
            game = self.id.0,
            player = id.0,
            name = player.name(),
            seats = self.players.len() + 1,
            "game.player_joined"
        );
        self.players.push(player);
        Ok(())
    }

    /// Start the game.
    ///
    /// Every player draws one tile; the lowest tile goes first. The drawn
    /// tiles stay on the board, hands are dealt in turn order, and the
    /// first player's turn begins.
    pub fn start(&mut self) -> ActionResult<()> {
        if self.started {
            return Err(ActionError::AlreadyStarted);
        }
        if !self.has_all_joined() {
            return Err(ActionError::NotEnoughPlayers {
                joined: self.players.len(),
                required: self.config.required_players,
            });
        }

        let opening = self.bag.draw_many(self.players.len(), &mut self.rng);
        let mut seats: Vec<(Tile, Player)> = opening.into_iter().zip(self.players.drain(..)).collect();
        seats.sort_by_key(|(tile, _)| *tile);
        let (opening, players): (Vec<Tile>, Vec<Player>) = seats.into_iter().unzip();
        self.players = players;

        self.activity
            .add(ActivityKind::Order, "Order decided based on initial tiles");
        self.placed.extend(opening);
        self.activity.add(ActivityKind::TilePlaced, "Initial tiles placed");
        self.refresh_groups();

        for player in &mut self.players {
            for tile in self.bag.draw_many(self.config.hand_size, &mut self.rng) {
                player.add_tile(tile);
            }
        }

        self.started = true;
        self.current = 0;
        tracing::info!(
            target: "acquire::game",
            game = self.id.0,
            players = self.players.len(),
            first = self.players[0].id().0,
            "game.started"
        );
        self.begin_turn();
        Ok(())
    }

    // === Turn actions ===

    /// Place a tile from the current player's hand.
    pub fn place_tile(&mut self, player: PlayerId, tile: Tile) -> ActionResult<()> {
        let idx = self.require_turn(player)?;
        self.require_state(idx, "place a tile", |s| matches!(s, TurnState::PlaceTile))?;
        if !self.players[idx].has_tile(tile) {
            return Err(ActionError::TileNotInHand(tile));
        }

        let adjacent = self.corporations.adjacent_to(&self.board, tile);
        let mut bonus_msg = None;
        match adjacent.as_slice() {
            [] => self.placed.push(tile),
            [corporation] => self.absorb(*corporation, tile),
            _ => {
                let ordered = self.corporations.in_desc_order(&adjacent);
                let (acquirer, target) = (ordered[0], ordered[1]);
                if self.corporations.is_stable(target) {
                    return Err(ActionError::UnplayableTile(tile));
                }
                bonus_msg = self.merge(idx, acquirer, target, tile);
            }
        }

        self.players[idx].remove_tile(tile);
        let label = self.board.label(tile);
        self.activity.add(
            ActivityKind::TilePlaced,
            format!("{} placed {label}", self.players[idx].name()),
        );
        self.refresh_groups();
        tracing::debug!(
            target: "acquire::game",
            game = self.id.0,
            player = player.0,
            tile = %label,
            "tile.placed"
        );

        if !self.groups.is_empty() && self.corporations.any_inactive() {
            self.players[idx].set_state(TurnState::Establish, ESTABLISH_MSG);
        } else if !self.groups.is_empty() {
            self.players[idx].set_state(TurnState::NoCorps, NO_CORPS_MSG);
        } else if self.corporations.any_active() {
            self.players[idx].set_state(TurnState::BuyStocks, BUY_STOCKS_MSG);
        } else {
            self.end_turn();
        }
        // The placer keeps their bonus notice alongside the next prompt.
        if let Some(msg) = bonus_msg.filter(|_| self.current == idx) {
            let player = &mut self.players[idx];
            let combined = format!("{msg}. {}", player.status_msg());
            player.set_status_msg(combined);
        }
        Ok(())
    }

    /// Found `corporation` on the group containing `tile`.
    pub fn establish_corporation(
        &mut self,
        player: PlayerId,
        tile: Tile,
        corporation: Corporation,
    ) -> ActionResult<()> {
        let idx = self.require_turn(player)?;
        self.require_state(idx, "establish a corporation", |s| matches!(s, TurnState::Establish))?;
        if self.corporations.is_active(corporation) {
            return Err(ActionError::CorporationActive(corporation));
        }
        let group = group_containing(&self.groups, tile)
            .cloned()
            .ok_or(ActionError::NoSuchGroup(tile))?;

        self.corporations.establish(corporation, &group)?;
        self.placed.retain(|t| !group.contains(t));
        if self.corporations.remove_stocks(corporation, 1) {
            self.players[idx].add_stocks(corporation, 1);
        }
        self.activity.add(
            ActivityKind::Establish,
            format!("{} established {corporation}", self.players[idx].name()),
        );
        self.refresh_groups();
        self.players[idx].set_state(TurnState::BuyStocks, BUY_STOCKS_MSG);

        tracing::info!(
            target: "acquire::game",
            game = self.id.0,
            player = player.0,
            corporation = corporation.name(),
            area = group.len(),
            "corporation.established"
        );
        Ok(())
    }

    /// Buy shares and end the turn.
    pub fn buy_stocks(&mut self, player: PlayerId, order: &StockOrder) -> ActionResult<()> {
        let idx = self.require_turn(player)?;
        self.require_state(idx, "buy stocks", |s| matches!(s, TurnState::BuyStocks))?;
        let purchase = price_purchase(
            order,
            &self.corporations,
            self.players[idx].money(),
            &self.config,
        )?;

        for &(corporation, qty) in &purchase.lines {
            self.corporations.remove_stocks(corporation, qty);
            self.players[idx].add_stocks(corporation, qty);
        }
        self.players[idx].deduct_money(purchase.cost);

        if !purchase.is_empty() {
            let bought = purchase
                .lines
                .iter()
                .map(|(corporation, qty)| format!("{corporation} {qty}"))
                .collect::<Vec<_>>()
                .join(", ");
            self.activity.add(
                ActivityKind::Buy,
                format!("{} bought {bought}", self.players[idx].name()),
            );
            tracing::debug!(
                target: "acquire::game",
                game = self.id.0,
                player = player.0,
                shares = purchase.total_shares(),
                cost = purchase.cost,
                "stocks.bought"
            );
        }
        self.end_turn();
        Ok(())
    }

    /// Pass on the current optional step.
    ///
    /// Skipping a purchase ends the turn; skipping establishment moves on
    /// to buying. Anywhere else it does nothing.
    pub fn skip(&mut self, player: PlayerId) -> ActionResult<()> {
        let idx = self.require_turn(player)?;
        match self.players[idx].state() {
            TurnState::BuyStocks => self.end_turn(),
            TurnState::Establish | TurnState::NoCorps => {
                self.players[idx].set_state(TurnState::BuyStocks, BUY_STOCKS_MSG);
            }
            _ => {}
        }
        Ok(())
    }

    /// Swap the flagged unplayable tiles for fresh ones.
    ///
    /// `tiles` must match the flagged set exactly, in any order. Fresh
    /// tiles are drawn before the old ones go back into the bag.
    pub fn replace_tiles(&mut self, player: PlayerId, tiles: &[Tile]) -> ActionResult<()> {
        let idx = self.require_turn(player)?;
        let TurnState::UnplayableTile { tiles: flagged } = self.players[idx].state() else {
            return Err(ActionError::WrongState {
                action: "replace tiles",
                state: self.players[idx].state().name(),
            });
        };
        let mut offered = tiles.to_vec();
        let mut expected = flagged.clone();
        offered.sort_unstable();
        expected.sort_unstable();
        if offered != expected {
            return Err(ActionError::ReplacementMismatch);
        }

        for tile in &offered {
            self.players[idx].remove_tile(*tile);
        }
        for tile in self.bag.draw_many(offered.len(), &mut self.rng) {
            self.players[idx].add_tile(tile);
        }
        let labels = offered
            .iter()
            .map(|t| self.board.label(*t))
            .collect::<Vec<_>>()
            .join(",");
        self.bag.put_back(offered);
        self.activity.add(
            ActivityKind::ReplaceTile,
            format!("{} replaced {labels} unplayable tiles", self.players[idx].name()),
        );
        self.players[idx].set_state(TurnState::PlaceTile, PLACE_TILE_MSG);
        tracing::debug!(
            target: "acquire::game",
            game = self.id.0,
            player = player.0,
            count = expected.len(),
            "tiles.replaced"
        );
        Ok(())
    }

    // === Status ===

    /// Everything `player` may see.
    pub fn status(&self, player: PlayerId) -> ActionResult<StatusSnapshot> {
        let me = self.player(player).ok_or(ActionError::UnknownPlayer(player))?;

        let corporations = self.corporations.entries();
        let status = GameStatus {
            placed_tiles: self.placed.clone(),
            corporations: CorpMap::new(|c| CorporationStatus {
                active: corporations[c].is_active(),
                area: corporations[c].area(),
                tiles: corporations[c].tiles().to_vec(),
                stock_remaining: corporations[c].stock_remaining(),
                price: self.corporations.share_price(c),
                stable: self.corporations.is_stable(c),
            }),
            player: PlayerStatus {
                name: me.name().to_string(),
                money: me.money(),
                tiles: me.hand().to_vec(),
                stocks: me.stocks().clone(),
                status_msg: me.status_msg().to_string(),
                turn: me.is_turn(),
            },
            players_profile: PlayersProfile {
                all_players_name: self.players.iter().map(|p| p.name().to_string()).collect(),
                current_player: self.current,
            },
            activity: self.activity.clone(),
        };

        let action = match me.state() {
            TurnState::Wait => ActionOptions::Wait,
            TurnState::PlaceTile => ActionOptions::PlaceTile,
            TurnState::UnplayableTile { tiles } => ActionOptions::UnplayableTile {
                unplayable_tiles: tiles.clone(),
            },
            TurnState::Establish => ActionOptions::Establish {
                available_corporations: self.corporations.inactive(),
                groups: self.groups.clone(),
            },
            TurnState::NoCorps => ActionOptions::NoCorps,
            TurnState::BuyStocks => ActionOptions::BuyStocks {
                active_corps: self.corporations.active(),
            },
        };

        Ok(StatusSnapshot { status, action })
    }

    /// Hand tiles of `player` that would merge a safe corporation.
    #[must_use]
    pub fn unplayable_tiles(&self, player: &Player) -> Vec<Tile> {
        player
            .hand()
            .iter()
            .copied()
            .filter(|&t| self.corporations.blocks_merge(&self.board, t))
            .collect()
    }

    // === Internals ===

    fn require_turn(&self, player: PlayerId) -> ActionResult<usize> {
        if !self.started {
            return Err(ActionError::NotStarted);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id() == player)
            .ok_or(ActionError::UnknownPlayer(player))?;
        if idx != self.current {
            return Err(ActionError::NotYourTurn(player));
        }
        Ok(idx)
    }

    fn require_state(
        &self,
        idx: usize,
        action: &'static str,
        allowed: impl Fn(&TurnState) -> bool,
    ) -> ActionResult<()> {
        let state = self.players[idx].state();
        if allowed(state) {
            Ok(())
        } else {
            Err(ActionError::WrongState {
                action,
                state: state.name(),
            })
        }
    }

    fn refresh_groups(&mut self) {
        self.groups = unincorporated_groups(&self.board, &self.placed);
    }

    /// Move `tile` and every placed tile it touches (with their groups)
    /// into `corporation`.
    fn absorb(&mut self, corporation: Corporation, tile: Tile) {
        let pulled = adjacent_placed_tiles(&self.board, &self.placed, &self.groups, tile);
        self.placed.retain(|t| !pulled.contains(t));
        self.corporations.add_tiles(corporation, pulled);
        self.corporations.add_tiles(corporation, [tile]);
    }

    /// Fold `target` into `acquirer`. Returns the placer's bonus message, if
    /// they were paid one.
    fn merge(
        &mut self,
        idx: usize,
        acquirer: Corporation,
        target: Corporation,
        tile: Tile,
    ) -> Option<String> {
        let area = self.corporations.area(target);
        let placer = self.players[idx].id();
        let bonus_msg = self.pay_bonuses(target, area, placer);

        let tiles = self.corporations.dissolve(target);
        self.corporations.add_tiles(acquirer, tiles);
        self.absorb(acquirer, tile);

        self.activity.add(
            ActivityKind::Merge,
            format!("{} merged {target} with {acquirer}", self.players[idx].name()),
        );
        tracing::info!(
            target: "acquire::game",
            game = self.id.0,
            acquirer = acquirer.name(),
            target_corporation = target.name(),
            target_area = area,
            "corporation.merged"
        );
        bonus_msg
    }

    fn pay_bonuses(
        &mut self,
        target: Corporation,
        area: usize,
        placer: PlayerId,
    ) -> Option<String> {
        let holdings: Vec<(PlayerId, u32)> = self
            .players
            .iter()
            .map(|p| (p.id(), p.stocks()[target]))
            .collect();
        let bonuses = merger_bonuses(
            &holdings,
            target.majority_bonus(area),
            target.minority_bonus(area),
        );
        if bonuses.is_empty() {
            return None;
        }

        let mut placer_msg = None;
        let mut received = Vec::with_capacity(bonuses.len());
        for (id, amount) in bonuses {
            if let Some(player) = self.players.iter_mut().find(|p| p.id() == id) {
                let msg = format!("You received {amount} as bonus of {target}");
                player.add_money(amount);
                player.set_status_msg(msg.clone());
                received.push(format!("{} received {amount}", player.name()));
                if id == placer {
                    placer_msg = Some(msg);
                }
            }
        }
        self.activity.add(
            ActivityKind::Bonus,
            format!("{} as bonus of {target}", received.join(", ")),
        );
        placer_msg
    }

    fn begin_turn(&mut self) {
        let unplayable = self.unplayable_tiles(&self.players[self.current]);
        let player = &mut self.players[self.current];
        self.activity
            .add(ActivityKind::Turn, format!("{}'s turn", player.name()));
        player.set_turn(true);
        if unplayable.is_empty() {
            player.set_state(TurnState::PlaceTile, PLACE_TILE_MSG);
        } else {
            player.set_state(TurnState::UnplayableTile { tiles: unplayable }, UNPLAYABLE_MSG);
        }
        tracing::debug!(
            target: "acquire::game",
            game = self.id.0,
            player = player.id().0,
            state = player.state().name(),
            "turn.changed"
        );
    }

    fn end_turn(&mut self) {
        let player = &mut self.players[self.current];
        if let Some(tile) = self.bag.draw(&mut self.rng) {
            player.add_tile(tile);
        }
        player.set_turn(false);
        player.set_state(TurnState::Wait, WAIT_MSG);
        self.current = (self.current + 1) % self.players.len();
        self.begin_turn();
    }
}
