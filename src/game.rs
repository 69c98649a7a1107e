use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::action::{Action, OtherAction};
use crate::card::{Card, CardId, Facet, Variant, forced_draw_total, is_wild};
use crate::deck::Deck;
use crate::error::{GameError, IllegalPlay};
use crate::player::{Player, PlayerId};
use crate::rules::{DrawnCardPolicy, ExhaustionPolicy, OpeningPolicy, RuleSet};
use crate::stack::{DiscardPile, Hand, Stack};
use crate::state::{Direction, GameStateView, Phase, PlayerPublicState};

const DEFAULT_SEED: u64 = 0x5EED_CA4D_5EED_CA4D;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig<V: Variant> {
    pub rules: RuleSet<V>,
    pub seed: u64,
}

impl<V: Variant> GameConfig<V> {
    pub fn new(rules: RuleSet<V>, seed: u64) -> Result<Self, GameError> {
        rules.validate()?;
        Ok(Self { rules, seed })
    }
}

/// Builder that enables deterministic deck injection for testing and bot experiments.
pub struct GameBuilder<V: Variant> {
    config: GameConfig<V>,
    deck: Option<Deck<V>>,
    shuffle: bool,
    first_seat: Option<usize>,
}

impl<V: Variant> GameBuilder<V> {
    pub fn new(rules: RuleSet<V>) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(rules, DEFAULT_SEED)?,
            deck: None,
            shuffle: true,
            first_seat: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replace the rule set's deck. The last card of the deck is the top of the draw pile.
    pub fn with_deck(mut self, deck: Deck<V>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Keep the draw pile in deck order when the game starts.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Start with a fixed seat instead of a random one.
    pub fn with_first_seat(mut self, seat: usize) -> Self {
        self.first_seat = Some(seat);
        self
    }

    pub fn build(self) -> Result<Game<V>, GameError> {
        Game::from_builder(self)
    }
}

/// Turn-based game engine. Owns every card, hand and pile of one table.
///
/// Mutating calls check all of their preconditions before touching any state, so a
/// returned error always leaves the game exactly as it was.
pub struct Game<V: Variant> {
    rules: RuleSet<V>,
    phase: Phase,
    players: Vec<Player<V>>,
    direction: Direction,
    current: usize,
    draw_pile: Stack<V>,
    discard_pile: DiscardPile<V>,
    declared_suit: Option<V::Suit>,
    pending_draw: Option<CardId>,
    deck_size: usize,
    shuffle_on_start: bool,
    first_seat: Option<usize>,
    rng: StdRng,
}

impl<V: Variant> Game<V> {
    pub fn builder(rules: RuleSet<V>) -> Result<GameBuilder<V>, GameError> {
        GameBuilder::new(rules)
    }

    pub fn new(config: GameConfig<V>) -> Result<Self, GameError> {
        GameBuilder {
            config,
            deck: None,
            shuffle: true,
            first_seat: None,
        }
        .build()
    }

    fn from_builder(builder: GameBuilder<V>) -> Result<Self, GameError> {
        let GameBuilder {
            config,
            deck,
            shuffle,
            first_seat,
        } = builder;
        config.rules.validate()?;
        let deck = match deck {
            Some(deck) => deck,
            None => (config.rules.build_deck)()?,
        };
        let deck_size = deck.len();
        debug!(rules = config.rules.name, deck_size, seed = config.seed, "game created");
        Ok(Self {
            rules: config.rules,
            phase: Phase::Forming,
            players: Vec::with_capacity(config.rules.max_players),
            direction: Direction::Forward,
            current: 0,
            draw_pile: deck.into_stack(),
            discard_pile: DiscardPile::new(),
            declared_suit: None,
            pending_draw: None,
            deck_size,
            shuffle_on_start: shuffle,
            first_seat,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    pub fn rules(&self) -> &RuleSet<V> {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn players(&self) -> &[Player<V>] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player<V>> {
        self.players.iter().find(|player| player.id() == id)
    }

    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id() == id)
    }

    pub fn hand(&self, id: PlayerId) -> Result<&Hand<V>, GameError> {
        self.player(id)
            .map(Player::hand)
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// Seat whose turn it is. `None` until the game starts.
    pub fn current_seat(&self) -> Option<usize> {
        match self.phase {
            Phase::Forming => None,
            _ => Some(self.current),
        }
    }

    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_seat().map(|seat| self.players[seat].id())
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn discard_top(&self) -> Option<&Card<V>> {
        self.discard_pile.top()
    }

    pub fn discard_pile(&self) -> &DiscardPile<V> {
        &self.discard_pile
    }

    pub fn draw_pile(&self) -> &Stack<V> {
        &self.draw_pile
    }

    /// Suit named by whoever played the wild card on top of the discard pile.
    pub fn declared_suit(&self) -> Option<V::Suit> {
        self.declared_suit
    }

    pub fn pending_draw(&self) -> Option<CardId> {
        self.pending_draw
    }

    pub fn draw_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn add_player(&mut self, nickname: impl Into<String>) -> Result<PlayerId, GameError> {
        self.ensure_forming()?;
        if self.players.len() + 1 > self.rules.max_players {
            return Err(GameError::TooManyPlayers {
                max: self.rules.max_players,
            });
        }
        let player = Player::new(nickname);
        let id = player.id();
        debug!(player = %id, nickname = player.nickname(), seat = self.players.len(), "player joined");
        self.players.push(player);
        Ok(id)
    }

    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.ensure_forming()?;
        let joined = self.players.len();
        if joined < self.rules.min_players {
            return Err(GameError::NotEnoughPlayers {
                min: self.rules.min_players,
                joined,
            });
        }
        if let Some(seat) = self.first_seat {
            if seat >= joined {
                return Err(GameError::InvalidConfiguration(
                    "first seat is beyond the seated players",
                ));
            }
        }
        let mut needed = self.rules.hand_size * joined + 1;
        if self.rules.opening == OpeningPolicy::ApplyEffects {
            needed += self
                .draw_pile
                .iter()
                .map(|card| forced_draw_total(self.rules.facets_of(card.face())))
                .max()
                .unwrap_or(0);
        }
        if self.draw_pile.len() < needed {
            return Err(GameError::EmptyStack {
                requested: needed,
                available: self.draw_pile.len(),
            });
        }

        if self.shuffle_on_start {
            self.draw_pile.shuffle(&mut self.rng);
        }
        for _ in 0..self.rules.hand_size {
            for seat in 0..joined {
                let card = self.draw_pile.draw_one()?;
                self.players[seat].hand_mut().push(card);
            }
        }
        self.current = match self.first_seat {
            Some(seat) => seat,
            None => self.rng.gen_range(0..joined),
        };
        self.phase = Phase::InProgress;
        info!(
            rules = self.rules.name,
            players = joined,
            first = %self.players[self.current].id(),
            "game started"
        );
        self.open_discard()
    }

    /// Plays `card` from `player`'s hand. Wild cards need `declare`, every other card
    /// must leave it empty.
    pub fn play_turn(
        &mut self,
        player: PlayerId,
        card: CardId,
        declare: Option<V::Suit>,
    ) -> Result<(), GameError> {
        let seat = self.acting_seat(player)?;
        let Some(candidate) = self.players[seat].hand().get(card) else {
            return Err(IllegalPlay::CardNotInHand.into());
        };
        if self.pending_draw.is_some_and(|pending| pending != card) {
            return Err(IllegalPlay::MustPlayDrawnCard.into());
        }
        let facets = self.check_playable(candidate)?;
        self.check_declaration(facets, declare)?;

        let card = self.players[seat]
            .hand_mut()
            .take(card)
            .ok_or(IllegalPlay::CardNotInHand)?;
        debug!(player = %player, card = %card, declared = ?declare, "card played");
        self.discard_pile.push(card);
        self.declared_suit = declare;
        self.pending_draw = None;
        self.apply_facets(facets)?;

        if self.rules.empty_hand_wins && self.players[seat].hand().is_empty() {
            self.phase = Phase::Finished { winner: player };
            info!(winner = %player, nickname = self.players[seat].nickname(), "game finished");
            return Ok(());
        }
        self.next_turn()
    }

    /// Non-card turn actions: drawing instead of playing, and passing after a draw.
    pub fn other_actions(&mut self, player: PlayerId, action: OtherAction) -> Result<(), GameError> {
        let seat = self.acting_seat(player)?;
        match action {
            OtherAction::Draw => {
                if self.pending_draw.is_some() {
                    return Err(IllegalPlay::AlreadyDrew.into());
                }
                self.ensure_drawable(1, self.discard_pile.len().saturating_sub(1))?;
                let card = self.draw_card()?;
                let playable =
                    self.rules.drawn_card == DrawnCardPolicy::PlayOrPass && self.can_play(&card);
                let id = card.id();
                debug!(player = %player, card = %card, playable, "card drawn");
                self.players[seat].hand_mut().push(card);
                if playable {
                    self.pending_draw = Some(id);
                    Ok(())
                } else {
                    self.next_turn()
                }
            }
            OtherAction::Pass => {
                let stuck = !self.can_draw() && !self.has_legal_play(seat);
                if self.pending_draw.is_none() && !stuck {
                    return Err(IllegalPlay::NothingToPass.into());
                }
                debug!(player = %player, "turn passed");
                self.next_turn()
            }
        }
    }

    pub fn apply_action(&mut self, player: PlayerId, action: Action<V>) -> Result<(), GameError> {
        match action {
            Action::Play { card, declare } => self.play_turn(player, card, declare),
            Action::Draw => self.other_actions(player, OtherAction::Draw),
            Action::Pass => self.other_actions(player, OtherAction::Pass),
        }
    }

    /// Moves the turn pointer one seat in the current direction.
    pub fn next_turn(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.advance();
        Ok(())
    }

    /// Seat that follows `seat` in the current direction. `None` while nobody is seated.
    pub fn seat_after(&self, seat: usize) -> Option<usize> {
        if self.players.is_empty() {
            return None;
        }
        Some(self.next_seat(seat))
    }

    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action<V>>, GameError> {
        if self.is_finished() {
            return Ok(Vec::new());
        }
        let seat = self.acting_seat(player)?;
        let mut actions = Vec::new();
        for card in self.players[seat].hand().iter() {
            if self.pending_draw.is_some_and(|pending| pending != card.id()) {
                continue;
            }
            if !self.can_play(card) {
                continue;
            }
            if is_wild(self.rules.facets_of(card.face())) {
                actions.extend(self.rules.declarable_suits.iter().map(|suit| Action::Play {
                    card: card.id(),
                    declare: Some(*suit),
                }));
            } else {
                actions.push(Action::Play {
                    card: card.id(),
                    declare: None,
                });
            }
        }
        if self.pending_draw.is_some() {
            actions.push(Action::Pass);
        } else if self.can_draw() {
            actions.push(Action::Draw);
        } else if actions.is_empty() {
            actions.push(Action::Pass);
        }
        Ok(actions)
    }

    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView<V>, GameError> {
        let self_seat = self
            .seat_of(perspective)
            .ok_or(GameError::UnknownPlayer(perspective))?;
        let current_seat = self.current_seat();
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, player)| PlayerPublicState {
                id: player.id(),
                nickname: player.nickname().to_string(),
                seat,
                hand_size: player.hand().len(),
                is_current: current_seat == Some(seat),
            })
            .collect();

        Ok(GameStateView {
            phase: self.phase,
            self_player: perspective,
            self_seat,
            current_seat,
            direction: self.direction,
            draw_pile_count: self.draw_pile.len(),
            discard_pile_count: self.discard_pile.len(),
            discard_top: self.discard_pile.top().map(Card::view),
            declared_suit: self.declared_suit,
            pending_draw: self.pending_draw,
            players,
            hand: self.players[self_seat].hand().views(),
        })
    }

    fn ensure_forming(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Forming => Ok(()),
            _ => Err(GameError::AlreadyStarted),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Forming => Err(GameError::NotStarted),
            Phase::InProgress => Ok(()),
            Phase::Finished { .. } => Err(GameError::GameOver),
        }
    }

    fn acting_seat(&self, player: PlayerId) -> Result<usize, GameError> {
        self.ensure_in_progress()?;
        let seat = self
            .seat_of(player)
            .ok_or(GameError::UnknownPlayer(player))?;
        if seat != self.current {
            return Err(IllegalPlay::NotYourTurn.into());
        }
        Ok(seat)
    }

    fn check_declaration(&self, facets: &[Facet], declare: Option<V::Suit>) -> Result<(), GameError> {
        match (is_wild(facets), declare) {
            (true, None) => Err(IllegalPlay::MissingDeclaration.into()),
            (true, Some(suit)) if !self.rules.is_declarable(suit) => {
                Err(IllegalPlay::UndeclarableSuit.into())
            }
            (false, Some(_)) => Err(IllegalPlay::UnexpectedDeclaration.into()),
            _ => Ok(()),
        }
    }

    /// Verifies `count` cards can be drawn, counting `reclaimable` discards when the
    /// rule set reshuffles.
    fn ensure_drawable(&self, count: usize, reclaimable: usize) -> Result<(), GameError> {
        let mut available = self.draw_pile.len();
        if self.rules.exhaustion == ExhaustionPolicy::Reshuffle {
            available += reclaimable;
        }
        if count > available {
            return Err(GameError::EmptyStack {
                requested: count,
                available,
            });
        }
        Ok(())
    }

    fn can_draw(&self) -> bool {
        !self.draw_pile.is_empty()
            || (self.rules.exhaustion == ExhaustionPolicy::Reshuffle && self.discard_pile.len() > 1)
    }

    fn has_legal_play(&self, seat: usize) -> bool {
        self.players[seat]
            .hand()
            .iter()
            .any(|card| self.can_play(card))
    }

    /// Matching the discard pile is not enough: the cards a forced draw hands out must
    /// exist too. Returns the card's facets when it can go down.
    fn check_playable(&self, card: &Card<V>) -> Result<&'static [Facet], GameError> {
        if !card.legal_to_play(self) {
            return Err(IllegalPlay::DoesNotMatch.into());
        }
        let facets = self.rules.facets_of(card.face());
        // The current top joins the reclaimable discards once this card covers it.
        self.ensure_drawable(forced_draw_total(facets), self.discard_pile.len())?;
        Ok(facets)
    }

    fn can_play(&self, card: &Card<V>) -> bool {
        self.check_playable(card).is_ok()
    }

    /// Caller guarantees at least one seated player.
    fn next_seat(&self, seat: usize) -> usize {
        let count = self.players.len() as isize;
        (seat as isize + self.direction.step()).rem_euclid(count) as usize
    }

    fn advance(&mut self) {
        self.current = self.next_seat(self.current);
        self.pending_draw = None;
        trace!(seat = self.current, direction = ?self.direction, "turn advanced");
    }

    fn draw_card(&mut self) -> Result<Card<V>, GameError> {
        if self.draw_pile.is_empty() && self.rules.exhaustion == ExhaustionPolicy::Reshuffle {
            self.reshuffle_discard();
        }
        self.draw_pile.draw_one()
    }

    fn reshuffle_discard(&mut self) {
        let reclaimed = self.discard_pile.reclaim_under_top();
        warn!(cards = reclaimed.len(), "draw pile exhausted, reshuffling discards");
        self.draw_pile.extend(reclaimed);
        self.draw_pile.shuffle(&mut self.rng);
    }

    fn draw_into(&mut self, seat: usize, count: usize) -> Result<(), GameError> {
        if self.draw_pile.len() >= count {
            let cards = self.draw_pile.draw(count)?;
            self.players[seat].hand_mut().extend(cards);
            return Ok(());
        }
        for _ in 0..count {
            let card = self.draw_card()?;
            self.players[seat].hand_mut().push(card);
        }
        Ok(())
    }

    fn apply_facets(&mut self, facets: &[Facet]) -> Result<(), GameError> {
        for facet in facets {
            match facet {
                Facet::Wild => {}
                Facet::Skip => {
                    debug!(skipped = %self.players[self.next_seat(self.current)].id(), "turn skipped");
                    self.advance();
                }
                Facet::Reverse => {
                    self.direction = self.direction.reversed();
                    debug!(direction = ?self.direction, "turn order reversed");
                }
                Facet::ForcedDraw(count) => {
                    let victim = self.next_seat(self.current);
                    debug!(victim = %self.players[victim].id(), count, "forced draw");
                    self.draw_into(victim, *count)?;
                    self.advance();
                }
            }
        }
        Ok(())
    }

    fn open_discard(&mut self) -> Result<(), GameError> {
        match self.rules.opening {
            OpeningPolicy::IgnoreEffects => {
                let card = self.draw_pile.draw_one()?;
                debug!(card = %card, "opening card");
                self.discard_pile.push(card);
            }
            OpeningPolicy::RedrawActions => {
                let card = self.draw_opening(|facets| facets.is_empty())?;
                debug!(card = %card, "opening card");
                self.discard_pile.push(card);
            }
            OpeningPolicy::ApplyEffects => {
                let card = self.draw_opening(|facets| {
                    !(is_wild(facets) && forced_draw_total(facets) > 0)
                })?;
                debug!(card = %card, "opening card");
                let facets = self.rules.facets_of(card.face());
                self.discard_pile.push(card);
                self.apply_opening_facets(facets)?;
            }
        }
        Ok(())
    }

    /// Draws until `accept` holds, burying rejected cards. Gives up after one pass
    /// through the pile and keeps the last card drawn.
    fn draw_opening(&mut self, accept: impl Fn(&[Facet]) -> bool) -> Result<Card<V>, GameError> {
        let attempts = self.draw_pile.len();
        let mut card = self.draw_pile.draw_one()?;
        for _ in 1..attempts {
            if accept(self.rules.facets_of(card.face())) {
                return Ok(card);
            }
            debug!(card = %card, "opening card returned to the draw pile");
            self.draw_pile.bury(card);
            card = self.draw_pile.draw_one()?;
        }
        Ok(card)
    }

    /// Opening effects land on the first player rather than on the next one.
    fn apply_opening_facets(&mut self, facets: &[Facet]) -> Result<(), GameError> {
        for facet in facets {
            match facet {
                Facet::Wild => {}
                Facet::Skip => self.advance(),
                Facet::Reverse => self.direction = self.direction.reversed(),
                Facet::ForcedDraw(count) => {
                    self.draw_into(self.current, *count)?;
                    self.advance();
                }
            }
        }
        Ok(())
    }
}
