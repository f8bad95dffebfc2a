//! Game state.
//!
//! ## PlayerState
//!
//! One seat's zones and per-turn counters:
//! - Life total (may dip below 0 until game-over is latched)
//! - Deck (front = top), hand, board, discard
//! - Statuses attached to the player
//! - Draw flag and animal-play counters
//!
//! ## GameState
//!
//! The complete, self-contained state of one match: both players, the phase
//! machine position, the pending-effect queue, the event log, the command
//! history and the RNG.
//!
//! All collections are `im` persistent structures, so cloning a state to
//! produce the next one is cheap and the previous state stays valid.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Command;
use super::config::{GameMode, MatchConfig, MatchRules, ANIMALS_PER_TURN, MAX_BOARD_CAPACITY};
use super::entity::EntityId;
use super::event::GameEvent;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{AttachedStatus, BoardCreature, CardId};
use crate::stack::EffectQueue;

/// Position in the turn state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Draw,
    Main,
    Attack,
    End,
}

impl Phase {
    /// The phase that follows this one. `End` wraps to `Draw`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Phase::Draw => Phase::Main,
            Phase::Main => Phase::Attack,
            Phase::Attack => Phase::End,
            Phase::End => Phase::Draw,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Draw => "draw",
            Phase::Main => "main",
            Phase::Attack => "attack",
            Phase::End => "end",
        };
        f.write_str(name)
    }
}

/// One player's side of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub life: i64,

    /// Draw pile, top card first.
    pub deck: Vector<CardId>,

    pub hand: Vector<CardId>,

    /// Creatures in play, in board order.
    pub board: Vector<BoardCreature>,

    pub discard: Vector<CardId>,

    /// Statuses attached to the player.
    pub statuses: Vector<AttachedStatus>,

    /// Cleared by a one-shot draw prevention, restored after the skipped draw.
    pub can_draw: bool,

    /// Animals played this turn.
    pub animals_played: u32,

    /// Extra animal plays granted this turn.
    pub extra_animal_plays: u32,
}

impl PlayerState {
    /// Create a player with a full deck and nothing else.
    #[must_use]
    pub fn new(life: i64, deck: Vector<CardId>) -> Self {
        Self {
            life,
            deck,
            hand: Vector::new(),
            board: Vector::new(),
            discard: Vector::new(),
            statuses: Vector::new(),
            can_draw: true,
            animals_played: 0,
            extra_animal_plays: 0,
        }
    }

    /// Move the top card of the deck to the hand.
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.deck.pop_front()?;
        self.hand.push_back(card);
        Some(card)
    }

    #[must_use]
    pub fn hand_contains(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Remove one copy of `card` from the hand.
    pub fn take_from_hand(&mut self, card: CardId) -> bool {
        match self.hand.index_of(&card) {
            Some(index) => {
                self.hand.remove(index);
                true
            }
            None => false,
        }
    }

    /// Animal plays still available this turn.
    #[must_use]
    pub fn animal_plays_left(&self) -> u32 {
        (ANIMALS_PER_TURN + self.extra_animal_plays).saturating_sub(self.animals_played)
    }

    #[must_use]
    pub fn board_is_full(&self, rules: &MatchRules) -> bool {
        self.board.len() >= rules.board_capacity.min(MAX_BOARD_CAPACITY)
    }

    /// Board index of a creature.
    #[must_use]
    pub fn creature_index(&self, instance: EntityId) -> Option<usize> {
        self.board.iter().position(|c| c.instance_id == instance)
    }

    /// Clear per-turn counters at the end of this player's turn.
    pub fn reset_turn(&mut self) {
        self.animals_played = 0;
        self.extra_animal_plays = 0;
        for creature in self.board.iter_mut() {
            creature.reset_turn();
        }
    }
}

/// Complete state of one match.
///
/// ## Example
///
/// ```
/// use menagerie::cards::CardCatalog;
/// use menagerie::core::{MatchConfig, Phase, PlayerId};
/// use menagerie::rules::create_game_state;
///
/// let catalog = CardCatalog::starter().unwrap();
/// let deck = catalog.deck_from_names(&["Lion"; 10]).unwrap();
/// let config = MatchConfig::builder().seed(1).starting_hand(3).build();
///
/// let state = create_game_state(&catalog, deck.clone(), deck, &config).unwrap();
///
/// assert_eq!(state.phase, Phase::Draw);
/// assert_eq!(state.current_player, PlayerId::FIRST);
/// assert_eq!(state.player(PlayerId::SECOND).hand.len(), 3);
/// assert!(state.conservation_holds());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player whose turn it is.
    pub current_player: PlayerId,

    pub phase: Phase,

    /// Turn number (starts at 1, counts both players' turns).
    pub turn_number: u32,

    pub players: PlayerMap<PlayerState>,

    /// Effects waiting to be resolved.
    pub pending: EffectQueue,

    pub game_over: bool,

    /// Winning seat. `None` while running, or after a draw.
    pub winner: Option<PlayerId>,

    pub mode: GameMode,

    pub rules: MatchRules,

    /// Append-only event log.
    pub log: Vector<GameEvent>,

    /// Accepted commands, in order.
    pub history: Vector<Command>,

    pub rng: GameRng,

    /// Card between the hand and its destination while its play resolves.
    pub in_flight: Option<(PlayerId, CardId)>,

    /// Each player's starting deck, sorted, for conservation checks.
    original_decks: PlayerMap<Vector<CardId>>,

    next_instance: u32,
}

impl GameState {
    /// Shuffle both decks, deal starting hands and park the first player at
    /// the start of their draw phase.
    ///
    /// Card ids are not checked against a catalog here; use
    /// [`create_game_state`](crate::rules::create_game_state).
    #[must_use]
    pub fn new(config: &MatchConfig, deck_a: Vec<CardId>, deck_b: Vec<CardId>) -> Self {
        let mut rng = GameRng::new(config.seed);
        let mut decks = [deck_a, deck_b];

        let original_decks = PlayerMap::new(|p| {
            let mut sorted = decks[p.index()].clone();
            sorted.sort();
            sorted.into_iter().collect()
        });

        for deck in decks.iter_mut() {
            rng.shuffle(deck);
        }

        let rules = config.rules.clone();
        let players = PlayerMap::new(|p| {
            let deck = std::mem::take(&mut decks[p.index()]);
            let mut player = PlayerState::new(rules.starting_life, deck.into_iter().collect());
            for _ in 0..rules.starting_hand {
                if player.draw().is_none() {
                    break;
                }
            }
            player
        });

        let mut log = Vector::new();
        log.push_back(GameEvent::GameStarted {
            first_player: config.first_player,
            seed: config.seed,
        });

        Self {
            current_player: config.first_player,
            phase: Phase::Draw,
            turn_number: 1,
            players,
            pending: EffectQueue::new(),
            game_over: false,
            winner: None,
            mode: config.mode,
            rules,
            log,
            history: Vector::new(),
            rng,
            in_flight: None,
            original_decks,
            next_instance: EntityId::FIRST_INSTANCE,
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    // === Creatures ===

    /// Owner and board index of a creature.
    #[must_use]
    pub fn locate_creature(&self, instance: EntityId) -> Option<(PlayerId, usize)> {
        self.players
            .iter()
            .find_map(|(p, state)| state.creature_index(instance).map(|i| (p, i)))
    }

    #[must_use]
    pub fn creature(&self, instance: EntityId) -> Option<&BoardCreature> {
        let (owner, index) = self.locate_creature(instance)?;
        self.players[owner].board.get(index)
    }

    pub fn creature_mut(&mut self, instance: EntityId) -> Option<&mut BoardCreature> {
        let (owner, index) = self.locate_creature(instance)?;
        self.players[owner].board.get_mut(index)
    }

    /// All creatures, first seat's board first, each in board order.
    pub fn creatures(&self) -> impl Iterator<Item = &BoardCreature> {
        self.players.iter().flat_map(|(_, p)| p.board.iter())
    }

    /// Instance ids of one player's creatures, in board order.
    #[must_use]
    pub fn creature_ids(&self, player: PlayerId) -> Vec<EntityId> {
        self.players[player].board.iter().map(|c| c.instance_id).collect()
    }

    /// Is `id` a player or a creature currently in play?
    #[must_use]
    pub fn entity_exists(&self, id: EntityId) -> bool {
        id.is_player() || self.locate_creature(id).is_some()
    }

    /// Hand out a fresh creature instance id.
    pub fn allocate_instance(&mut self) -> EntityId {
        let id = EntityId(self.next_instance);
        self.next_instance += 1;
        id
    }

    // === Log ===

    /// Append an event to the log.
    pub fn record(&mut self, event: GameEvent) {
        self.log.push_back(event);
    }

    // === Invariants ===

    /// Every card the player owns, wherever it currently sits, sorted.
    ///
    /// Counts deck, hand, discard, creatures on the player's board, physical
    /// statuses the player owns on any creature or player, and the player's
    /// in-flight card.
    #[must_use]
    pub fn owned_cards(&self, player: PlayerId) -> Vec<CardId> {
        let state = &self.players[player];
        let mut cards: Vec<CardId> = state
            .deck
            .iter()
            .chain(state.hand.iter())
            .chain(state.discard.iter())
            .copied()
            .collect();
        cards.extend(state.board.iter().map(|c| c.card_id));

        let statuses = self.players.iter().flat_map(|(_, p)| {
            p.statuses
                .iter()
                .chain(p.board.iter().flat_map(|c| c.statuses.iter()))
        });
        cards.extend(
            statuses
                .filter(|s| s.physical && s.owner == player)
                .map(|s| s.card),
        );

        if let Some((owner, card)) = self.in_flight {
            if owner == player {
                cards.push(card);
            }
        }

        cards.sort();
        cards
    }

    /// Has every card of both starting decks stayed in one of its owner's
    /// zones?
    #[must_use]
    pub fn conservation_holds(&self) -> bool {
        PlayerId::all().all(|p| {
            self.owned_cards(p)
                .iter()
                .eq(self.original_decks[p].iter())
        })
    }
}
