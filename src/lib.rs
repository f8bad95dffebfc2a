//! # menagerie
//!
//! A deterministic rules engine for a two-player card game played with
//! animals, actions and statuses.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Data**: Every card is a `CardDefinition` loaded from JSON.
//!    Abilities are `EffectDeclaration`s drawn from a closed set of actions,
//!    so adding a card never means adding code.
//!
//! 2. **States Are Values**: Public operations take a `&GameState` and return
//!    a new one. Persistent collections from `im-rs` keep the copies cheap.
//!
//! 3. **Deterministic**: The only randomness is a seeded ChaCha stream held
//!    in the state. Same decks, config and commands give the same match.
//!
//! ## Turn Structure
//!
//! `draw → main → attack → end`, advanced one step per `next_phase` call.
//! Cards are played in `main`; creatures attack the opposing player in
//! `attack`; statuses tick and turn-end abilities fire in `end`.
//!
//! ## Modules
//!
//! - `core`: players, entity ids, state, commands, events, RNG, config
//! - `cards`: card definitions, the catalog, creatures on the board
//! - `effects`: effect declarations, targeting, the resolver
//! - `stack`: the FIFO pending-effect queue
//! - `status`: attached statuses, attack eligibility, ATK recomputation
//! - `rules`: setup, phases, play validation, win latch, replay, agents
//!
//! ## Example
//!
//! ```
//! use menagerie::{create_game_state, next_phase, play_card, CardCatalog, MatchConfig, Phase, PlayerId};
//!
//! let catalog = CardCatalog::starter().unwrap();
//! let deck = catalog.deck_from_names(&["Lion", "Lion", "Lion", "Lion"]).unwrap();
//! let config = MatchConfig::builder().seed(7).starting_hand(2).build();
//!
//! let state = create_game_state(&catalog, deck.clone(), deck, &config).unwrap();
//! let state = next_phase(&catalog, &state);
//! assert_eq!(state.phase, Phase::Main);
//!
//! let lion = catalog.by_name("Lion").unwrap().id;
//! let state = play_card(&catalog, &state, PlayerId::FIRST, lion, None);
//! assert_eq!(state.player(PlayerId::FIRST).board.len(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod rules;
pub mod stack;
pub mod status;

// Re-export commonly used types
pub use crate::cards::{AttachedStatus, BoardCreature, CardCatalog, CardDefinition, CardId, CardKind, StatusTag};

pub use crate::core::{
    Command, EntityId, GameEvent, GameMode, GameRng, GameState, MatchConfig, MatchRules, Phase, PlayerId, PlayerMap,
    PlayerState,
};

pub use crate::effects::{
    resolve_effect, resolve_pending_effects, ActionKind, EffectDeclaration, EffectFilter, TargetSelector, Trigger,
};

pub use crate::error::EngineError;

pub use crate::rules::{
    apply_command, can_play_card, check_win_condition, create_game_state, game_result, next_phase, play_card, replay,
    GameResult,
};
