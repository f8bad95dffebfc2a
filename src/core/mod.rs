//! Core engine types: entities, players, state, commands, events, RNG,
//! configuration.

pub mod action;
pub mod config;
pub mod entity;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Command;
pub use config::{GameMode, MatchConfig, MatchConfigBuilder, MatchRules, ANIMALS_PER_TURN, MAX_BOARD_CAPACITY};
pub use entity::EntityId;
pub use event::GameEvent;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase, PlayerState};
