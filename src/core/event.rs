//! Human-readable event log.
//!
//! Every observable happening in a match appends one `GameEvent` to
//! `GameState::log`. The log is append-only and `Display`s as plain text, so
//! callers can render it or persist it without reaching into engine
//! internals.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::PlayerId;
use super::state::Phase;
use crate::cards::CardId;

/// A named event in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        first_player: PlayerId,
        seed: u64,
    },
    PhaseChanged {
        player: PlayerId,
        turn: u32,
        phase: Phase,
    },
    CardDrawn {
        player: PlayerId,
        card: CardId,
    },
    /// The player's draw was prevented.
    DrawSkipped {
        player: PlayerId,
    },
    /// The player tried to draw from an empty deck.
    DeckEmpty {
        player: PlayerId,
        penalty: i64,
    },
    CardPlayed {
        player: PlayerId,
        card: CardId,
        name: String,
        target: Option<EntityId>,
    },
    DamageDealt {
        source: String,
        target: EntityId,
        amount: i64,
    },
    LifeChanged {
        player: PlayerId,
        delta: i64,
        life: i64,
    },
    CreatureDestroyed {
        owner: PlayerId,
        instance: EntityId,
        name: String,
    },
    StatusAttached {
        status: String,
        host: EntityId,
    },
    /// The host was immune to the status.
    StatusBlocked {
        status: String,
        host: EntityId,
    },
    StatusDetached {
        status: String,
        host: EntityId,
    },
    /// An effect could not be resolved and was dropped.
    EffectSkipped {
        source: CardId,
        reason: String,
    },
    GameOver {
        winner: Option<PlayerId>,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { first_player, seed } => {
                write!(f, "Game started (seed {seed}), {first_player} goes first")
            }
            GameEvent::PhaseChanged { player, turn, phase } => {
                write!(f, "Turn {turn}: {player} enters {phase} phase")
            }
            GameEvent::CardDrawn { player, .. } => write!(f, "{player} draws a card"),
            GameEvent::DrawSkipped { player } => write!(f, "{player} skips their draw"),
            GameEvent::DeckEmpty { player, penalty } => {
                write!(f, "{player} has no cards left and loses {penalty} life")
            }
            GameEvent::CardPlayed { player, name, target, .. } => match target {
                Some(target) => write!(f, "{player} plays {name} targeting {target}"),
                None => write!(f, "{player} plays {name}"),
            },
            GameEvent::DamageDealt { source, target, amount } => {
                write!(f, "{source} deals {amount} damage to {target}")
            }
            GameEvent::LifeChanged { player, delta, life } => {
                write!(f, "{player} life {delta:+} (now {life})")
            }
            GameEvent::CreatureDestroyed { owner, instance, name } => {
                write!(f, "{owner}'s {name} ({instance}) is destroyed")
            }
            GameEvent::StatusAttached { status, host } => write!(f, "{status} attached to {host}"),
            GameEvent::StatusBlocked { status, host } => write!(f, "{host} is immune to {status}"),
            GameEvent::StatusDetached { status, host } => write!(f, "{status} wears off {host}"),
            GameEvent::EffectSkipped { source, reason } => {
                write!(f, "Effect from {source} skipped: {reason}")
            }
            GameEvent::GameOver { winner: Some(winner) } => write!(f, "Game over, {winner} wins"),
            GameEvent::GameOver { winner: None } => write!(f, "Game over, draw"),
        }
    }
}
