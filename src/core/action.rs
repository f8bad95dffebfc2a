//! Command log.
//!
//! Every accepted public transition is recorded as a `Command` in
//! `GameState::history`. Because the state carries its own seeded RNG,
//! replaying the same commands from the same decks and config rebuilds the
//! same state (see [`replay`](crate::rules::replay)).

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::PlayerId;
use crate::cards::CardId;

/// A state transition requested by a player or driver.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Play a card from hand, optionally at a target.
    PlayCard {
        player: PlayerId,
        card: CardId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<EntityId>,
    },
    /// Run the current phase and advance.
    NextPhase,
}

impl Command {
    /// Build a play command.
    #[must_use]
    pub fn play(player: PlayerId, card: CardId, target: Option<EntityId>) -> Self {
        Command::PlayCard {
            player,
            card,
            target,
        }
    }

    /// The player who issued this command, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Command::PlayCard { player, .. } => Some(*player),
            Command::NextPhase => None,
        }
    }
}
