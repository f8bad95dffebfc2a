//! Runtime card state.
//!
//! A `BoardCreature` is one animal on one board at one moment. It tracks the
//! mutable numbers (current ATK/HP, attack counter) and the statuses attached
//! to it. An `AttachedStatus` is a status card (or a token granted by an
//! effect) hanging on a creature or on a player.
//!
//! ## Instance vs Definition
//!
//! Several creatures may share one `CardId`; each has its own `EntityId`
//! (`instance_id`), allocated from the game state and never reused.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::{EntityId, PlayerId};

/// A status attached to a creature or a player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachedStatus {
    /// Status definition.
    pub card: CardId,

    /// Player whose deck the status card came from (or who granted the token).
    pub owner: PlayerId,

    /// Turns left before expiry. `None` lasts until the host leaves play.
    pub turns_remaining: Option<u32>,

    /// Backed by a real card. Physical statuses return to their owner's
    /// discard on detach; tokens vanish.
    pub physical: bool,
}

impl AttachedStatus {
    /// A played status card.
    #[must_use]
    pub fn card(card: CardId, owner: PlayerId, turns_remaining: Option<u32>) -> Self {
        Self {
            card,
            owner,
            turns_remaining,
            physical: true,
        }
    }

    /// A status granted by an effect, with no card behind it.
    #[must_use]
    pub fn token(card: CardId, owner: PlayerId, turns_remaining: Option<u32>) -> Self {
        Self {
            card,
            owner,
            turns_remaining,
            physical: false,
        }
    }

    /// Count down one turn. Returns `true` when the status has expired.
    pub fn tick(&mut self) -> bool {
        match self.turns_remaining.as_mut() {
            Some(turns) => {
                *turns = turns.saturating_sub(1);
                *turns == 0
            }
            None => false,
        }
    }
}

/// An animal in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCreature {
    /// Unique entity id for this instance.
    pub instance_id: EntityId,

    /// Definition this creature was played from.
    pub card_id: CardId,

    /// Controlling player (always the player who played it).
    pub owner: PlayerId,

    /// Current ATK, derived by the status engine.
    pub atk: i64,

    /// Current HP. At or below 0 the creature is destroyed at the next
    /// cleanup.
    pub hp: i64,

    /// HP cap for healing.
    pub max_hp: i64,

    /// Printed ATK.
    pub base_atk: i64,

    /// Permanent ATK deltas from one-shot effects.
    pub atk_modifier: i64,

    /// Attached statuses, in attach order.
    pub statuses: Vector<AttachedStatus>,

    /// Attacks made this turn.
    pub attacks_made: u32,

    /// Attacks allowed per turn.
    pub attack_limit: u32,

    /// Entered play during the current turn.
    pub played_this_turn: bool,

    /// Owner turns left during which the creature cannot attack.
    pub frozen_turns: u32,
}

impl BoardCreature {
    /// Create a freshly played creature.
    #[must_use]
    pub fn new(
        instance_id: EntityId,
        card_id: CardId,
        owner: PlayerId,
        atk: i64,
        hp: i64,
        attack_limit: u32,
    ) -> Self {
        Self {
            instance_id,
            card_id,
            owner,
            atk,
            hp,
            max_hp: hp,
            base_atk: atk,
            atk_modifier: 0,
            statuses: Vector::new(),
            attacks_made: 0,
            attack_limit,
            played_this_turn: true,
            frozen_turns: 0,
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Has this creature used up its attacks for the turn?
    #[must_use]
    pub fn attacks_exhausted(&self) -> bool {
        self.attacks_made >= self.attack_limit
    }

    /// Lower HP by `amount` (negative amounts are ignored).
    pub fn take_damage(&mut self, amount: i64) {
        self.hp -= amount.max(0);
    }

    /// Restore HP up to `max_hp`.
    pub fn heal(&mut self, amount: i64) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    /// Change current and maximum HP together.
    pub fn modify_hp(&mut self, amount: i64) {
        self.max_hp += amount;
        self.hp += amount;
    }

    /// Clear the per-turn counters at the end of the owner's turn.
    pub fn reset_turn(&mut self) {
        self.attacks_made = 0;
        self.played_this_turn = false;
    }
}
