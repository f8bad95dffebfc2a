//! Entity identification.
//!
//! Every targetable object (player or creature on a board) has an `EntityId`.
//!
//! ## ID Layout
//!
//! - `0..PLAYER_COUNT`: the two players
//! - `PLAYER_COUNT..`: creature instances, allocated as animals enter play
//!
//! Instance ids are never reused within a match, so several creatures
//! sharing one `CardId` remain distinguishable.
//!
//! ```
//! use menagerie::core::{EntityId, PlayerId};
//!
//! let player = EntityId::player(PlayerId::SECOND);
//! assert_eq!(player.as_player(), Some(PlayerId::SECOND));
//!
//! let creature = EntityId(7);
//! assert!(!creature.is_player());
//! ```

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};

/// Unique identifier for a targetable entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// First id handed out to creature instances.
    pub const FIRST_INSTANCE: u32 = PLAYER_COUNT as u32;

    /// Entity id of a player.
    #[must_use]
    pub const fn player(id: PlayerId) -> Self {
        Self(id.index() as u32)
    }

    /// Check if this entity ID refers to a player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        self.0 < PLAYER_COUNT as u32
    }

    /// Convert to PlayerId if this is a player entity.
    #[must_use]
    pub const fn as_player(self) -> Option<PlayerId> {
        if self.is_player() {
            Some(PlayerId::new(self.0 as u8))
        } else {
            None
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<PlayerId> for EntityId {
    fn from(player: PlayerId) -> Self {
        Self::player(player)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_player() {
            Some(player) => write!(f, "{}", player),
            None => write!(f, "#{}", self.0),
        }
    }
}
