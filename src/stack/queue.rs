//! FIFO pending-effect queue.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{EntityId, PlayerId};
use crate::effects::EffectDeclaration;

/// An effect waiting to be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEffect {
    /// The declaration to resolve.
    pub effect: EffectDeclaration,

    /// Card the declaration belongs to.
    pub source: CardId,

    /// Creature the effect comes from (for `self_animal`), if any.
    pub source_instance: Option<EntityId>,

    /// Chosen target, or the host of a status effect.
    pub target: Option<EntityId>,

    /// Player on whose behalf the effect resolves.
    pub player: PlayerId,
}

impl PendingEffect {
    #[must_use]
    pub fn new(effect: EffectDeclaration, source: CardId, player: PlayerId) -> Self {
        Self {
            effect,
            source,
            source_instance: None,
            target: None,
            player,
        }
    }

    /// Set the source creature (builder pattern).
    #[must_use]
    pub fn from_instance(mut self, instance: EntityId) -> Self {
        self.source_instance = Some(instance);
        self
    }

    /// Set the target (builder pattern).
    #[must_use]
    pub fn at(mut self, target: Option<EntityId>) -> Self {
        self.target = target;
        self
    }
}

/// Strict first-in first-out queue of pending effects.
///
/// Effects enqueued while another is resolving land behind everything
/// already waiting, so cascades resolve breadth-first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectQueue {
    entries: Vector<PendingEffect>,
}

impl EffectQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect to the back of the queue.
    pub fn push(&mut self, pending: PendingEffect) {
        self.entries.push_back(pending);
    }

    /// Add several effects in order.
    pub fn extend(&mut self, pending: impl IntoIterator<Item = PendingEffect>) {
        for entry in pending {
            self.push(entry);
        }
    }

    /// Take the oldest effect.
    pub fn pop(&mut self) -> Option<PendingEffect> {
        self.entries.pop_front()
    }

    /// Look at the oldest effect without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&PendingEffect> {
        self.entries.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything still waiting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &PendingEffect> {
        self.entries.iter()
    }
}
