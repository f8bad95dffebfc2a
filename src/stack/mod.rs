//! Pending-effect queue.
//!
//! Triggered effects (on-play, on-death, on-attack, turn start/end) are not
//! invoked where they fire. They are pushed onto the `EffectQueue` stored in
//! the game state and drained by
//! [`resolve_pending_effects`](crate::effects::resolve_pending_effects).
//!
//! ## Ordering
//!
//! The queue is strictly FIFO. A cascade (a death triggering more deaths)
//! only runs after every effect queued before it, which keeps multi-step
//! cascades deterministic.
//!
//! ```
//! use menagerie::cards::CardId;
//! use menagerie::core::PlayerId;
//! use menagerie::effects::{ActionKind, EffectDeclaration, Trigger};
//! use menagerie::stack::{EffectQueue, PendingEffect};
//!
//! let mut queue = EffectQueue::new();
//! let draw = EffectDeclaration::new(Trigger::OnPlay, ActionKind::DrawCards { count: 1 });
//! queue.push(PendingEffect::new(draw, CardId::new(9), PlayerId::FIRST));
//!
//! assert_eq!(queue.len(), 1);
//! assert_eq!(queue.pop().unwrap().source, CardId::new(9));
//! ```

mod queue;

pub use queue::{EffectQueue, PendingEffect};
