//! Effect system for card abilities.
//!
//! - `EffectDeclaration`: data describing one ability (trigger, action,
//!   target, filter, duration)
//! - `ActionKind`: the closed set of things an ability can do
//! - `resolve_targets`: selector + filter → concrete entity ids
//! - `resolve_effect` / `resolve_pending_effects`: apply declarations to state
//!
//! ## Design Philosophy
//!
//! Cards are data. Every behavior the engine supports is a variant of
//! `ActionKind`, and the resolver's exhaustive match over it is the only
//! place that behavior is implemented.

mod effect;
mod resolver;
mod targeting;

pub use effect::{ActionKind, EffectDeclaration, EffectFilter, TargetSelector, Trigger};
pub use resolver::{resolve_effect, resolve_pending_effects};
pub use targeting::{creature_matches, resolve_targets, Targets};

pub(crate) use resolver::{
    apply_entry, card_name, deal_damage, destroy_creature, destroy_dead, drain_queue, draw_cards, enqueue_trigger,
    report_skipped,
};
