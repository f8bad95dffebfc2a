//! Target resolution.
//!
//! Turns a declaration's `TargetSelector` (plus the explicit target chosen
//! at play time, and the effect's filter) into concrete entity ids. Random
//! selectors draw from the state's RNG at resolution time, so the pick
//! reflects the board as it is when the effect resolves, not when it was
//! queued.

use smallvec::SmallVec;

use super::effect::{EffectFilter, TargetSelector};
use crate::cards::{BoardCreature, CardCatalog};
use crate::core::{EntityId, GameState, PlayerId};
use crate::error::EngineError;
use crate::stack::PendingEffect;

/// Resolved targets. Most effects hit one or two entities.
pub type Targets = SmallVec<[EntityId; 4]>;

/// Does a creature pass the filter? No filter passes everything.
#[must_use]
pub fn creature_matches(
    catalog: &CardCatalog,
    creature: &BoardCreature,
    filter: Option<&EffectFilter>,
) -> bool {
    filter.is_none_or(|filter| {
        let statuses = creature.statuses.iter().filter_map(|s| catalog.get(s.card));
        filter.matches_creature(creature.atk, statuses)
    })
}

fn board_candidates(
    catalog: &CardCatalog,
    state: &GameState,
    players: &[PlayerId],
    filter: Option<&EffectFilter>,
) -> Targets {
    players
        .iter()
        .flat_map(|&p| state.player(p).board.iter())
        .filter(|c| creature_matches(catalog, c, filter))
        .map(|c| c.instance_id)
        .collect()
}

fn pick_random(state: &mut GameState, candidates: Targets) -> Targets {
    state
        .rng
        .gen_index(candidates.len())
        .map(|i| candidates[i])
        .into_iter()
        .collect()
}

/// Resolve a pending effect's targets against the current state.
///
/// ## Errors
///
/// `UnknownTarget` when an explicit target no longer exists (or never did).
/// An effect with no valid targets resolves to an empty list instead.
pub fn resolve_targets(
    catalog: &CardCatalog,
    state: &mut GameState,
    pending: &PendingEffect,
) -> Result<Targets, EngineError> {
    let acting = pending.player;
    let opponent = acting.opponent();
    let filter = pending.effect.filter.as_ref();

    let targets = match pending.effect.target_selector() {
        TargetSelector::Any => match pending.target {
            None => Targets::new(),
            Some(id) if id.is_player() => smallvec::smallvec![id],
            Some(id) => {
                let creature = state.creature(id).ok_or(EngineError::UnknownTarget(id))?;
                if creature_matches(catalog, creature, filter) {
                    smallvec::smallvec![id]
                } else {
                    Targets::new()
                }
            }
        },
        TargetSelector::SelfPlayer => smallvec::smallvec![EntityId::player(acting)],
        TargetSelector::Opponent => smallvec::smallvec![EntityId::player(opponent)],
        TargetSelector::Player => {
            smallvec::smallvec![EntityId::player(acting), EntityId::player(opponent)]
        }
        TargetSelector::SelfAnimal => pending
            .source_instance
            .filter(|&id| state.creature(id).is_some())
            .into_iter()
            .collect(),
        TargetSelector::Host => pending
            .target
            .filter(|&id| state.entity_exists(id))
            .into_iter()
            .collect(),
        TargetSelector::AllAnimals => {
            board_candidates(catalog, state, &[PlayerId::FIRST, PlayerId::SECOND], filter)
        }
        TargetSelector::FriendlyAnimals => board_candidates(catalog, state, &[acting], filter),
        TargetSelector::EnemyAnimals => board_candidates(catalog, state, &[opponent], filter),
        TargetSelector::RandomAnimal => {
            let candidates =
                board_candidates(catalog, state, &[PlayerId::FIRST, PlayerId::SECOND], filter);
            pick_random(state, candidates)
        }
        TargetSelector::RandomEnemyAnimal => {
            let candidates = board_candidates(catalog, state, &[opponent], filter);
            pick_random(state, candidates)
        }
    };
    Ok(targets)
}
