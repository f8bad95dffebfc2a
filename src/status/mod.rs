//! Status engine: derived creature and player modifiers.
//!
//! Statuses never change a creature's stored numbers directly. Instead the
//! engine reads the attached status definitions whenever it needs:
//!
//! - **Current ATK**: `base_atk + atk_modifier + Σ static modify_atk`,
//!   clamped at 0
//! - **Attack eligibility**: intrinsic cannot-attack, freezes, attack-blocking
//!   statuses, immunities and force-attack overrides
//! - **Draw prevention** on players
//!
//! Duration bookkeeping (expiry at the end of the host owner's turn) lives
//! here too.

use tracing::debug;

use crate::cards::{AttachedStatus, BoardCreature, CardCatalog, CardDefinition, StatusTag};
use crate::core::{EntityId, GameEvent, GameState, MatchRules, PlayerId};
use crate::effects::{ActionKind, Trigger};

/// Definitions of a creature's statuses. Unknown ids are skipped.
fn status_definitions<'a>(
    catalog: &'a CardCatalog,
    statuses: &'a im::Vector<AttachedStatus>,
) -> impl Iterator<Item = &'a CardDefinition> + 'a {
    statuses.iter().filter_map(|s| catalog.get(s.card))
}

fn has_static(def: &CardDefinition, pred: impl Fn(&ActionKind) -> bool) -> bool {
    def.effects_for(Trigger::Static).any(|e| pred(&e.action))
}

/// Sum of static ATK deltas from attached statuses.
#[must_use]
pub fn status_atk_delta(catalog: &CardCatalog, creature: &BoardCreature) -> i64 {
    status_definitions(catalog, &creature.statuses)
        .flat_map(|def| def.effects_for(Trigger::Static))
        .map(|e| match e.action {
            ActionKind::ModifyAtk { amount } => amount,
            _ => 0,
        })
        .sum()
}

/// ATK the creature should currently have.
#[must_use]
pub fn current_atk(catalog: &CardCatalog, creature: &BoardCreature) -> i64 {
    (creature.base_atk + creature.atk_modifier + status_atk_delta(catalog, creature)).max(0)
}

/// Store the derived ATK on the creature.
pub fn recompute_atk(catalog: &CardCatalog, creature: &mut BoardCreature) {
    creature.atk = current_atk(catalog, creature);
}

/// Recompute ATK for every creature on both boards.
pub fn recompute_all(catalog: &CardCatalog, state: &mut GameState) {
    for (_, player) in state.players.iter_mut() {
        for creature in player.board.iter_mut() {
            recompute_atk(catalog, creature);
        }
    }
}

/// Does a status definition stop its host from attacking?
fn blocks_attack(status: &CardDefinition) -> bool {
    status.tag == Some(StatusTag::PreventAttack)
        || has_static(status, |a| matches!(a, ActionKind::PreventAttack))
}

fn forces_attack(status: &CardDefinition) -> bool {
    status.tag == Some(StatusTag::ForceAttack)
        || has_static(status, |a| matches!(a, ActionKind::ForceAttack))
}

/// Can this creature attack at all this phase?
///
/// Ignores the per-turn attack allowance; see
/// [`BoardCreature::attacks_exhausted`].
///
/// ## Rules
///
/// 1. A card that declares static `prevent_attack` never attacks.
/// 2. A frozen creature never attacks.
/// 3. With summoning sickness on, a creature played this turn cannot attack.
/// 4. An attack-blocking status blocks unless the creature is immune to it
///    or carries a force-attack status.
#[must_use]
pub fn can_attack(catalog: &CardCatalog, creature: &BoardCreature, rules: &MatchRules) -> bool {
    let Some(def) = catalog.get(creature.card_id) else {
        return false;
    };
    if def.cannot_attack() || creature.frozen_turns > 0 {
        return false;
    }
    if rules.summoning_sickness && creature.played_this_turn {
        return false;
    }

    let statuses: Vec<&CardDefinition> = status_definitions(catalog, &creature.statuses).collect();
    let blocked = statuses
        .iter()
        .any(|status| blocks_attack(status) && !def.is_immune_to(status));
    if !blocked {
        return true;
    }
    statuses.iter().any(|status| forces_attack(status))
}

/// Is this player's draw blocked by an attached status?
#[must_use]
pub fn draw_blocked(catalog: &CardCatalog, state: &GameState, player: PlayerId) -> bool {
    status_definitions(catalog, &state.player(player).statuses).any(|status| {
        status.tag == Some(StatusTag::PreventDraw)
            || has_static(status, |a| matches!(a, ActionKind::PreventDraw))
    })
}

/// Send a detached status to its owner's discard (physical cards only).
pub(crate) fn release_status(
    catalog: &CardCatalog,
    state: &mut GameState,
    status: &AttachedStatus,
    host: EntityId,
) {
    if status.physical {
        state.player_mut(status.owner).discard.push_back(status.card);
    }
    let name = catalog
        .get(status.card)
        .map_or_else(|| status.card.to_string(), |def| def.name.clone());
    debug!(status = %name, %host, "status detached");
    state.record(GameEvent::StatusDetached { status: name, host });
}

fn tick_list(
    statuses: &mut im::Vector<AttachedStatus>,
    host: EntityId,
    expired: &mut Vec<(AttachedStatus, EntityId)>,
) {
    let mut kept = im::Vector::new();
    for mut status in std::mem::take(statuses) {
        if status.tick() {
            expired.push((status, host));
        } else {
            kept.push_back(status);
        }
    }
    *statuses = kept;
}

/// Count down durations on everything the player hosts.
///
/// Expired statuses detach; frozen creatures thaw by one turn. Called at the
/// end of the player's own turn.
pub fn tick_durations(catalog: &CardCatalog, state: &mut GameState, player: PlayerId) {
    let mut expired: Vec<(AttachedStatus, EntityId)> = Vec::new();

    let side = state.player_mut(player);
    tick_list(&mut side.statuses, EntityId::player(player), &mut expired);

    for creature in side.board.iter_mut() {
        creature.frozen_turns = creature.frozen_turns.saturating_sub(1);
        tick_list(&mut creature.statuses, creature.instance_id, &mut expired);
        recompute_atk(catalog, creature);
    }

    for (status, host) in &expired {
        release_status(catalog, state, status, *host);
    }
}
