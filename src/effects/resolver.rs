//! Effect resolution.
//!
//! `resolve_effect` applies one declaration; `resolve_pending_effects`
//! drains the FIFO queue. Both are pure: they clone the input state and
//! return the next one.
//!
//! ## Failure Handling
//!
//! Resolution never aborts the match. An effect that cannot resolve (unknown
//! card id, vanished target) is dropped with a `GameEvent::EffectSkipped`
//! entry and a `warn!`, and the drain continues with the next entry.
//!
//! ## Death Handling
//!
//! After every resolved entry, creatures at or below 0 HP are destroyed.
//! Destruction queues the creature's `on_death` effects, then every other
//! creature's `on_animal_death` effects, behind whatever is already waiting.

use im::Vector;
use tracing::{debug, warn};

use super::effect::{ActionKind, EffectDeclaration, Trigger};
use super::targeting::resolve_targets;
use crate::cards::{AttachedStatus, CardCatalog, CardId, CardKind};
use crate::core::{EntityId, GameEvent, GameState, PlayerId};
use crate::error::EngineError;
use crate::rules::check_win_condition;
use crate::stack::PendingEffect;
use crate::status;

/// Apply a single effect declaration and return the resulting state.
///
/// Creatures killed by the effect are destroyed and their death triggers
/// queued, but the queue is not drained.
#[must_use]
pub fn resolve_effect(
    catalog: &CardCatalog,
    state: &GameState,
    effect: &EffectDeclaration,
    source: CardId,
    target: Option<EntityId>,
    player: PlayerId,
) -> GameState {
    let mut next = state.clone();
    let pending = PendingEffect::new(effect.clone(), source, player).at(target);
    resolve_entry(catalog, &mut next, &pending);
    next
}

/// Drain the pending-effect queue in FIFO order.
///
/// Stops when the queue is empty or the game is over.
#[must_use]
pub fn resolve_pending_effects(catalog: &CardCatalog, state: &GameState) -> GameState {
    let mut next = state.clone();
    drain_queue(catalog, &mut next);
    next
}

pub(crate) fn drain_queue(catalog: &CardCatalog, state: &mut GameState) {
    while !state.game_over {
        let Some(pending) = state.pending.pop() else {
            break;
        };
        resolve_entry(catalog, state, &pending);
    }
}

/// Resolve one entry, report failure, then clear out dead creatures.
fn resolve_entry(catalog: &CardCatalog, state: &mut GameState, pending: &PendingEffect) {
    if state.game_over {
        return;
    }
    apply_entry(catalog, state, pending);
    destroy_dead(catalog, state);
}

/// Resolve one entry without the death sweep.
pub(crate) fn apply_entry(catalog: &CardCatalog, state: &mut GameState, pending: &PendingEffect) {
    if let Err(err) = apply_pending(catalog, state, pending) {
        report_skipped(state, pending.source, &err);
    }
}

pub(crate) fn report_skipped(state: &mut GameState, source: CardId, err: &EngineError) {
    warn!(%source, error = %err, "effect skipped");
    state.record(GameEvent::EffectSkipped {
        source,
        reason: err.to_string(),
    });
}

pub(crate) fn card_name(catalog: &CardCatalog, card: CardId) -> String {
    catalog
        .get(card)
        .map_or_else(|| card.to_string(), |def| def.name.clone())
}

fn apply_pending(
    catalog: &CardCatalog,
    state: &mut GameState,
    pending: &PendingEffect,
) -> Result<(), EngineError> {
    let targets = resolve_targets(catalog, state, pending)?;
    if targets.is_empty() {
        debug!(source = %pending.source, action = ?pending.effect.action, "no targets");
        return Ok(());
    }

    for target in targets {
        if state.game_over {
            break;
        }
        apply_to_target(catalog, state, pending, target)?;
    }
    Ok(())
}

fn apply_to_target(
    catalog: &CardCatalog,
    state: &mut GameState,
    pending: &PendingEffect,
    target: EntityId,
) -> Result<(), EngineError> {
    let player_target = target.as_player();

    match pending.effect.action {
        ActionKind::DealDamage { amount } => {
            let source = card_name(catalog, pending.source);
            deal_damage(state, &source, target, amount);
        }
        ActionKind::DrawCards { count } => {
            if let Some(player) = player_target {
                draw_cards(state, player, count);
            }
        }
        ActionKind::Destroy => {
            if player_target.is_none() {
                destroy_creature(catalog, state, target)?;
            }
        }
        ActionKind::ModifyAtk { amount } => {
            if let Some(creature) = state.creature_mut(target) {
                creature.atk_modifier += amount;
                status::recompute_atk(catalog, creature);
            }
        }
        ActionKind::ModifyHp { amount } => {
            if let Some(creature) = state.creature_mut(target) {
                creature.modify_hp(amount);
            }
        }
        ActionKind::Heal { amount } => match player_target {
            Some(player) => change_life(state, player, amount.max(0)),
            None => {
                if let Some(creature) = state.creature_mut(target) {
                    creature.heal(amount);
                }
            }
        },
        ActionKind::ModifyLife { amount } => {
            if let Some(player) = player_target {
                change_life(state, player, amount);
            }
        }
        ActionKind::AttachStatus { status } => {
            attach_status(catalog, state, pending, status, target)?;
        }
        ActionKind::PreventAttack => {
            let turns = pending.effect.duration.unwrap_or(1);
            if let Some(creature) = state.creature_mut(target) {
                creature.frozen_turns = creature.frozen_turns.max(turns);
            }
        }
        ActionKind::PreventDraw => {
            if let Some(player) = player_target {
                state.player_mut(player).can_draw = false;
            }
        }
        ActionKind::ForceAttack | ActionKind::Immune => {
            // Read by the status engine from static declarations.
            debug!(source = %pending.source, "static-only effect resolved directly");
        }
        ActionKind::ExtraAnimalPlay { count } => {
            if let Some(player) = player_target {
                state.player_mut(player).extra_animal_plays += count;
            }
        }
        ActionKind::DiscardHand => {
            if let Some(player) = player_target {
                discard_hand(catalog, state, pending, player);
            }
        }
    }
    Ok(())
}

/// Change a player's life and check for game over.
fn change_life(state: &mut GameState, player: PlayerId, delta: i64) {
    let side = state.player_mut(player);
    side.life += delta;
    let life = side.life;
    debug!(%player, delta, life, "life changed");
    state.record(GameEvent::LifeChanged {
        player,
        delta,
        life,
    });
    check_win_condition(state);
}

/// Damage a creature's HP or a player's life.
pub(crate) fn deal_damage(state: &mut GameState, source: &str, target: EntityId, amount: i64) {
    let amount = amount.max(0);
    state.record(GameEvent::DamageDealt {
        source: source.to_string(),
        target,
        amount,
    });
    match target.as_player() {
        Some(player) => change_life(state, player, -amount),
        None => {
            if let Some(creature) = state.creature_mut(target) {
                creature.take_damage(amount);
            }
        }
    }
}

/// Draw `count` cards. Each draw from an empty deck costs the deck-out
/// penalty instead.
pub(crate) fn draw_cards(state: &mut GameState, player: PlayerId, count: u32) {
    for _ in 0..count {
        if state.game_over {
            break;
        }
        match state.player_mut(player).draw() {
            Some(card) => {
                debug!(%player, %card, "card drawn");
                state.record(GameEvent::CardDrawn { player, card });
            }
            None => {
                let penalty = state.rules.deck_out_penalty;
                debug!(%player, penalty, "draw from empty deck");
                state.record(GameEvent::DeckEmpty { player, penalty });
                change_life(state, player, -penalty);
            }
        }
    }
}

fn discard_hand(catalog: &CardCatalog, state: &mut GameState, pending: &PendingEffect, player: PlayerId) {
    let filter = pending.effect.filter.clone().unwrap_or_default();
    let side = state.player_mut(player);
    let (discarded, kept): (Vector<CardId>, Vector<CardId>) =
        side.hand.clone().into_iter().partition(|&card| {
            catalog
                .get(card)
                .is_some_and(|def| filter.matches_card(def))
        });
    side.hand = kept;
    side.discard.append(discarded);
}

fn attach_status(
    catalog: &CardCatalog,
    state: &mut GameState,
    pending: &PendingEffect,
    status: Option<CardId>,
    target: EntityId,
) -> Result<(), EngineError> {
    // `None` attaches the card being played; once attached it is no longer
    // in flight and later targets get nothing.
    let (card, owner, physical) = match status {
        Some(card) => (card, pending.player, false),
        None => match state.in_flight {
            Some((owner, card)) if card == pending.source => (card, owner, true),
            _ => return Ok(()),
        },
    };

    let def = catalog.lookup(card)?;
    if def.kind != CardKind::Status {
        return Err(EngineError::InvalidDefinition {
            name: def.name.clone(),
            reason: "only status cards can be attached".to_string(),
        });
    }

    if let Some(host) = state.creature(target) {
        let host_def = catalog.lookup(host.card_id)?;
        if host_def.is_immune_to(def) {
            debug!(status = %def.name, host = %target, "status blocked by immunity");
            state.record(GameEvent::StatusBlocked {
                status: def.name.clone(),
                host: target,
            });
            return Ok(());
        }
    }

    let attached = AttachedStatus {
        card,
        owner,
        turns_remaining: pending.effect.duration,
        physical,
    };
    match target.as_player() {
        Some(player) => state.player_mut(player).statuses.push_back(attached),
        None => {
            let Some(creature) = state.creature_mut(target) else {
                return Err(EngineError::UnknownTarget(target));
            };
            creature.statuses.push_back(attached);
            status::recompute_atk(catalog, creature);
        }
    }
    if physical {
        state.in_flight = None;
    }

    debug!(status = %def.name, host = %target, "status attached");
    state.record(GameEvent::StatusAttached {
        status: def.name.clone(),
        host: target,
    });
    Ok(())
}

/// Queue a creature's effects for one trigger point.
pub(crate) fn enqueue_trigger(
    catalog: &CardCatalog,
    state: &mut GameState,
    instance: EntityId,
    trigger: Trigger,
    target: Option<EntityId>,
) -> Result<(), EngineError> {
    let Some(creature) = state.creature(instance) else {
        return Ok(());
    };
    let (card, owner) = (creature.card_id, creature.owner);
    let def = catalog.lookup(card)?;
    state.pending.extend(def.effects_for(trigger).map(|effect| {
        PendingEffect::new(effect.clone(), card, owner)
            .from_instance(instance)
            .at(target)
    }));
    Ok(())
}

/// Remove a creature from play.
///
/// Attached physical statuses go to their owners' discards and the
/// creature's card to its owner's discard. Its `on_death` effects are queued,
/// followed by the `on_animal_death` effects of every remaining creature.
///
/// ## Errors
///
/// `UnknownCard` if the creature's definition is missing. The creature is
/// still removed; only its death triggers are lost.
pub(crate) fn destroy_creature(
    catalog: &CardCatalog,
    state: &mut GameState,
    instance: EntityId,
) -> Result<(), EngineError> {
    let Some((owner, index)) = state.locate_creature(instance) else {
        return Ok(());
    };
    let creature = state.player_mut(owner).board.remove(index);
    for attached in creature.statuses.iter() {
        status::release_status(catalog, state, attached, instance);
    }
    state.player_mut(owner).discard.push_back(creature.card_id);

    let name = card_name(catalog, creature.card_id);
    debug!(%owner, %instance, %name, "creature destroyed");
    state.record(GameEvent::CreatureDestroyed {
        owner,
        instance,
        name,
    });

    let def = catalog.get(creature.card_id);
    if let Some(def) = def {
        state.pending.extend(def.effects_for(Trigger::OnDeath).map(|effect| {
            PendingEffect::new(effect.clone(), creature.card_id, owner).from_instance(instance)
        }));
    }

    // Creatures still waiting for the sweep are not witnesses.
    let witnesses: Vec<_> = state
        .creatures()
        .filter(|c| !c.is_dead())
        .map(|c| (c.instance_id, c.card_id, c.owner))
        .collect();
    for (witness, card, witness_owner) in witnesses {
        if let Some(witness_def) = catalog.get(card) {
            state.pending.extend(witness_def.effects_for(Trigger::OnAnimalDeath).map(|effect| {
                PendingEffect::new(effect.clone(), card, witness_owner).from_instance(witness)
            }));
        }
    }

    match def {
        Some(_) => Ok(()),
        None => Err(EngineError::UnknownCard(creature.card_id)),
    }
}

/// Destroy every creature at or below 0 HP, first board first. Does nothing
/// once the game is over.
pub(crate) fn destroy_dead(catalog: &CardCatalog, state: &mut GameState) {
    while !state.game_over {
        let dead = state
            .creatures()
            .find(|c| c.is_dead())
            .map(|c| (c.instance_id, c.card_id));
        let Some((instance, card)) = dead else {
            break;
        };
        if let Err(err) = destroy_creature(catalog, state, instance) {
            report_skipped(state, card, &err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BoardCreature, CardDefinition, StatusTag};
    use crate::core::MatchConfig;
    use crate::effects::{EffectFilter, TargetSelector};

    const MOUSE: CardId = CardId::new(1);
    const BEE: CardId = CardId::new(2);
    const WOLF: CardId = CardId::new(3);
    const OWL: CardId = CardId::new(4);
    const BITE: CardId = CardId::new(20);
    const SLEEP: CardId = CardId::new(40);
    const RAGE: CardId = CardId::new(41);

    fn catalog() -> CardCatalog {
        CardCatalog::from_definitions([
            CardDefinition::animal(MOUSE, "Mouse", 1, 2),
            CardDefinition::animal(BEE, "Bee", 1, 1).with_effect(
                EffectDeclaration::new(Trigger::OnDeath, ActionKind::DealDamage { amount: 1 })
                    .targeting(TargetSelector::Opponent),
            ),
            CardDefinition::animal(WOLF, "Wolf", 3, 2).with_effect(
                EffectDeclaration::new(Trigger::OnAnimalDeath, ActionKind::ModifyAtk { amount: 1 })
                    .targeting(TargetSelector::SelfAnimal),
            ),
            CardDefinition::animal(OWL, "Owl", 2, 3).with_effect(
                EffectDeclaration::new(Trigger::Static, ActionKind::Immune)
                    .with_filter(EffectFilter::status_named("Sleep")),
            ),
            CardDefinition::action(BITE, "Bite"),
            CardDefinition::status(SLEEP, "Sleep", StatusTag::PreventAttack),
            CardDefinition::status(RAGE, "Rage", StatusTag::Buff).with_effect(
                EffectDeclaration::new(Trigger::Static, ActionKind::ModifyAtk { amount: 2 }),
            ),
        ])
        .unwrap()
    }

    fn empty_state() -> GameState {
        GameState::new(&MatchConfig::default(), Vec::new(), Vec::new())
    }

    fn summon(catalog: &CardCatalog, state: &mut GameState, owner: PlayerId, card: CardId) -> EntityId {
        let def = catalog.get(card).unwrap();
        let id = state.allocate_instance();
        state
            .player_mut(owner)
            .board
            .push_back(BoardCreature::new(id, card, owner, def.base_atk(), def.base_hp(), 1));
        id
    }

    fn on_play(action: ActionKind) -> EffectDeclaration {
        EffectDeclaration::new(Trigger::OnPlay, action)
    }

    #[test]
    fn test_damage_kills_and_queues_death() {
        let catalog = catalog();
        let mut state = empty_state();
        let bee = summon(&catalog, &mut state, PlayerId::SECOND, BEE);

        let next = resolve_effect(
            &catalog,
            &state,
            &on_play(ActionKind::DealDamage { amount: 2 }),
            BITE,
            Some(bee),
            PlayerId::FIRST,
        );

        assert!(next.creature(bee).is_none());
        assert_eq!(next.player(PlayerId::SECOND).discard.back(), Some(&BEE));
        // Death trigger queued but not drained.
        assert_eq!(next.pending.len(), 1);
        assert_eq!(next.player(PlayerId::FIRST).life, 20);

        let drained = resolve_pending_effects(&catalog, &next);
        assert!(drained.pending.is_empty());
        // Bee's owner is player 2, so its opponent is player 1.
        assert_eq!(drained.player(PlayerId::FIRST).life, 19);

        // The input state is untouched.
        assert!(state.creature(bee).is_some());
    }

    #[test]
    fn test_animal_death_witnesses() {
        let catalog = catalog();
        let mut state = empty_state();
        let mouse = summon(&catalog, &mut state, PlayerId::FIRST, MOUSE);
        let wolf = summon(&catalog, &mut state, PlayerId::SECOND, WOLF);

        destroy_creature(&catalog, &mut state, mouse).unwrap();
        drain_queue(&catalog, &mut state);

        assert_eq!(state.creature(wolf).unwrap().atk, 4);
    }

    #[test]
    fn test_cascade_is_breadth_first() {
        let catalog = catalog();
        let mut state = empty_state();
        let wolf = summon(&catalog, &mut state, PlayerId::FIRST, WOLF);
        let bee_a = summon(&catalog, &mut state, PlayerId::SECOND, BEE);
        let bee_b = summon(&catalog, &mut state, PlayerId::SECOND, BEE);

        // Both bees die from one effect: both death notices are queued before
        // any of them resolves.
        state.creature_mut(bee_a).unwrap().hp = 0;
        state.creature_mut(bee_b).unwrap().hp = 0;
        destroy_dead(&catalog, &mut state);

        let order: Vec<_> = state.pending.iter().map(|p| (p.source, p.source_instance)).collect();
        assert_eq!(
            order,
            vec![
                (BEE, Some(bee_a)),
                (WOLF, Some(wolf)),
                (BEE, Some(bee_b)),
                (WOLF, Some(wolf)),
            ]
        );

        drain_queue(&catalog, &mut state);
        assert_eq!(state.player(PlayerId::FIRST).life, 18);
        assert_eq!(state.creature(wolf).unwrap().atk, 5);
    }

    #[test]
    fn test_simultaneous_deaths_do_not_witness_each_other() {
        let catalog = catalog();
        let mut state = empty_state();
        let wolf_a = summon(&catalog, &mut state, PlayerId::FIRST, WOLF);
        let wolf_b = summon(&catalog, &mut state, PlayerId::FIRST, WOLF);
        let survivor = summon(&catalog, &mut state, PlayerId::SECOND, WOLF);

        state.creature_mut(wolf_a).unwrap().hp = 0;
        state.creature_mut(wolf_b).unwrap().hp = -1;
        destroy_dead(&catalog, &mut state);

        let witnesses: Vec<_> = state.pending.iter().map(|p| p.source_instance).collect();
        assert_eq!(witnesses, vec![Some(survivor), Some(survivor)]);

        drain_queue(&catalog, &mut state);
        assert_eq!(state.creature(survivor).unwrap().atk, 5);
        assert_eq!(state.player(PlayerId::FIRST).discard.len(), 2);
    }

    #[test]
    fn test_no_death_sweep_after_game_over() {
        let catalog = catalog();
        let mut state = empty_state();
        let bee = summon(&catalog, &mut state, PlayerId::SECOND, BEE);
        state.creature_mut(bee).unwrap().hp = 0;
        state.player_mut(PlayerId::SECOND).life = 1;

        let hit = on_play(ActionKind::ModifyLife { amount: -1 }).targeting(TargetSelector::Opponent);
        let next = resolve_effect(&catalog, &state, &hit, BITE, None, PlayerId::FIRST);

        assert!(next.game_over);
        assert!(next.pending.is_empty());
        // The bee's death trigger was never queued.
        assert!(next.creature(bee).is_some());
    }

    #[test]
    fn test_life_loss_latches_and_stops_queue() {
        let catalog = catalog();
        let mut state = empty_state();
        state.player_mut(PlayerId::SECOND).life = 1;

        let hit = on_play(ActionKind::ModifyLife { amount: -1 }).targeting(TargetSelector::Opponent);
        let draw = on_play(ActionKind::DrawCards { count: 1 });
        state.pending.push(PendingEffect::new(hit, BITE, PlayerId::FIRST));
        state.pending.push(PendingEffect::new(draw, BITE, PlayerId::FIRST));

        let next = resolve_pending_effects(&catalog, &state);

        assert!(next.game_over);
        assert_eq!(next.winner, Some(PlayerId::FIRST));
        assert!(next.pending.is_empty());
        // The draw never happened: no deck-out penalty either.
        assert_eq!(next.player(PlayerId::FIRST).life, 20);
    }

    #[test]
    fn test_draw_from_empty_deck_costs_life() {
        let mut state = empty_state();
        draw_cards(&mut state, PlayerId::FIRST, 2);

        assert_eq!(state.player(PlayerId::FIRST).life, 18);
        assert!(state.player(PlayerId::FIRST).hand.is_empty());
    }

    #[test]
    fn test_token_status_and_immunity() {
        let catalog = catalog();
        let mut state = empty_state();
        let mouse = summon(&catalog, &mut state, PlayerId::SECOND, MOUSE);
        let owl = summon(&catalog, &mut state, PlayerId::SECOND, OWL);

        let sleep_all = on_play(ActionKind::AttachStatus { status: Some(SLEEP) })
            .targeting(TargetSelector::EnemyAnimals)
            .lasting(2);
        let next = resolve_effect(&catalog, &state, &sleep_all, BITE, None, PlayerId::FIRST);

        let mouse_statuses = &next.creature(mouse).unwrap().statuses;
        assert_eq!(mouse_statuses.len(), 1);
        assert_eq!(mouse_statuses[0].turns_remaining, Some(2));
        assert!(!mouse_statuses[0].physical);
        assert!(next.creature(owl).unwrap().statuses.is_empty());
        assert!(next
            .log
            .iter()
            .any(|e| matches!(e, GameEvent::StatusBlocked { status, .. } if status == "Sleep")));
    }

    #[test]
    fn test_physical_status_attaches_once() {
        let catalog = catalog();
        let mut state = empty_state();
        let a = summon(&catalog, &mut state, PlayerId::FIRST, MOUSE);
        let b = summon(&catalog, &mut state, PlayerId::FIRST, MOUSE);
        state.in_flight = Some((PlayerId::FIRST, RAGE));

        let attach = on_play(ActionKind::AttachStatus { status: None })
            .targeting(TargetSelector::FriendlyAnimals);
        let next = resolve_effect(&catalog, &state, &attach, RAGE, None, PlayerId::FIRST);

        assert_eq!(next.in_flight, None);
        assert_eq!(next.creature(a).unwrap().atk, 3);
        assert!(next.creature(b).unwrap().statuses.is_empty());
    }

    #[test]
    fn test_unknown_status_is_skipped() {
        let catalog = catalog();
        let mut state = empty_state();
        let mouse = summon(&catalog, &mut state, PlayerId::SECOND, MOUSE);

        let curse = on_play(ActionKind::AttachStatus {
            status: Some(CardId::new(999)),
        });
        let next = resolve_effect(&catalog, &state, &curse, BITE, Some(mouse), PlayerId::FIRST);

        assert!(next.creature(mouse).unwrap().statuses.is_empty());
        assert!(matches!(
            next.log.back(),
            Some(GameEvent::EffectSkipped { source, .. }) if *source == BITE
        ));
    }

    #[test]
    fn test_discard_hand_with_kind_filter() {
        let catalog = catalog();
        let config = MatchConfig::builder().starting_hand(3).build();
        let mut state = GameState::new(&config, Vec::new(), vec![MOUSE, BITE, SLEEP]);

        let scatter = on_play(ActionKind::DiscardHand)
            .targeting(TargetSelector::Opponent)
            .with_filter(EffectFilter::of_kind(CardKind::Animal));
        state = resolve_effect(&catalog, &state, &scatter, BITE, None, PlayerId::FIRST);

        let opponent = state.player(PlayerId::SECOND);
        assert_eq!(opponent.hand.len(), 2);
        assert_eq!(opponent.discard.iter().collect::<Vec<_>>(), vec![&MOUSE]);
        assert!(state.conservation_holds());
    }

    #[test]
    fn test_modifiers_and_freeze() {
        let catalog = catalog();
        let mut state = empty_state();
        let mouse = summon(&catalog, &mut state, PlayerId::FIRST, MOUSE);

        for action in [
            ActionKind::ModifyAtk { amount: 2 },
            ActionKind::ModifyHp { amount: 3 },
            ActionKind::DealDamage { amount: 4 },
            ActionKind::Heal { amount: 10 },
        ] {
            state = resolve_effect(&catalog, &state, &on_play(action), BITE, Some(mouse), PlayerId::FIRST);
        }
        let creature = state.creature(mouse).unwrap();
        assert_eq!(creature.atk, 3);
        assert_eq!((creature.hp, creature.max_hp), (5, 5));

        let snare = on_play(ActionKind::PreventAttack).lasting(2);
        state = resolve_effect(&catalog, &state, &snare, BITE, Some(mouse), PlayerId::SECOND);
        assert_eq!(state.creature(mouse).unwrap().frozen_turns, 2);
    }

    #[test]
    fn test_player_flags() {
        let catalog = catalog();
        let state = empty_state();

        let fog = on_play(ActionKind::PreventDraw).targeting(TargetSelector::Opponent);
        let frenzy = on_play(ActionKind::ExtraAnimalPlay { count: 1 });
        let state = resolve_effect(&catalog, &state, &fog, BITE, None, PlayerId::FIRST);
        let state = resolve_effect(&catalog, &state, &frenzy, BITE, None, PlayerId::FIRST);

        assert!(!state.player(PlayerId::SECOND).can_draw);
        assert_eq!(state.player(PlayerId::FIRST).extra_animal_plays, 1);
    }
}
