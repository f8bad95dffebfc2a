//! Turn state machine and public entry points.
//!
//! A turn runs `draw → main → attack → end`, then the other player's `draw`.
//! `next_phase` performs the current phase's work and moves to the next
//! phase:
//!
//! - **draw**: draw one card (empty deck costs life), queue and drain
//!   turn-start effects
//! - **main**: nothing automatic; plays happen through `play_card`
//! - **attack**: every eligible creature, in board order, hits the opponent
//! - **end**: status ticks, end-of-turn triggers, cleanup, hand the turn over
//!
//! Every entry point takes the state by reference and returns the next
//! state. Once `game_over` is set, all of them return the state unchanged.

use tracing::{debug, info, warn};

use super::validator::can_play_card;
use crate::cards::{BoardCreature, CardCatalog, CardId, CardKind};
use crate::core::{Command, EntityId, GameEvent, GameState, MatchConfig, Phase, PlayerId};
use crate::effects::{
    apply_entry, card_name, deal_damage, destroy_creature, destroy_dead, drain_queue, draw_cards,
    enqueue_trigger, report_skipped, ActionKind, TargetSelector, Trigger,
};
use crate::error::EngineError;
use crate::stack::PendingEffect;
use crate::status;

/// Start a match: validate decks and config, shuffle, deal opening hands.
///
/// The first player is left at the start of their draw phase; call
/// [`next_phase`] to perform the draw.
///
/// ## Errors
///
/// `InvalidConfig` for unusable rules, `InvalidDeck` if a deck names a card
/// the catalog does not know.
pub fn create_game_state(
    catalog: &CardCatalog,
    deck_a: Vec<CardId>,
    deck_b: Vec<CardId>,
    config: &MatchConfig,
) -> Result<GameState, EngineError> {
    config.validate()?;
    for (player, deck) in [(PlayerId::FIRST, &deck_a), (PlayerId::SECOND, &deck_b)] {
        if let Some(unknown) = deck.iter().find(|&&card| !catalog.contains(card)) {
            return Err(EngineError::InvalidDeck(format!(
                "{player}'s deck contains {unknown}, which is not in the catalog"
            )));
        }
    }

    let state = GameState::new(config, deck_a, deck_b);
    info!(seed = config.seed, mode = ?config.mode, first = %config.first_player, "match created");
    Ok(state)
}

/// Play a card from `player`'s hand.
///
/// Returns the state unchanged if the card is unknown, not in hand, or
/// rejected by [`can_play_card`]. Otherwise the card's `on_play` effects are
/// queued and drained before returning:
///
/// - **animal**: enters the board as a new creature
/// - **action**: resolves, then goes to the discard
/// - **status**: attaches to its target via `attach_status`; if nothing
///   took it, it goes to the discard
#[must_use]
pub fn play_card(
    catalog: &CardCatalog,
    state: &GameState,
    player: PlayerId,
    card: CardId,
    target: Option<EntityId>,
) -> GameState {
    let Some(def) = catalog.get(card) else {
        warn!(%player, %card, "play of unknown card ignored");
        return state.clone();
    };
    if !can_play_card(state, player, def) || !state.player(player).hand_contains(card) {
        debug!(%player, card = %def.name, "play rejected");
        return state.clone();
    }

    let mut next = state.clone();
    next.history.push_back(Command::play(player, card, target));
    next.player_mut(player).take_from_hand(card);
    debug!(%player, card = %def.name, ?target, "card played");
    next.record(GameEvent::CardPlayed {
        player,
        card,
        name: def.name.clone(),
        target,
    });

    match def.kind {
        CardKind::Animal => {
            let instance = next.allocate_instance();
            let creature = BoardCreature::new(
                instance,
                card,
                player,
                def.base_atk(),
                def.base_hp(),
                next.rules.attacks_per_turn,
            );
            let side = next.player_mut(player);
            side.board.push_back(creature);
            side.animals_played += 1;
            if let Err(err) = enqueue_trigger(catalog, &mut next, instance, Trigger::OnPlay, target) {
                report_skipped(&mut next, card, &err);
            }
        }
        CardKind::Action | CardKind::Status => {
            next.in_flight = Some((player, card));
            next.pending.extend(
                def.effects_for(Trigger::OnPlay)
                    .map(|effect| PendingEffect::new(effect.clone(), card, player).at(target)),
            );
        }
    }

    drain_queue(catalog, &mut next);

    if let Some((owner, leftover)) = next.in_flight.take() {
        next.player_mut(owner).discard.push_back(leftover);
    }
    next
}

/// Run the current phase and advance to the next one.
#[must_use]
pub fn next_phase(catalog: &CardCatalog, state: &GameState) -> GameState {
    if state.game_over {
        return state.clone();
    }

    let mut next = state.clone();
    next.history.push_back(Command::NextPhase);

    match next.phase {
        Phase::Draw => run_draw(catalog, &mut next),
        Phase::Main => {}
        Phase::Attack => run_attack(catalog, &mut next),
        Phase::End => run_end(catalog, &mut next),
    }

    if !next.game_over {
        let phase = next.phase.next();
        next.phase = phase;
        debug!(player = %next.current_player, turn = next.turn_number, %phase, "phase changed");
        next.record(GameEvent::PhaseChanged {
            player: next.current_player,
            turn: next.turn_number,
            phase,
        });
    }
    next
}

/// Turn-start or turn-end effects of every status the player hosts, aimed
/// at the host.
fn status_triggers(
    catalog: &CardCatalog,
    state: &GameState,
    player: PlayerId,
    trigger: Trigger,
) -> Vec<PendingEffect> {
    let side = state.player(player);
    let player_hosted = side
        .statuses
        .iter()
        .map(|s| (s, EntityId::player(player)));
    let creature_hosted = side
        .board
        .iter()
        .flat_map(|c| c.statuses.iter().map(move |s| (s, c.instance_id)));

    player_hosted
        .chain(creature_hosted)
        .filter_map(|(attached, host)| catalog.get(attached.card).map(|def| (def, attached, host)))
        .flat_map(|(def, attached, host)| {
            def.effects_for(trigger).map(move |effect| {
                PendingEffect::new(effect.clone(), attached.card, attached.owner).at(Some(host))
            })
        })
        .collect()
}

fn enqueue_for_board(catalog: &CardCatalog, state: &mut GameState, player: PlayerId, trigger: Trigger) {
    for instance in state.creature_ids(player) {
        if let Err(err) = enqueue_trigger(catalog, state, instance, trigger, None) {
            let card = state.creature(instance).map_or(CardId::new(0), |c| c.card_id);
            report_skipped(state, card, &err);
        }
    }
}

fn run_draw(catalog: &CardCatalog, state: &mut GameState) {
    let player = state.current_player;
    let blocked = status::draw_blocked(catalog, state, player);

    let side = state.player_mut(player);
    if !side.can_draw || blocked {
        side.can_draw = true;
        debug!(%player, "draw skipped");
        state.record(GameEvent::DrawSkipped { player });
    } else {
        draw_cards(state, player, 1);
    }
    if state.game_over {
        return;
    }

    enqueue_for_board(catalog, state, player, Trigger::OnTurnStart);
    let status_effects = status_triggers(catalog, state, player, Trigger::OnTurnStart);
    state.pending.extend(status_effects);
    drain_queue(catalog, state);
}

fn run_attack(catalog: &CardCatalog, state: &mut GameState) {
    let attacker = state.current_player;
    let defender = EntityId::player(attacker.opponent());

    for instance in state.creature_ids(attacker) {
        loop {
            if state.game_over {
                return;
            }
            // The creature may have died to an earlier attack's cascade.
            let Some(creature) = state.creature(instance) else {
                break;
            };
            if creature.attacks_exhausted() || !status::can_attack(catalog, creature, &state.rules) {
                break;
            }

            let damage = creature.atk;
            let name = card_name(catalog, creature.card_id);
            if let Some(creature) = state.creature_mut(instance) {
                creature.attacks_made += 1;
            }
            debug!(%attacker, %instance, %name, damage, "creature attacks");
            deal_damage(state, &name, defender, damage);
            if state.game_over {
                return;
            }

            if let Err(err) = enqueue_trigger(catalog, state, instance, Trigger::OnAttack, Some(defender)) {
                let card = state.creature(instance).map_or(CardId::new(0), |c| c.card_id);
                report_skipped(state, card, &err);
            }
            drain_queue(catalog, state);
        }
    }
}

fn run_end(catalog: &CardCatalog, state: &mut GameState) {
    let player = state.current_player;

    // Recurring status effects land immediately.
    for pending in status_triggers(catalog, state, player, Trigger::OnTurnEnd) {
        apply_entry(catalog, state, &pending);
        if state.game_over {
            return;
        }
    }
    status::tick_durations(catalog, state, player);

    // Self-destructing creatures go first so their death notices queue
    // ahead of other end-of-turn effects.
    let mut deferred = Vec::new();
    for instance in state.creature_ids(player) {
        let Some(creature) = state.creature(instance) else {
            continue;
        };
        let (card, owner) = (creature.card_id, creature.owner);
        let Some(def) = catalog.get(card) else {
            report_skipped(state, card, &EngineError::UnknownCard(card));
            continue;
        };

        let mut self_destruct = false;
        for effect in def.effects_for(Trigger::OnTurnEnd) {
            if effect.action == ActionKind::Destroy && effect.target_selector() == TargetSelector::SelfAnimal {
                self_destruct = true;
            } else {
                deferred.push(PendingEffect::new(effect.clone(), card, owner).from_instance(instance));
            }
        }
        if self_destruct {
            if let Err(err) = destroy_creature(catalog, state, instance) {
                report_skipped(state, card, &err);
            }
        }
    }
    state.pending.extend(deferred);

    status::recompute_all(catalog, state);
    destroy_dead(catalog, state);
    drain_queue(catalog, state);
    if state.game_over {
        return;
    }

    state.player_mut(player).reset_turn();
    state.current_player = player.opponent();
    state.turn_number += 1;
}
