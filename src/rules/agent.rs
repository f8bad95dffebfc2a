//! Boundary for automated players.
//!
//! An `Agent` reads the state and proposes moves; it never touches state
//! itself. The driver (`run_agent_main_phase`) feeds its proposals through
//! `play_card`, so an agent is held to exactly the rules a human is.

use rustc_hash::FxHashSet;
use tracing::warn;

use super::phases::{next_phase, play_card};
use super::validator::can_play_card;
use crate::cards::{CardCatalog, CardId};
use crate::core::{EntityId, GameMode, GameRng, GameState, Phase, PlayerId};
use crate::effects::{TargetSelector, Trigger};

/// One legal play: a card from hand and, if it takes one, a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayOption {
    pub card: CardId,
    pub target: Option<EntityId>,
}

/// What an agent wants to do next in its main phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentMove {
    Play {
        card: CardId,
        target: Option<EntityId>,
    },
    /// No further plays this turn.
    EndMain,
}

impl From<PlayOption> for AgentMove {
    fn from(option: PlayOption) -> Self {
        AgentMove::Play {
            card: option.card,
            target: option.target,
        }
    }
}

/// Automated decision maker for one seat.
pub trait Agent {
    fn decide(&mut self, catalog: &CardCatalog, state: &GameState, player: PlayerId) -> AgentMove;
}

/// Is this seat driven by an agent in the state's game mode?
#[must_use]
pub fn is_agent_seat(state: &GameState, player: PlayerId) -> bool {
    state.mode == GameMode::VsAi && player == PlayerId::SECOND
}

/// Every legal (card, target) pair for `player`, in hand order.
///
/// Cards whose `on_play` effects take an explicit target get one option per
/// player and creature in play; duplicates in hand are listed once.
#[must_use]
pub fn legal_plays(catalog: &CardCatalog, state: &GameState, player: PlayerId) -> Vec<PlayOption> {
    let mut seen = FxHashSet::default();
    let mut options = Vec::new();

    let targets: Vec<EntityId> = PlayerId::all()
        .map(EntityId::player)
        .chain(state.creatures().map(|c| c.instance_id))
        .collect();

    for &card in state.player(player).hand.iter() {
        if !seen.insert(card) {
            continue;
        }
        let Some(def) = catalog.get(card) else {
            continue;
        };
        if !can_play_card(state, player, def) {
            continue;
        }

        let targeted = def
            .effects_for(Trigger::OnPlay)
            .any(|e| e.target_selector() == TargetSelector::Any);
        if targeted {
            options.extend(targets.iter().map(|&target| PlayOption {
                card,
                target: Some(target),
            }));
        } else {
            options.push(PlayOption { card, target: None });
        }
    }
    options
}

/// Let an agent play out the current main phase, then advance to attack.
///
/// Stops after `max_plays` plays, when the agent ends the phase, or when it
/// proposes a play the rules reject. Returns the state unchanged if it is
/// not a main phase.
#[must_use]
pub fn run_agent_main_phase(
    catalog: &CardCatalog,
    state: &GameState,
    agent: &mut dyn Agent,
    max_plays: usize,
) -> GameState {
    if state.game_over || state.phase != Phase::Main {
        return state.clone();
    }

    let player = state.current_player;
    let mut current = state.clone();
    for _ in 0..max_plays {
        let AgentMove::Play { card, target } = agent.decide(catalog, &current, player) else {
            break;
        };
        let next = play_card(catalog, &current, player, card, target);
        if next.history.len() == current.history.len() {
            warn!(%player, %card, "agent proposed a rejected play");
            break;
        }
        current = next;
        if current.game_over {
            return current;
        }
    }
    next_phase(catalog, &current)
}

/// Play a whole turn for the current player: draw, agent main phase,
/// attack, end.
#[must_use]
pub fn run_agent_turn(
    catalog: &CardCatalog,
    state: &GameState,
    agent: &mut dyn Agent,
    max_plays: usize,
) -> GameState {
    let mut current = state.clone();
    if current.phase == Phase::Draw {
        current = next_phase(catalog, &current);
    }
    current = run_agent_main_phase(catalog, &current, agent, max_plays);
    while !current.game_over && current.phase != Phase::Draw {
        current = next_phase(catalog, &current);
    }
    current
}

/// Always plays the first legal option.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalAgent;

impl Agent for FirstLegalAgent {
    fn decide(&mut self, catalog: &CardCatalog, state: &GameState, player: PlayerId) -> AgentMove {
        legal_plays(catalog, state, player)
            .first()
            .map_or(AgentMove::EndMain, |&option| option.into())
    }
}

/// Picks uniformly among the legal options and ending the phase.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn decide(&mut self, catalog: &CardCatalog, state: &GameState, player: PlayerId) -> AgentMove {
        let options = legal_plays(catalog, state, player);
        match self.rng.gen_index(options.len() + 1) {
            Some(i) if i < options.len() => options[i].into(),
            _ => AgentMove::EndMain,
        }
    }
}
