//! Invariants that must hold across whole matches.

use proptest::prelude::*;

use menagerie::rules::{run_agent_turn, RandomAgent};
use menagerie::{
    can_play_card, create_game_state, next_phase, play_card, resolve_pending_effects, CardCatalog, CardId,
    EngineError, GameState, MatchConfig, Phase, PlayerId,
};

fn starter() -> CardCatalog {
    CardCatalog::starter().unwrap()
}

fn id(catalog: &CardCatalog, name: &str) -> CardId {
    catalog.by_name(name).unwrap().id
}

fn main_phase(catalog: &CardCatalog, hand: &[&str], opponent: &[&str]) -> GameState {
    let config = MatchConfig::builder()
        .seed(1)
        .starting_hand(hand.len().max(opponent.len()))
        .build();
    let mut state = create_game_state(
        catalog,
        catalog.deck_from_names(hand).unwrap(),
        catalog.deck_from_names(opponent).unwrap(),
        &config,
    )
    .unwrap();
    state.phase = Phase::Main;
    state
}

// =============================================================================
// Animal limit and board capacity
// =============================================================================

#[test]
fn test_second_animal_same_turn_is_noop() {
    let catalog = starter();
    let state = main_phase(&catalog, &["Lion", "Owl"], &[]);

    let state = play_card(&catalog, &state, PlayerId::FIRST, id(&catalog, "Lion"), None);
    let owl = catalog.by_name("Owl").unwrap();
    assert!(!can_play_card(&state, PlayerId::FIRST, owl));

    let after = play_card(&catalog, &state, PlayerId::FIRST, owl.id, None);
    assert_eq!(after, state);
    assert_eq!(after.player(PlayerId::FIRST).board.len(), 1);
    assert_eq!(after.player(PlayerId::FIRST).hand.len(), 1);
}

#[test]
fn test_board_never_exceeds_capacity() {
    let catalog = starter();
    let names = ["Lion", "Owl", "Wolf", "Gorilla", "Elephant", "Bee", "Frenzy", "Frenzy", "Frenzy", "Frenzy", "Frenzy"];
    let mut state = main_phase(&catalog, &names, &[]);

    for _ in 0..5 {
        state = play_card(&catalog, &state, PlayerId::FIRST, id(&catalog, "Frenzy"), None);
    }
    for name in &names[..6] {
        state = play_card(&catalog, &state, PlayerId::FIRST, id(&catalog, name), None);
    }

    let side = state.player(PlayerId::FIRST);
    assert_eq!(side.board.len(), 5);
    assert_eq!(side.hand.len(), 1);
    assert!(side.animal_plays_left() > 0);
    assert!(state.conservation_holds());
}

#[test]
fn test_board_capacity_cannot_be_raised() {
    let catalog = starter();
    let config = MatchConfig::builder().board_capacity(8).starting_hand(12).build();
    let lions = catalog.deck_from_names(&["Lion"; 6]).unwrap();
    assert!(matches!(
        create_game_state(&catalog, lions, Vec::new(), &config),
        Err(EngineError::InvalidConfig(_))
    ));

    // A state built without validation still stops at five creatures.
    let mut names = vec!["Lion"; 6];
    names.extend(["Frenzy"; 6]);
    let mut state = GameState::new(&config, catalog.deck_from_names(&names).unwrap(), Vec::new());
    state.phase = Phase::Main;
    for name in ["Frenzy"; 6].into_iter().chain(["Lion"; 6]) {
        state = play_card(&catalog, &state, PlayerId::FIRST, id(&catalog, name), None);
    }

    assert_eq!(state.player(PlayerId::FIRST).board.len(), 5);
    assert!(state.conservation_holds());
}

// =============================================================================
// Attack eligibility
// =============================================================================

/// FIRST plays `animal`, SECOND attaches `status` to it, then FIRST attacks.
fn attack_with_status(catalog: &CardCatalog, animal: &str, status: &str) -> (GameState, u32) {
    let mut state = main_phase(catalog, &[animal], &[status]);
    state = play_card(catalog, &state, PlayerId::FIRST, id(catalog, animal), None);
    let creature = state.player(PlayerId::FIRST).board[0].instance_id;

    state.current_player = PlayerId::SECOND;
    state = play_card(catalog, &state, PlayerId::SECOND, id(catalog, status), Some(creature));
    state.current_player = PlayerId::FIRST;

    let state = next_phase(catalog, &next_phase(catalog, &state));
    let attacks = state.creature(creature).unwrap().attacks_made;
    (state, attacks)
}

#[test]
fn test_sleeping_creature_does_not_attack() {
    let catalog = starter();
    let (state, attacks) = attack_with_status(&catalog, "Lion", "Sleep");

    assert_eq!(attacks, 0);
    assert_eq!(state.player(PlayerId::SECOND).life, 20);
}

#[test]
fn test_immunity_by_name_and_tag() {
    let catalog = starter();

    let (state, attacks) = attack_with_status(&catalog, "Owl", "Sleep");
    assert_eq!(attacks, 1);
    assert_eq!(state.player(PlayerId::SECOND).life, 18);
    // Blocked status never attached; the card went to its owner's discard.
    assert_eq!(state.player(PlayerId::SECOND).discard.len(), 1);

    let (state, attacks) = attack_with_status(&catalog, "Elephant", "Sleep");
    assert_eq!(attacks, 1);
    assert_eq!(state.player(PlayerId::SECOND).life, 17);
}

#[test]
fn test_weakness_floors_atk_at_zero() {
    let catalog = starter();
    let (state, attacks) = attack_with_status(&catalog, "Bee", "Weakness");

    assert_eq!(attacks, 1);
    assert_eq!(state.player(PlayerId::SECOND).life, 20);
}

// =============================================================================
// Win latch
// =============================================================================

#[test]
fn test_win_latch_stops_resolution() {
    let catalog = starter();
    let mut state = main_phase(&catalog, &["Bite"], &[]);
    state.player_mut(PlayerId::SECOND).life = 2;

    let state = play_card(
        &catalog,
        &state,
        PlayerId::FIRST,
        id(&catalog, "Bite"),
        Some(menagerie::EntityId::player(PlayerId::SECOND)),
    );

    assert!(state.game_over);
    assert_eq!(state.winner, Some(PlayerId::FIRST));
    assert!(state.pending.is_empty());
    assert!(state.conservation_holds());

    assert_eq!(next_phase(&catalog, &state), state);
    assert_eq!(resolve_pending_effects(&catalog, &state), state);
}

// =============================================================================
// Random matches
// =============================================================================

const POOL: &[&str] = &[
    "Lion", "Elephant", "Turtle", "Bee", "Owl", "Wolf", "Snake", "Mayfly", "Rabbit", "Gorilla", "Bite", "Stampede",
    "Hunt", "Feast", "Drought", "Frenzy", "Scatter", "Forage", "Snare", "Fog", "Growth", "Sleep", "Rage", "Poison",
    "Provoke", "Weakness", "Shell", "Famine",
];

fn deck_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(POOL), 8..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_random_matches_keep_invariants(
        deck_a in deck_strategy(),
        deck_b in deck_strategy(),
        seed in any::<u64>(),
    ) {
        let catalog = starter();
        let config = MatchConfig::builder().seed(seed).build();
        let mut state = create_game_state(
            &catalog,
            catalog.deck_from_names(&deck_a).unwrap(),
            catalog.deck_from_names(&deck_b).unwrap(),
            &config,
        )
        .unwrap();
        let mut agents = [RandomAgent::new(seed), RandomAgent::new(seed.wrapping_add(1))];

        for _ in 0..40 {
            if state.game_over {
                break;
            }
            let turn = state.turn_number;
            let agent = &mut agents[state.current_player.index()];
            state = run_agent_turn(&catalog, &state, agent, 6);

            prop_assert!(state.conservation_holds());
            for player in PlayerId::all() {
                prop_assert!(state.player(player).board.len() <= state.rules.board_capacity);
            }
            prop_assert!(state.game_over || state.turn_number == turn + 1);
        }

        if state.game_over {
            let lost = |p: PlayerId| state.player(p).life <= 0;
            match state.winner {
                Some(winner) => prop_assert!(lost(winner.opponent())),
                None => prop_assert!(PlayerId::all().all(lost)),
            }
        }
    }
}
