//! Play validation.
//!
//! `can_play_card` is the single gate for playing a card. `play_card` routes
//! every attempt through it and treats a `false` as a silent no-op.

use crate::cards::{CardDefinition, CardKind};
use crate::core::{GameState, Phase, PlayerId, PLAYER_COUNT};

/// May `player` play `card` right now?
///
/// ## Rules
///
/// - The game is still running, it is `player`'s turn, and the phase is
///   `main`.
/// - Animals additionally need an unused animal play this turn and a free
///   board slot.
/// - Actions and statuses have no per-turn limit.
///
/// Whether the card is actually in hand is checked by `play_card`.
#[must_use]
pub fn can_play_card(state: &GameState, player: PlayerId, card: &CardDefinition) -> bool {
    if player.index() >= PLAYER_COUNT
        || state.game_over
        || player != state.current_player
        || state.phase != Phase::Main
    {
        return false;
    }
    match card.kind {
        CardKind::Animal => {
            let side = state.player(player);
            side.animal_plays_left() > 0 && !side.board_is_full(&state.rules)
        }
        CardKind::Action | CardKind::Status => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BoardCreature, CardId, StatusTag};
    use crate::core::{EntityId, MatchConfig};

    fn main_phase() -> GameState {
        let mut state = GameState::new(&MatchConfig::default(), Vec::new(), Vec::new());
        state.phase = Phase::Main;
        state
    }

    fn lion() -> CardDefinition {
        CardDefinition::animal(CardId::new(1), "Lion", 4, 3)
    }

    #[test]
    fn test_turn_and_phase_gate() {
        let mut state = main_phase();
        let bite = CardDefinition::action(CardId::new(20), "Bite");

        assert!(can_play_card(&state, PlayerId::FIRST, &bite));
        assert!(!can_play_card(&state, PlayerId::SECOND, &bite));

        for phase in [Phase::Draw, Phase::Attack, Phase::End] {
            state.phase = phase;
            assert!(!can_play_card(&state, PlayerId::FIRST, &bite));
        }

        state.phase = Phase::Main;
        state.game_over = true;
        assert!(!can_play_card(&state, PlayerId::FIRST, &bite));
    }

    #[test]
    fn test_one_animal_per_turn() {
        let mut state = main_phase();
        let sleep = CardDefinition::status(CardId::new(40), "Sleep", StatusTag::PreventAttack);

        assert!(can_play_card(&state, PlayerId::FIRST, &lion()));
        state.player_mut(PlayerId::FIRST).animals_played = 1;
        assert!(!can_play_card(&state, PlayerId::FIRST, &lion()));
        assert!(can_play_card(&state, PlayerId::FIRST, &sleep));

        state.player_mut(PlayerId::FIRST).extra_animal_plays = 1;
        assert!(can_play_card(&state, PlayerId::FIRST, &lion()));
    }

    #[test]
    fn test_board_capacity() {
        let mut state = main_phase();
        for i in 0..5 {
            state.player_mut(PlayerId::FIRST).board.push_back(BoardCreature::new(
                EntityId(10 + i),
                CardId::new(1),
                PlayerId::FIRST,
                4,
                3,
                1,
            ));
        }
        state.player_mut(PlayerId::FIRST).extra_animal_plays = 3;

        assert!(!can_play_card(&state, PlayerId::FIRST, &lion()));
    }
}
