//! Command replay.
//!
//! A match is fully determined by its decks, its config (including the
//! seed) and the commands applied to it. `replay` rebuilds a state from
//! those inputs; replaying `state.history` reproduces `state` exactly.

use super::phases::{create_game_state, next_phase, play_card};
use crate::cards::{CardCatalog, CardId};
use crate::core::{Command, GameState, MatchConfig};
use crate::error::EngineError;

/// Apply one command to a state.
#[must_use]
pub fn apply_command(catalog: &CardCatalog, state: &GameState, command: &Command) -> GameState {
    match *command {
        Command::PlayCard {
            player,
            card,
            target,
        } => play_card(catalog, state, player, card, target),
        Command::NextPhase => next_phase(catalog, state),
    }
}

/// Rebuild a match from its inputs.
///
/// ## Errors
///
/// Whatever [`create_game_state`] rejects.
pub fn replay(
    catalog: &CardCatalog,
    deck_a: Vec<CardId>,
    deck_b: Vec<CardId>,
    config: &MatchConfig,
    commands: impl IntoIterator<Item = Command>,
) -> Result<GameState, EngineError> {
    let initial = create_game_state(catalog, deck_a, deck_b, config)?;
    Ok(commands
        .into_iter()
        .fold(initial, |state, command| apply_command(catalog, &state, &command)))
}
