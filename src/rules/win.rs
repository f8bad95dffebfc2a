//! Win condition checking.
//!
//! Called after every life mutation. Once a player is at or below 0 life the
//! game-over latch is set and every loop that resolves effects or attacks
//! stops at its next check.

use tracing::info;

use crate::core::{GameEvent, GameState, PlayerId};

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(PlayerId),
    /// Both players ran out of life at once.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self == GameResult::Winner(player)
    }
}

/// The result of `state`, or `None` while the match is still running.
#[must_use]
pub fn game_result(state: &GameState) -> Option<GameResult> {
    if !state.game_over {
        return None;
    }
    Some(state.winner.map_or(GameResult::Draw, GameResult::Winner))
}

/// Latch game-over if a player has run out of life.
///
/// Returns `true` when the game is over (now or already). If both players
/// are out at once the game ends with no winner.
pub fn check_win_condition(state: &mut GameState) -> bool {
    if state.game_over {
        return true;
    }

    let dead: Vec<PlayerId> = PlayerId::all()
        .filter(|&p| state.player(p).life <= 0)
        .collect();

    let winner = match dead.as_slice() {
        [] => return false,
        [loser] => Some(loser.opponent()),
        _ => None,
    };

    state.game_over = true;
    state.winner = winner;
    state.pending.clear();
    match winner {
        Some(winner) => info!(%winner, turn = state.turn_number, "game over"),
        None => info!(turn = state.turn_number, "game over, draw"),
    }
    state.record(GameEvent::GameOver { winner });
    true
}
