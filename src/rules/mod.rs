//! Match rules.
//!
//! - `phases`: match setup, `play_card`, and the draw/main/attack/end cycle
//! - `validator`: `can_play_card`
//! - `win`: the game-over latch
//! - `replay`: rebuild a match from its command history
//! - `agent`: the seam automated players plug into
//!
//! Every public operation takes a `&GameState` and returns a new one. The
//! input is never modified, so callers can keep old states around for undo
//! or search.

mod agent;
mod phases;
mod replay;
mod validator;
mod win;

pub use agent::{
    is_agent_seat, legal_plays, run_agent_main_phase, run_agent_turn, Agent, AgentMove, FirstLegalAgent,
    PlayOption, RandomAgent,
};
pub use phases::{create_game_state, next_phase, play_card};
pub use replay::{apply_command, replay};
pub use validator::can_play_card;
pub use win::{check_win_condition, game_result, GameResult};
