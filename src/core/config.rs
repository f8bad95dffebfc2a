//! Match configuration.
//!
//! A match is configured once at creation:
//! - `MatchRules`: numeric rule constants (life, hand size, capacities)
//! - `GameMode`: who sits in the second seat
//! - `seed`: the injectable source of all randomness
//!
//! Configuration is plain serde data so it can come from JSON as easily as
//! from the builder.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::EngineError;

/// Who controls the second seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two human players.
    #[default]
    Pvp,
    /// The second seat is driven by an [`Agent`](crate::rules::Agent).
    VsAi,
}

/// Largest board any match may be configured with.
pub const MAX_BOARD_CAPACITY: usize = 5;

/// Animal plays each turn before extra grants. Not configurable.
pub const ANIMALS_PER_TURN: u32 = 1;

/// Numeric rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchRules {
    /// Life each player starts with.
    pub starting_life: i64,
    /// Cards dealt to each player before the first draw phase.
    pub starting_hand: usize,
    /// Maximum creatures on one board, at most `MAX_BOARD_CAPACITY`.
    pub board_capacity: usize,
    /// Life lost when a draw is attempted from an empty deck.
    pub deck_out_penalty: i64,
    /// Attacks each creature may make per attack phase.
    pub attacks_per_turn: u32,
    /// Creatures cannot attack on the turn they were played.
    pub summoning_sickness: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            starting_life: 20,
            starting_hand: 5,
            board_capacity: MAX_BOARD_CAPACITY,
            deck_out_penalty: 1,
            attacks_per_turn: 1,
            summoning_sickness: false,
        }
    }
}

/// Complete configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for deck shuffles and random targeting.
    pub seed: u64,
    /// Seat arrangement.
    pub mode: GameMode,
    /// Seat that takes the first turn.
    pub first_player: PlayerId,
    /// Rule constants.
    pub rules: MatchRules,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            mode: GameMode::default(),
            first_player: PlayerId::FIRST,
            rules: MatchRules::default(),
        }
    }
}

impl MatchConfig {
    /// Start a builder with default values.
    #[must_use]
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json).map_err(EngineError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), EngineError> {
        let rules = &self.rules;
        if rules.starting_life <= 0 {
            return Err(EngineError::InvalidConfig(
                "starting_life must be positive".to_string(),
            ));
        }
        if rules.board_capacity == 0 || rules.board_capacity > MAX_BOARD_CAPACITY {
            return Err(EngineError::InvalidConfig(format!(
                "board_capacity must be between 1 and {MAX_BOARD_CAPACITY}"
            )));
        }
        if self.first_player.index() > 1 {
            return Err(EngineError::InvalidConfig(
                "first_player must be 0 or 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`MatchConfig`].
#[derive(Clone, Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.config.first_player = player;
        self
    }

    pub fn starting_life(mut self, life: i64) -> Self {
        self.config.rules.starting_life = life;
        self
    }

    pub fn starting_hand(mut self, size: usize) -> Self {
        self.config.rules.starting_hand = size;
        self
    }

    pub fn board_capacity(mut self, capacity: usize) -> Self {
        self.config.rules.board_capacity = capacity;
        self
    }

    pub fn summoning_sickness(mut self, enabled: bool) -> Self {
        self.config.rules.summoning_sickness = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> MatchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.rules.starting_life, 20);
        assert_eq!(config.rules.board_capacity, 5);
        assert_eq!(config.mode, GameMode::Pvp);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::builder()
            .seed(7)
            .mode(GameMode::VsAi)
            .starting_life(10)
            .starting_hand(3)
            .build();

        assert_eq!(config.seed, 7);
        assert_eq!(config.mode, GameMode::VsAi);
        assert_eq!(config.rules.starting_life, 10);
        assert_eq!(config.rules.starting_hand, 3);
        assert_eq!(config.rules.board_capacity, 5);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = MatchConfig::from_json(r#"{"seed": 99, "mode": "vs_ai", "rules": {"starting_hand": 2}}"#)
            .unwrap();

        assert_eq!(config.seed, 99);
        assert_eq!(config.mode, GameMode::VsAi);
        assert_eq!(config.rules.starting_hand, 2);
        assert_eq!(config.rules.starting_life, 20);
    }

    #[test]
    fn test_from_json_rejects_bad_rules() {
        let result = MatchConfig::from_json(r#"{"rules": {"board_capacity": 0}}"#);
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));

        let result = MatchConfig::from_json(r#"{"rules": {"board_capacity": 8}}"#);
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
        assert!(MatchConfig::builder().board_capacity(6).build().validate().is_err());
        assert!(MatchConfig::builder().board_capacity(3).build().validate().is_ok());

        // The per-turn animal limit is fixed, not a rule knob.
        let result = MatchConfig::from_json(r#"{"rules": {"animals_per_turn": 8}}"#);
        assert!(matches!(result, Err(EngineError::ConfigParse(_))));

        let result = MatchConfig::from_json("not json");
        assert!(matches!(result, Err(EngineError::ConfigParse(_))));
    }
}
