//! Environment configuration.
//!
//! Behavioural switches an environment is built with. Everything has a
//! default, so `GameConfig::default()` is the normal starting point and
//! partial JSON documents deserialize cleanly.

use serde::{Deserialize, Serialize};

/// How two states are compared for equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityMode {
    /// Position, player to move and ply counter must all match. Different
    /// move orders reaching the same position at the same ply compare equal;
    /// the same position at a different ply does not.
    #[default]
    Structural,

    /// The ply counter is ignored, so transpositions collapse. For search
    /// layers that keep a transposition table.
    Transposition,
}

/// When `apply` checks the action against the legal mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionValidation {
    /// Validate only when `debug_assertions` are enabled.
    #[default]
    DebugOnly,
    /// Always validate.
    Always,
    /// Never validate. An illegal action may corrupt the state.
    Never,
}

impl ActionValidation {
    /// Whether `apply` should validate in this build.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            ActionValidation::DebugOnly => cfg!(debug_assertions),
            ActionValidation::Always => true,
            ActionValidation::Never => false,
        }
    }
}

/// Environment configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// State equality semantics.
    pub equality: EqualityMode,

    /// Action validation policy for `apply`.
    pub validation: ActionValidation,
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the equality mode.
    #[must_use]
    pub fn with_equality(mut self, equality: EqualityMode) -> Self {
        self.equality = equality;
        self
    }

    /// Set the validation policy.
    #[must_use]
    pub fn with_validation(mut self, validation: ActionValidation) -> Self {
        self.validation = validation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.equality, EqualityMode::Structural);
        assert_eq!(config.validation, ActionValidation::DebugOnly);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_equality(EqualityMode::Transposition)
            .with_validation(ActionValidation::Always);

        assert_eq!(config.equality, EqualityMode::Transposition);
        assert_eq!(config.validation, ActionValidation::Always);
    }

    #[test]
    fn test_validation_enabled() {
        assert!(ActionValidation::Always.enabled());
        assert!(!ActionValidation::Never.enabled());
        assert_eq!(ActionValidation::DebugOnly.enabled(), cfg!(debug_assertions));
    }

    #[test]
    fn test_config_partial_json() {
        let config: GameConfig = serde_json::from_str(r#"{"equality": "transposition"}"#).unwrap();
        assert_eq!(config.equality, EqualityMode::Transposition);
        assert_eq!(config.validation, ActionValidation::DebugOnly);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_validation(ActionValidation::Never);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"never\""));

        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
