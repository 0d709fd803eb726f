//! Error taxonomy for game-state adapters.
//!
//! All errors are local and synchronous: they surface to the immediate
//! caller and are never retried here. A failed `apply` leaves the state it
//! was called on untouched.

use thiserror::Error;

use super::action::ActionId;

/// Errors raised by vocabularies, environments and encoders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The rules engine produced a move the vocabulary cannot encode.
    /// The vocabulary is too small for the game: a configuration defect.
    #[error("unknown action token `{0}`: not in the action vocabulary")]
    UnknownAction(String),

    /// An action index outside `[0, action_space_size)`.
    #[error("action {action} is outside the action space of size {size}")]
    ActionOutOfRange { action: ActionId, size: usize },

    /// `apply` was called with an action whose mask bit is 0.
    #[error("illegal action {action} (`{token}`) in position {position}")]
    IllegalAction {
        action: ActionId,
        token: String,
        position: String,
    },

    /// An observation or mask disagrees with the declared constants.
    #[error("{what} shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A mask entry other than 0 or 1.
    #[error("mask entry {index} is {value}, expected 0 or 1")]
    InvalidMaskEntry { index: usize, value: u8 },

    /// A position string the rules engine could not parse.
    #[error("invalid position `{0}`")]
    InvalidPosition(String),

    /// The same token appeared twice while building a vocabulary.
    #[error("duplicate token `{0}` in action vocabulary")]
    DuplicateToken(String),

    /// A vocabulary must contain at least one token.
    #[error("action vocabulary is empty")]
    EmptyVocabulary,

    /// A vocabulary larger than `ActionId` can address.
    #[error("action vocabulary has {0} tokens, more than an ActionId can index")]
    VocabularyTooLarge(usize),
}

impl GameError {
    /// Whether the error indicates an adapter or configuration defect rather
    /// than a bad request from the caller.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            GameError::UnknownAction(_)
            | GameError::ShapeMismatch { .. }
            | GameError::DuplicateToken(_)
            | GameError::EmptyVocabulary
            | GameError::VocabularyTooLarge(_) => true,
            GameError::ActionOutOfRange { .. }
            | GameError::IllegalAction { .. }
            | GameError::InvalidMaskEntry { .. }
            | GameError::InvalidPosition(_) => false,
        }
    }
}

/// Convenience Result type for game-state operations.
pub type Result<T> = std::result::Result<T, GameError>;
