//! # rust-azgame
//!
//! Game-state adapters for AlphaZero-style tree search.
//!
//! ## Design Principles
//!
//! 1. **Fixed Shapes**: Every game exposes a constant action space and
//!    observation shape, so a network can be sized once.
//!
//! 2. **Masks, Not Lists**: Legality is a 0/1 mask over the whole action
//!    space, indexed by a bijective action vocabulary.
//!
//! 3. **Copy Then Commit**: A rejected action leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: Players, action indices, vocabularies, masks, outcomes, config, errors
//! - `rules`: The `Environment` contract search engines consume
//! - `nn`: Observation tensors, encoders and the policy/value network seam
//! - `games`: Concrete games (chess)
//! - `python`: Python bindings (feature `python`)

pub mod core;
pub mod games;
pub mod nn;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ActionId, ActionMask, ActionRecord, ActionValidation, ActionVocabulary, EqualityMode,
    GameConfig, GameError, GameResult, PlayerId, Result, ResultVector,
};

pub use crate::rules::{Capabilities, Environment};

pub use crate::nn::{
    masked_policy, EncodedState, PolicyValueNetwork, StateEncoder, UniformPolicyZeroValue,
};

pub use crate::games::chess::{ChessEnv, ChessState, ChessStatus};
