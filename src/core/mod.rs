//! Core types: players, actions, vocabularies, masks, outcomes, configuration, errors.
//!
//! Everything here is game-agnostic. Concrete games build on these types
//! in `games`.

pub mod action;
pub mod config;
pub mod error;
pub mod mask;
pub mod outcome;
pub mod player;
pub mod vocabulary;

pub use action::{ActionId, ActionRecord};
pub use config::{ActionValidation, EqualityMode, GameConfig};
pub use error::{GameError, Result};
pub use mask::ActionMask;
pub use outcome::{GameResult, ResultVector};
pub use player::PlayerId;
pub use vocabulary::ActionVocabulary;
