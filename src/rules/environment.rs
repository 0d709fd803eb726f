//! The game-state contract.
//!
//! Every game a search engine can drive implements `Environment`. The
//! search engine only ever talks to this trait:
//! - ask for the legal-action mask
//! - pick an action and apply it to a clone to get a child state
//! - ask for the result and the observation at each node
//!
//! ## Implementation Notes
//!
//! - `action_space_size` and `observation_shape` are constants of the game
//! - `apply` must be deterministic and must leave the state untouched on error
//! - `result` is all zero until the game is over
//! - clones must not share mutable position data with their source

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionId, ActionMask, GameResult, PlayerId, Result, ResultVector};
use crate::nn::EncodedState;

/// Static description of a game, as reported by its environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Number of players.
    pub player_count: usize,

    /// Size of the fixed action vocabulary (length of masks and policies).
    pub action_space_size: usize,

    /// Observation tensor shape `(channels, rows, cols)`.
    pub observation_shape: [usize; 3],

    /// Whether the game can end in a draw.
    pub supports_draw: bool,

    /// Whether every draw condition of the game's rules is detected.
    pub supports_full_draw_detection: bool,

    /// Whether `symmetries` returns augmented samples beyond the identity.
    pub supports_symmetries: bool,
}

/// Game-state contract consumed by search engines.
pub trait Environment: Send + Sync {
    /// Game state. Cloning yields an independent state.
    type State: Clone + PartialEq + Send;

    /// The fixed initial position.
    fn initial_state(&self) -> Self::State;

    /// Number of entries in the action vocabulary.
    fn action_space_size(&self) -> usize;

    /// Observation tensor shape `(channels, rows, cols)`.
    fn observation_shape(&self) -> [usize; 3];

    /// Number of players.
    fn player_count(&self) -> usize;

    /// Whether the game can end in a draw.
    fn supports_draw(&self) -> bool;

    /// Whether all of the game's draw conditions are detected by `result`.
    ///
    /// Games that only detect some draws report `false`; such positions are
    /// reported as ongoing and the caller must cap game length itself.
    fn supports_full_draw_detection(&self) -> bool;

    /// Whether `symmetries` produces more than the identity sample.
    fn supports_symmetries(&self) -> bool {
        false
    }

    /// The player to move.
    fn current_player(&self, state: &Self::State) -> PlayerId;

    /// Legal-action mask of length `action_space_size()`.
    fn legal_action_mask(&self, state: &Self::State) -> Result<ActionMask>;

    /// Apply a legal action in place.
    ///
    /// Precondition: the action's mask bit is set. Implementations validate
    /// according to their configuration; on error the state is unchanged.
    fn apply(&self, state: &mut Self::State, action: ActionId) -> Result<()>;

    /// Outcome indicator; all zero while the game is ongoing.
    fn result(&self, state: &Self::State) -> ResultVector;

    /// Observation tensor of shape `observation_shape()`.
    fn observation(&self, state: &Self::State) -> Result<EncodedState>;

    // === Provided Methods ===

    /// Independent copy of a state.
    fn clone_state(&self, state: &Self::State) -> Self::State {
        state.clone()
    }

    /// State equality under the environment's semantics.
    fn equals(&self, a: &Self::State, b: &Self::State) -> bool {
        a == b
    }

    /// Child state reached by `action`, leaving `state` untouched.
    fn apply_cloned(&self, state: &Self::State, action: ActionId) -> Result<Self::State> {
        let mut next = self.clone_state(state);
        self.apply(&mut next, action)?;
        Ok(next)
    }

    /// Legal action indices in ascending order.
    fn legal_actions(&self, state: &Self::State) -> Result<SmallVec<[ActionId; 64]>> {
        Ok(self.legal_action_mask(state)?.to_actions())
    }

    /// Whether the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.result(state).is_terminal()
    }

    /// Typed outcome; `None` while ongoing.
    fn game_result(&self, state: &Self::State) -> Option<GameResult> {
        self.result(state).to_result()
    }

    /// Training samples equivalent to `(observation(state), policy)` under
    /// the game's symmetries. The identity sample always comes first.
    fn symmetries(
        &self,
        state: &Self::State,
        policy: &[f32],
    ) -> Result<Vec<(EncodedState, Vec<f32>)>> {
        Ok(vec![(self.observation(state)?, policy.to_vec())])
    }

    /// Static description of the game.
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            player_count: self.player_count(),
            action_space_size: self.action_space_size(),
            observation_shape: self.observation_shape(),
            supports_draw: self.supports_draw(),
            supports_full_draw_detection: self.supports_full_draw_detection(),
            supports_symmetries: self.supports_symmetries(),
        }
    }
}
