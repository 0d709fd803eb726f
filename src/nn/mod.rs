//! Neural network integration.
//!
//! This module fixes the shapes exchanged with an external policy/value
//! network for AlphaZero-style search.
//!
//! ## Overview
//!
//! - **Traits**: `PolicyValueNetwork`
//! - **Encoding**: `StateEncoder` trait, `ZeroEncoder` for tests
//! - **Masking**: `masked_policy` restricts a network policy to legal actions
//! - **Baseline**: `UniformPolicyZeroValue` for testing
//!
//! ## Usage
//!
//! ```rust
//! use rust_azgame::games::chess::ChessEnv;
//! use rust_azgame::nn::{masked_policy, PolicyValueNetwork, UniformPolicyZeroValue};
//! use rust_azgame::rules::Environment;
//!
//! let env = ChessEnv::new().unwrap();
//! let state = env.initial_state();
//! let network = UniformPolicyZeroValue::new(env.action_space_size(), env.player_count());
//!
//! let (policy, _values) = network.predict(&env.observation(&state).unwrap());
//! let priors = masked_policy(&policy, &env.legal_action_mask(&state).unwrap()).unwrap();
//! assert!((priors.iter().sum::<f32>() - 1.0).abs() < 1e-4);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{StateEncoder, ZeroEncoder};
pub use traits::{masked_policy, EncodedState, PolicyValueNetwork, UniformPolicyZeroValue};
