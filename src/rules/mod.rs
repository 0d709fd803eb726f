//! The environment contract for game implementations.
//!
//! Games implement `Environment` to define:
//! - The fixed action space and observation shape
//! - Legal actions for each state, as a mask
//! - How actions modify state
//! - Win/draw conditions
//!
//! Search engines call into `Environment` but never interpret
//! game-specific concepts directly.

pub mod environment;

pub use environment::{Capabilities, Environment};
