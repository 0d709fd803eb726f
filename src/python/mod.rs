//! Python bindings for the rust-azgame game adapters.
//!
//! This module exposes the chess environment to Python training loops.
//!
//! # Quick Start
//!
//! ```python
//! import rust_azgame as az
//!
//! game = az.ChessGame()
//! mask = game.valid_moves()          # uint8, length 1968
//! game.play_action(game.action_for_token("e2e4"))
//! obs = game.observation()           # float32, shape (19, 8, 8)
//! print(game.win_state())            # [0, 0, 0] while ongoing
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;
mod py_nn;

pub use py_core::*;
pub use py_games::*;
pub use py_nn::*;

/// rust-azgame: game-state adapters for AlphaZero-style training.
///
/// This module provides:
/// - The chess environment with fixed action and observation shapes
/// - Observation tensors and the uniform baseline network
/// - Legal-move masking for network policies
#[pymodule]
fn rust_azgame(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyGameConfig>()?;

    // Neural network types
    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyUniformPolicy>()?;
    m.add_function(wrap_pyfunction!(py_masked_policy, m)?)?;

    // Games
    m.add_class::<PyChessGame>()?;

    Ok(())
}
