//! Game bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::ActionId;
use crate::games::chess::{ChessEnv, ChessState};
use crate::rules::Environment;

use super::py_core::{PyGameConfig, PyPlayerId};
use super::py_nn::PyEncodedState;

fn action_id(action: usize, size: usize) -> PyResult<ActionId> {
    u16::try_from(action)
        .ok()
        .filter(|&a| usize::from(a) < size)
        .map(ActionId::new)
        .ok_or_else(|| {
            PyValueError::new_err(format!(
                "action {} out of range for action space of size {}",
                action, size
            ))
        })
}

/// Python wrapper for the chess environment and one game in progress.
#[pyclass(name = "ChessGame")]
#[derive(Clone)]
pub struct PyChessGame {
    env: ChessEnv,
    state: ChessState,
}

#[pymethods]
impl PyChessGame {
    /// Create a game at the starting position, or at `fen` if given.
    #[new]
    #[pyo3(signature = (fen = None, config = None))]
    fn new(fen: Option<&str>, config: Option<PyGameConfig>) -> PyResult<Self> {
        let env = ChessEnv::with_config(config.unwrap_or_default().0)?;
        let state = match fen {
            Some(fen) => ChessState::from_fen(fen)?,
            None => env.initial_state(),
        };
        Ok(Self { env, state })
    }

    /// Size of the action space.
    fn action_size(&self) -> usize {
        self.env.action_space_size()
    }

    /// Observation shape `(channels, rows, cols)`.
    fn observation_size(&self) -> (usize, usize, usize) {
        let [c, r, f] = self.env.observation_shape();
        (c, r, f)
    }

    fn num_players(&self) -> usize {
        self.env.player_count()
    }

    fn has_draw(&self) -> bool {
        self.env.supports_draw()
    }

    /// Legal-move mask as a uint8 array of length `action_size()`.
    fn valid_moves<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let mask = self.env.legal_action_mask(&self.state)?;
        Ok(PyArray1::from_slice_bound(py, mask.as_slice()))
    }

    /// Apply an action index in place.
    fn play_action(&mut self, action: usize) -> PyResult<()> {
        let action = action_id(action, self.env.action_space_size())?;
        self.env.apply(&mut self.state, action)?;
        Ok(())
    }

    /// Outcome as `[white_win, black_win, draw]`.
    fn win_state<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, &self.env.result(&self.state).as_array())
    }

    fn is_terminal(&self) -> bool {
        self.env.is_terminal(&self.state)
    }

    /// Observation as a float32 array of shape `observation_size()`.
    fn observation<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let obs = self.env.observation(&self.state)?;
        let [c, r, f] = self.env.observation_shape();
        PyArray1::from_vec_bound(py, obs.tensor)
            .reshape([c, r, f])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Observation wrapped as an EncodedState.
    fn encoded_state(&self) -> PyResult<PyEncodedState> {
        Ok(PyEncodedState(self.env.observation(&self.state)?))
    }

    /// Index of a UCI token such as "e2e4".
    fn action_for_token(&self, token: &str) -> PyResult<usize> {
        Ok(self.env.action_for_token(token)?.index())
    }

    /// UCI token of an action index.
    fn token_for_action(&self, action: usize) -> PyResult<String> {
        let action = action_id(action, self.env.action_space_size())?;
        Ok(self.env.token_for_action(action)?.to_string())
    }

    /// Independent copy of this game.
    #[pyo3(name = "clone")]
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.env.equals(&self.state, &other.state)
    }

    /// Half-moves played.
    fn turns(&self) -> u32 {
        self.state.ply()
    }

    /// Player to move.
    fn player(&self) -> PyPlayerId {
        PyPlayerId(self.env.current_player(&self.state))
    }

    fn fen(&self) -> String {
        self.state.fen()
    }

    /// Board diagram, rank 8 first.
    fn render(&self) -> String {
        self.state.to_string()
    }

    fn __repr__(&self) -> String {
        format!("ChessGame(fen={:?})", self.state.fen())
    }
}
