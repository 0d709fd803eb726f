//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ActionValidation, EqualityMode, GameConfig, GameError, PlayerId};

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a new player ID.
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Get the raw ID value.
    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for GameConfig.
///
/// `equality` is "structural" or "transposition"; `validation` is
/// "debug_only", "always" or "never".
#[pyclass(name = "GameConfig")]
#[derive(Clone, Debug, Default)]
pub struct PyGameConfig(pub GameConfig);

fn parse_equality(name: &str) -> PyResult<EqualityMode> {
    match name {
        "structural" => Ok(EqualityMode::Structural),
        "transposition" => Ok(EqualityMode::Transposition),
        other => Err(PyValueError::new_err(format!(
            "unknown equality mode: {}",
            other
        ))),
    }
}

fn parse_validation(name: &str) -> PyResult<ActionValidation> {
    match name {
        "debug_only" => Ok(ActionValidation::DebugOnly),
        "always" => Ok(ActionValidation::Always),
        "never" => Ok(ActionValidation::Never),
        other => Err(PyValueError::new_err(format!(
            "unknown validation mode: {}",
            other
        ))),
    }
}

#[pymethods]
impl PyGameConfig {
    #[new]
    #[pyo3(signature = (equality = "structural", validation = "debug_only"))]
    fn new(equality: &str, validation: &str) -> PyResult<Self> {
        Ok(Self(
            GameConfig::new()
                .with_equality(parse_equality(equality)?)
                .with_validation(parse_validation(validation)?),
        ))
    }

    fn __repr__(&self) -> String {
        format!(
            "GameConfig(equality={:?}, validation={:?})",
            self.0.equality, self.0.validation
        )
    }
}
