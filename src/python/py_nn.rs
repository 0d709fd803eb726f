//! Neural network type bindings for Python.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::ActionMask;
use crate::nn::{masked_policy, EncodedState, PolicyValueNetwork, UniformPolicyZeroValue};

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    /// Create a new encoded state from tensor data and shape.
    #[new]
    fn new(tensor: Vec<f32>, shape: Vec<usize>) -> PyResult<Self> {
        Ok(Self(EncodedState::try_new(tensor, shape)?))
    }

    /// Get the tensor shape.
    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Convert tensor to numpy array (flat).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?}, len={})", self.0.shape, self.0.len())
    }
}

/// Uniform policy baseline (for testing).
#[pyclass(name = "UniformPolicy")]
#[derive(Clone)]
pub struct PyUniformPolicy(UniformPolicyZeroValue);

#[pymethods]
impl PyUniformPolicy {
    #[new]
    #[pyo3(signature = (action_space_size, player_count = 2))]
    fn new(action_space_size: usize, player_count: usize) -> Self {
        Self(UniformPolicyZeroValue::new(action_space_size, player_count))
    }

    /// Get uniform policy and zero values.
    fn predict(&self, encoded: &PyEncodedState) -> (Vec<f32>, Vec<f32>) {
        self.0.predict(&encoded.0)
    }
}

/// Restrict a policy to the legal entries of a mask and renormalise.
#[pyfunction]
#[pyo3(name = "masked_policy")]
pub fn py_masked_policy<'py>(
    py: Python<'py>,
    policy: PyReadonlyArray1<'py, f32>,
    mask: PyReadonlyArray1<'py, u8>,
) -> PyResult<Bound<'py, PyArray1<f32>>> {
    let mask = ActionMask::try_from_bits(mask.as_slice()?.to_vec())?;
    let priors = masked_policy(policy.as_slice()?, &mask)?;
    Ok(PyArray1::from_vec_bound(py, priors))
}
