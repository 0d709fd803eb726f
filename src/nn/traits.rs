//! Neural network seam: observation tensors and the evaluator interface.
//!
//! The evaluator itself lives outside this crate. These types fix the shapes
//! it exchanges with environments: an observation tensor in, a policy over
//! the full action space plus per-player values out.

use serde::{Deserialize, Serialize};

use crate::core::{ActionMask, GameError, Result};

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [channels, height, width] or [features]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create an encoded state from untrusted data, failing with
    /// `ShapeMismatch` when the length disagrees with the shape.
    pub fn try_new(tensor: Vec<f32>, shape: Vec<usize>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if tensor.len() != expected {
            return Err(GameError::ShapeMismatch {
                what: "tensor",
                expected: vec![expected],
                actual: vec![tensor.len()],
            });
        }
        Ok(Self { tensor, shape })
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Get element of a rank-3 tensor at `[channel][row][col]`.
    #[must_use]
    pub fn at(&self, channel: usize, row: usize, col: usize) -> Option<f32> {
        match self.shape.as_slice() {
            &[c, r, f] if channel < c && row < r && col < f => {
                self.get((channel * r + row) * f + col)
            }
            _ => None,
        }
    }

    /// Fail with `ShapeMismatch` unless the declared shape is `expected` and
    /// the data length agrees with it.
    pub fn check_shape(&self, expected: &[usize]) -> Result<()> {
        let expected_len: usize = expected.iter().product();
        if self.shape != expected || self.tensor.len() != expected_len {
            return Err(GameError::ShapeMismatch {
                what: "observation",
                expected: expected.to_vec(),
                actual: self.shape.clone(),
            });
        }
        Ok(())
    }
}

/// Combined policy-value network.
///
/// The policy covers the whole action space; only entries whose mask bit is
/// set carry meaning. Values are one per player.
pub trait PolicyValueNetwork: Send + Sync {
    /// Predict both policy and value for the given state.
    ///
    /// Returns (policy_probs, player_values).
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, Vec<f32>);

    /// Batch prediction for multiple states (optional optimization).
    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<(Vec<f32>, Vec<f32>)> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// Combined uniform policy and zero value network (baseline for testing).
#[derive(Clone, Debug, Default)]
pub struct UniformPolicyZeroValue {
    action_space_size: usize,
    player_count: usize,
}

impl UniformPolicyZeroValue {
    /// Create a new baseline network.
    pub fn new(action_space_size: usize, player_count: usize) -> Self {
        Self {
            action_space_size,
            player_count,
        }
    }
}

impl PolicyValueNetwork for UniformPolicyZeroValue {
    fn predict(&self, _encoded: &EncodedState) -> (Vec<f32>, Vec<f32>) {
        let policy = if self.action_space_size == 0 {
            vec![]
        } else {
            let prob = 1.0 / self.action_space_size as f32;
            vec![prob; self.action_space_size]
        };
        let value = vec![0.0; self.player_count];
        (policy, value)
    }
}

/// Restrict a policy to the legal actions of `mask` and renormalise.
///
/// Illegal entries become 0. If the legal entries carry no mass (or are not
/// finite), the result is uniform over the legal actions. An empty mask
/// yields all zeros.
pub fn masked_policy(policy: &[f32], mask: &ActionMask) -> Result<Vec<f32>> {
    mask.check_len(policy.len())?;

    let mut out: Vec<f32> = policy
        .iter()
        .zip(mask.as_slice())
        .map(|(&p, &m)| if m == 1 { p.max(0.0) } else { 0.0 })
        .collect();

    let sum: f32 = out.iter().sum();
    if sum > 0.0 && sum.is_finite() {
        out.iter_mut().for_each(|p| *p /= sum);
    } else {
        let legal = mask.count();
        if legal > 0 {
            let prob = 1.0 / legal as f32;
            for (p, &m) in out.iter_mut().zip(mask.as_slice()) {
                *p = if m == 1 { prob } else { 0.0 };
            }
        }
    }

    Ok(out)
}
