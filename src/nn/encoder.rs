//! State encoding for neural network input.
//!
//! Transforms game state into tensor representations suitable for neural networks.

use crate::nn::traits::EncodedState;

/// Encodes game state into tensors for neural network input.
///
/// Encoders are pure: the same state always produces the same tensor, and
/// every tensor has `output_shape()` regardless of the state.
pub trait StateEncoder<S>: Send + Sync {
    /// Encode the game state.
    fn encode(&self, state: &S) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Number of scalars in one encoded state.
    fn output_len(&self) -> usize {
        self.output_shape().iter().product()
    }
}

/// Encoder that produces a fixed-size zero tensor (for testing).
#[derive(Clone, Debug)]
pub struct ZeroEncoder {
    shape: Vec<usize>,
}

impl ZeroEncoder {
    /// Create a new zero encoder.
    pub fn new(shape: Vec<usize>) -> Self {
        Self { shape }
    }
}

impl<S> StateEncoder<S> for ZeroEncoder {
    fn encode(&self, _state: &S) -> EncodedState {
        EncodedState::zeros(self.shape.clone())
    }

    fn output_shape(&self) -> Vec<usize> {
        self.shape.clone()
    }
}
