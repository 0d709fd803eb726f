//! Legal-action masks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionId;
use super::error::{GameError, Result};

/// Fixed-length indicator vector over an action vocabulary.
///
/// Entry `i` is 1 iff action `i` is legal in the state the mask was computed
/// for. The length always equals the environment's action-space size.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask {
    bits: Vec<u8>,
}

impl ActionMask {
    /// All-zero mask of the given length.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { bits: vec![0; len] }
    }

    /// Build a mask from raw 0/1 entries.
    #[must_use]
    pub fn from_bits(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1), "mask entries must be 0 or 1");
        Self { bits }
    }

    /// Build a mask from untrusted entries, rejecting anything but 0 or 1.
    pub fn try_from_bits(bits: Vec<u8>) -> Result<Self> {
        if let Some((index, &value)) = bits.iter().enumerate().find(|(_, &b)| b > 1) {
            return Err(GameError::InvalidMaskEntry { index, value });
        }
        Ok(Self { bits })
    }

    /// Mark an action legal.
    pub fn set(&mut self, action: ActionId) -> Result<()> {
        let len = self.bits.len();
        let slot = self
            .bits
            .get_mut(action.index())
            .ok_or(GameError::ActionOutOfRange { action, size: len })?;
        *slot = 1;
        Ok(())
    }

    /// Whether an action is legal. Out-of-range actions are never legal.
    #[must_use]
    pub fn is_legal(&self, action: ActionId) -> bool {
        self.bits.get(action.index()).is_some_and(|&b| b == 1)
    }

    /// Number of legal actions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Whether no action is legal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Mask length (the action-space size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Legal action indices in ascending order.
    pub fn legal_actions(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b == 1)
            .map(|(i, _)| ActionId::new(i as u16))
    }

    /// Legal action indices collected inline.
    #[must_use]
    pub fn to_actions(&self) -> SmallVec<[ActionId; 64]> {
        self.legal_actions().collect()
    }

    /// Raw 0/1 entries.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Entries as floats for network input.
    #[must_use]
    pub fn to_f32(&self) -> Vec<f32> {
        self.bits.iter().map(|&b| f32::from(b)).collect()
    }

    /// Fail with `ShapeMismatch` unless the mask has `expected` entries.
    pub fn check_len(&self, expected: usize) -> Result<()> {
        if self.bits.len() != expected {
            return Err(GameError::ShapeMismatch {
                what: "action mask",
                expected: vec![expected],
                actual: vec![self.bits.len()],
            });
        }
        Ok(())
    }
}
