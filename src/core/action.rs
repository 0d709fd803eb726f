//! Action identifiers.
//!
//! An `ActionId` is a position in a game's action vocabulary: the flat index
//! the neural evaluator's policy vector is laid out against. The meaning of
//! an index is fixed for the lifetime of the process, so statistics keyed by
//! `ActionId` stay valid across every cloned state of a search tree.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Index into an action vocabulary, in `[0, action_space_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u16);

impl ActionId {
    /// Create a new action ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the index as `usize` for slice addressing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<ActionId> for usize {
    fn from(id: ActionId) -> usize {
        id.index()
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A recorded action with the context it was taken in.
///
/// Used for replay and debugging; never part of state equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: ActionId,

    /// Ply counter before the action was applied.
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: ActionId, ply: u32) -> Self {
        Self { player, action, ply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_id_index() {
        let id = ActionId::new(1967);
        assert_eq!(id.index(), 1967);
        assert_eq!(usize::from(id), 1967);
        assert_eq!(id.to_string(), "#1967");
    }

    #[test]
    fn test_action_id_ordering() {
        assert!(ActionId::new(3) < ActionId::new(4));
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::new(1), ActionId::new(42), 7);

        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.action, ActionId::new(42));
        assert_eq!(record.ply, 7);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(0), ActionId::new(12), 0);
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, back);
    }
}
