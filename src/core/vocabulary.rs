//! Fixed action vocabularies.
//!
//! An `ActionVocabulary` is a bijection between a dense index space
//! `[0, len)` and a game's native move type. Games build it once from an
//! enumeration of every move their notation can express, independent of any
//! position, so the action-space size never changes. Legality is handled
//! separately by masking (see `ActionMask`).
//!
//! ```
//! use rust_azgame::core::{ActionId, ActionVocabulary};
//!
//! let vocab = ActionVocabulary::new(vec!["rock", "paper", "scissors"]).unwrap();
//! assert_eq!(vocab.len(), 3);
//! assert_eq!(vocab.encode(&"paper").unwrap(), ActionId::new(1));
//! assert_eq!(vocab.decode(ActionId::new(2)).unwrap(), &"scissors");
//! ```

use std::fmt::Display;
use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

use super::action::ActionId;
use super::error::{GameError, Result};

/// Bijective mapping between action indices and native moves.
///
/// Each move also carries its notation token (its `Display` form), which is
/// the key used when matching moves against the vocabulary.
#[derive(Clone, Debug)]
pub struct ActionVocabulary<T> {
    moves: Vec<T>,
    tokens: Vec<String>,
    by_move: FxHashMap<T, ActionId>,
    by_token: FxHashMap<String, ActionId>,
}

impl<T> ActionVocabulary<T>
where
    T: Clone + Eq + Hash + Display,
{
    /// Build a vocabulary from an ordered enumeration of moves.
    ///
    /// Index `i` is assigned to the `i`-th move. Fails if the enumeration is
    /// empty, too large for `ActionId`, or repeats a token.
    pub fn new(moves: impl IntoIterator<Item = T>) -> Result<Self> {
        let moves: Vec<T> = moves.into_iter().collect();
        if moves.is_empty() {
            return Err(GameError::EmptyVocabulary);
        }
        if moves.len() > usize::from(u16::MAX) + 1 {
            return Err(GameError::VocabularyTooLarge(moves.len()));
        }

        let mut tokens = Vec::with_capacity(moves.len());
        let mut by_move = FxHashMap::default();
        let mut by_token = FxHashMap::default();
        by_move.reserve(moves.len());
        by_token.reserve(moves.len());

        for (i, mv) in moves.iter().enumerate() {
            let id = ActionId::new(i as u16);
            let token = mv.to_string();
            if by_token.insert(token.clone(), id).is_some() {
                return Err(GameError::DuplicateToken(token));
            }
            by_move.insert(mv.clone(), id);
            tokens.push(token);
        }

        debug!("built action vocabulary with {} entries", moves.len());

        Ok(Self {
            moves,
            tokens,
            by_move,
            by_token,
        })
    }

    /// Index of a native move.
    ///
    /// A move the rules engine produced but the vocabulary lacks is a
    /// configuration defect and reported as `UnknownAction`.
    pub fn encode(&self, mv: &T) -> Result<ActionId> {
        self.by_move
            .get(mv)
            .copied()
            .ok_or_else(|| GameError::UnknownAction(mv.to_string()))
    }

    /// Native move at an index.
    pub fn decode(&self, id: ActionId) -> Result<&T> {
        self.moves.get(id.index()).ok_or(GameError::ActionOutOfRange {
            action: id,
            size: self.moves.len(),
        })
    }

    /// Index of a notation token.
    pub fn encode_token(&self, token: &str) -> Result<ActionId> {
        self.by_token
            .get(token)
            .copied()
            .ok_or_else(|| GameError::UnknownAction(token.to_string()))
    }

    /// Notation token at an index.
    pub fn token(&self, id: ActionId) -> Result<&str> {
        self.tokens
            .get(id.index())
            .map(String::as_str)
            .ok_or(GameError::ActionOutOfRange {
                action: id,
                size: self.tokens.len(),
            })
    }

    /// Whether the move is part of the vocabulary.
    #[must_use]
    pub fn contains(&self, mv: &T) -> bool {
        self.by_move.contains_key(mv)
    }

    /// Number of entries (the action-space size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false for a constructed vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate over `(index, move)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &T)> {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, mv)| (ActionId::new(i as u16), mv))
    }

    /// All tokens in index order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_bijection() {
        let vocab = ActionVocabulary::new(vec!["a", "b", "c"]).unwrap();

        for (id, mv) in vocab.iter() {
            assert_eq!(vocab.encode(mv).unwrap(), id);
            assert_eq!(vocab.decode(id).unwrap(), mv);
            assert_eq!(vocab.encode_token(vocab.token(id).unwrap()).unwrap(), id);
        }
    }

    #[test]
    fn test_vocabulary_unknown_action() {
        let vocab = ActionVocabulary::new(vec![1u8, 2, 3]).unwrap();

        let err = vocab.encode(&9).unwrap_err();
        assert_eq!(err, GameError::UnknownAction("9".to_string()));
        assert!(err.is_fatal());
        assert!(vocab.encode_token("10").is_err());
    }

    #[test]
    fn test_vocabulary_out_of_range() {
        let vocab = ActionVocabulary::new(vec![1u8, 2]).unwrap();

        assert!(matches!(
            vocab.decode(ActionId::new(2)),
            Err(GameError::ActionOutOfRange { size: 2, .. })
        ));
        assert!(vocab.token(ActionId::new(5)).is_err());
    }

    #[test]
    fn test_vocabulary_rejects_duplicates() {
        let err = ActionVocabulary::new(vec!["x", "y", "x"]).unwrap_err();
        assert_eq!(err, GameError::DuplicateToken("x".to_string()));
    }

    #[test]
    fn test_vocabulary_rejects_empty() {
        let err = ActionVocabulary::<u8>::new(Vec::new()).unwrap_err();
        assert_eq!(err, GameError::EmptyVocabulary);
    }

    #[test]
    fn test_vocabulary_contains() {
        let vocab = ActionVocabulary::new(vec![10u32, 20]).unwrap();
        assert!(vocab.contains(&10));
        assert!(!vocab.contains(&30));
        assert_eq!(vocab.len(), 2);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.tokens(), &["10".to_string(), "20".to_string()]);
    }
}
