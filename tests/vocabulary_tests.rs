//! Action vocabulary tests.
//!
//! The chess vocabulary must be a bijection between indices, moves and
//! UCI tokens, and must cover every move the rules engine can produce.

use std::collections::HashSet;

use rust_azgame::core::{ActionId, ActionVocabulary, GameError};
use rust_azgame::games::chess::{uci_moves, uci_vocabulary, ACTION_SPACE_SIZE};

// =============================================================================
// Bijection
// =============================================================================

#[test]
fn test_full_bijection() {
    let vocab = uci_vocabulary().unwrap();

    for i in 0..ACTION_SPACE_SIZE {
        let id = ActionId::new(i as u16);
        let mv = vocab.decode(id).unwrap();
        assert_eq!(vocab.encode(mv).unwrap(), id);

        let token = vocab.token(id).unwrap();
        assert_eq!(vocab.encode_token(token).unwrap(), id);
        assert_eq!(mv.to_string(), token);
    }
}

#[test]
fn test_tokens_unique() {
    let vocab = uci_vocabulary().unwrap();
    let unique: HashSet<&String> = vocab.tokens().iter().collect();

    assert_eq!(unique.len(), ACTION_SPACE_SIZE);
}

#[test]
fn test_enumeration_is_deterministic() {
    assert_eq!(uci_moves(), uci_moves());
}

#[test]
fn test_promotion_block() {
    let vocab = uci_vocabulary().unwrap();
    let promotions = vocab
        .tokens()
        .iter()
        .filter(|t| t.len() == 5)
        .count();

    assert_eq!(promotions, 176);
    assert!(vocab.tokens()[..ACTION_SPACE_SIZE - 176]
        .iter()
        .all(|t| t.len() == 4));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_out_of_range() {
    let vocab = uci_vocabulary().unwrap();
    let id = ActionId::new(ACTION_SPACE_SIZE as u16);

    assert!(matches!(
        vocab.decode(id),
        Err(GameError::ActionOutOfRange { size: 1968, .. })
    ));
    assert!(vocab.token(id).is_err());
}

#[test]
fn test_generic_vocabulary() {
    let vocab = ActionVocabulary::new(vec!["rock", "paper", "scissors"]).unwrap();

    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.encode(&"paper").unwrap(), ActionId::new(1));
    assert!(matches!(
        ActionVocabulary::new(vec!["rock", "rock"]),
        Err(GameError::DuplicateToken(_))
    ));
}
