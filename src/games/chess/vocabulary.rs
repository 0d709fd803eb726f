//! UCI move vocabulary.
//!
//! Enumerates every move expressible in UCI long algebraic notation whose
//! shape a chess piece can make: queen-line and knight moves between any two
//! squares, plus pawn promotions onto the back ranks. That covers castling
//! (the king's two-square move) and every promotion piece. The table is
//! built once per process and shared by every environment and state.

use ::chess::{ChessMove, File, Piece, Rank, Square};
use once_cell::sync::Lazy;

use crate::core::{ActionVocabulary, GameError, Result};

/// Size of the chess action space.
pub const ACTION_SPACE_SIZE: usize = 1968;

/// Knight jumps as (file, rank) offsets.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (2, 1),
    (1, 2),
];

/// Promotion pieces in token order.
const PROMOTIONS: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

static UCI_VOCABULARY: Lazy<Result<ActionVocabulary<ChessMove>>> =
    Lazy::new(|| ActionVocabulary::new(uci_moves()));

/// The shared chess vocabulary.
///
/// Fails only if the enumeration is inconsistent, which would make every
/// chess environment unusable.
pub fn uci_vocabulary() -> Result<&'static ActionVocabulary<ChessMove>> {
    let vocab = UCI_VOCABULARY.as_ref().map_err(Clone::clone)?;
    if vocab.len() != ACTION_SPACE_SIZE {
        return Err(GameError::ShapeMismatch {
            what: "action vocabulary",
            expected: vec![ACTION_SPACE_SIZE],
            actual: vec![vocab.len()],
        });
    }
    Ok(vocab)
}

fn square(file: i8, rank: i8) -> Option<Square> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(Square::make_square(
            Rank::from_index(rank as usize),
            File::from_index(file as usize),
        ))
    } else {
        None
    }
}

/// Every vocabulary move in index order.
///
/// From-squares are visited file-major (a1, a2, ..., a8, b1, ...). For each,
/// destinations follow the rank, the file, both diagonals and the knight
/// jumps. Promotion tokens come last, grouped by file and piece.
pub fn uci_moves() -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(ACTION_SPACE_SIZE);

    for f1 in 0..8i8 {
        for r1 in 0..8i8 {
            let Some(from) = square(f1, r1) else {
                continue;
            };

            let destinations = (0..8)
                .map(|t| (t, r1))
                .chain((0..8).map(|t| (f1, t)))
                .chain((-7..8).map(|t| (f1 + t, r1 + t)))
                .chain((-7..8).map(|t| (f1 + t, r1 - t)))
                .chain(KNIGHT_JUMPS.iter().map(|&(df, dr)| (f1 + df, r1 + dr)));

            for (f2, r2) in destinations {
                if (f2, r2) == (f1, r1) {
                    continue;
                }
                if let Some(to) = square(f2, r2) {
                    moves.push(ChessMove::new(from, to, None));
                }
            }
        }
    }

    // Black promotes from rank 2 to rank 1, White from rank 7 to rank 8.
    for file in 0..8i8 {
        for piece in PROMOTIONS {
            for df in [0, -1, 1] {
                let target = file + df;
                let pairs = [
                    (square(file, 1), square(target, 0)),
                    (square(file, 6), square(target, 7)),
                ];
                for (from, to) in pairs {
                    if let (Some(from), Some(to)) = (from, to) {
                        moves.push(ChessMove::new(from, to, Some(piece)));
                    }
                }
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(uci_moves().len(), ACTION_SPACE_SIZE);
        assert_eq!(uci_vocabulary().unwrap().len(), ACTION_SPACE_SIZE);
    }

    #[test]
    fn test_vocabulary_is_shared() {
        let a = uci_vocabulary().unwrap();
        let b = uci_vocabulary().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_first_tokens() {
        let vocab = uci_vocabulary().unwrap();
        let tokens = vocab.tokens();

        // a1 along the first rank, then up the a-file
        assert_eq!(&tokens[..3], &["a1b1", "a1c1", "a1d1"]);
        assert_eq!(tokens[7], "a1a2");
    }

    #[test]
    fn test_promotion_tokens() {
        let vocab = uci_vocabulary().unwrap();

        let first_promotion = ACTION_SPACE_SIZE - 176;
        assert_eq!(vocab.tokens()[first_promotion], "a2a1q");
        assert_eq!(vocab.tokens()[first_promotion + 1], "a7a8q");
        assert_eq!(vocab.tokens()[ACTION_SPACE_SIZE - 1], "h7g8n");

        for token in ["e7e8q", "e7d8n", "b2a1r", "g2h1b"] {
            assert!(vocab.encode_token(token).is_ok(), "missing {}", token);
        }
        assert!(vocab.encode_token("a7b8k").is_err());
        assert!(vocab.encode_token("a7c8q").is_err());
    }

    #[test]
    fn test_special_moves_present() {
        let vocab = uci_vocabulary().unwrap();

        for token in ["e1g1", "e1c1", "e8g8", "e8c8", "g1f3", "b8c6", "e5d6"] {
            let id = vocab.encode_token(token).unwrap();
            let mv = vocab.decode(id).unwrap();
            assert_eq!(mv.to_string(), token);
            assert!(vocab.contains(mv));
        }
    }

    #[test]
    fn test_knight_moves_count() {
        let knight_like = uci_moves()
            .into_iter()
            .filter(|mv| {
                let df = (mv.get_source().get_file().to_index() as i32
                    - mv.get_dest().get_file().to_index() as i32)
                    .abs();
                let dr = (mv.get_source().get_rank().to_index() as i32
                    - mv.get_dest().get_rank().to_index() as i32)
                    .abs();
                (df, dr) == (1, 2) || (df, dr) == (2, 1)
            })
            .count();

        assert_eq!(knight_like, 336);
    }
}
