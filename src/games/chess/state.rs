//! Chess game state.
//!
//! Wraps a rules-engine board with the bookkeeping the environment needs:
//! player to move, ply counter, halfmove clock and the applied actions.
//!
//! The board is a plain value, so cloning a state copies the position and
//! never aliases it. The action history is an `im` vector: clones share its
//! storage, but it is immutable, so mutating a clone cannot leak back.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use ::chess::{Board, Color, File, Piece, Rank, Square};
use im::Vector;

use crate::core::{ActionId, ActionRecord, GameError, PlayerId, Result};

/// Player index for a rules-engine color. White moves first and is player 0.
#[must_use]
pub fn player_for_color(color: Color) -> PlayerId {
    match color {
        Color::White => PlayerId::new(0),
        Color::Black => PlayerId::new(1),
    }
}

/// Square a pawn may capture onto en passant, as written in FEN.
///
/// The rules engine reports the pawn that just advanced two squares; the
/// target is the square it skipped.
#[must_use]
pub fn en_passant_target(board: &Board) -> Option<Square> {
    let pawn = board.en_passant()?;
    match board.side_to_move() {
        Color::White => pawn.up(),
        Color::Black => pawn.down(),
    }
}

/// A chess position plus turn bookkeeping.
#[derive(Clone)]
pub struct ChessState {
    board: Board,
    player: PlayerId,
    ply: u32,
    halfmove_clock: u32,
    history: Vector<ActionRecord>,
}

impl ChessState {
    /// The standard starting position.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            board: Board::default(),
            player: PlayerId::new(0),
            ply: 0,
            halfmove_clock: 0,
            history: Vector::new(),
        }
    }

    /// Parse a FEN string.
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// 0 and 1. The ply counter is derived from the fullmove number and the
    /// side to move.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let invalid = || GameError::InvalidPosition(fen.to_string());

        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 || fields.len() > 6 {
            return Err(invalid());
        }
        // The rules engine keeps no move counters; hand it placeholder ones.
        let board = Board::from_str(&format!("{} 0 1", fields[..4].join(" ")))
            .map_err(|_| invalid())?;

        let halfmove_clock = match fields.get(4) {
            Some(field) => field.parse::<u32>().map_err(|_| invalid())?,
            None => 0,
        };
        let fullmove = match fields.get(5) {
            Some(field) => field.parse::<u32>().map_err(|_| invalid())?.max(1),
            None => 1,
        };

        let player = player_for_color(board.side_to_move());
        let ply = (fullmove - 1)
            .checked_mul(2)
            .and_then(|n| n.checked_add(player.index() as u32))
            .ok_or_else(invalid)?;

        Ok(Self {
            board,
            player,
            ply,
            halfmove_clock,
            history: Vector::new(),
        })
    }

    /// The rules-engine position.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Rules-engine color to move.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Half-moves played since the start of the game.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Half-moves since the last capture or pawn move.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Fullmove number as written in FEN (starts at 1).
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.ply / 2 + 1
    }

    /// Actions applied to this state since it was created.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    /// Full six-field FEN.
    #[must_use]
    pub fn fen(&self) -> String {
        let board = self.board.to_string();
        let fields: Vec<&str> = board.split_whitespace().take(3).collect();
        let en_passant = match en_passant_target(&self.board) {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };
        format!(
            "{} {} {} {}",
            fields.join(" "),
            en_passant,
            self.halfmove_clock,
            self.fullmove_number()
        )
    }

    /// Hash of position and player to move, ignoring the ply counter.
    ///
    /// Equal for transpositions; used with `EqualityMode::Transposition`.
    #[must_use]
    pub fn transposition_key(&self) -> u64 {
        self.board.get_hash() ^ u64::from(self.player.0).rotate_left(63)
    }

    /// Same position and player to move, whatever the ply.
    #[must_use]
    pub fn same_position(&self, other: &Self) -> bool {
        self.board == other.board && self.player == other.player
    }

    /// Install the successor position computed by the environment.
    ///
    /// `irreversible` is true for captures and pawn moves, which reset the
    /// halfmove clock.
    pub(crate) fn commit(&mut self, board: Board, irreversible: bool, action: ActionId) {
        self.history
            .push_back(ActionRecord::new(self.player, action, self.ply));
        self.board = board;
        self.player = player_for_color(board.side_to_move());
        self.ply += 1;
        self.halfmove_clock = if irreversible {
            0
        } else {
            self.halfmove_clock + 1
        };
    }
}

impl Default for ChessState {
    fn default() -> Self {
        Self::initial()
    }
}

impl PartialEq for ChessState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.player == other.player
            && self.ply == other.ply
            && self.halfmove_clock == other.halfmove_clock
    }
}

impl Eq for ChessState {}

impl Hash for ChessState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.get_hash().hash(state);
        self.player.hash(state);
        self.ply.hash(state);
        self.halfmove_clock.hash(state);
    }
}

impl fmt::Debug for ChessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChessState")
            .field("fen", &self.fen())
            .field("player", &self.player)
            .field("ply", &self.ply)
            .field("history_len", &self.history.len())
            .finish()
    }
}

fn piece_symbol(piece: Piece, color: Color) -> char {
    let symbol = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => symbol.to_ascii_uppercase(),
        Color::Black => symbol,
    }
}

/// Eight-line diagram, rank 8 first, `.` for empty squares.
impl fmt::Display for ChessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .map(|file| {
                    let sq = Square::make_square(Rank::from_index(rank), File::from_index(file));
                    match (self.board.piece_on(sq), self.board.color_on(sq)) {
                        (Some(piece), Some(color)) => piece_symbol(piece, color).to_string(),
                        _ => ".".to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_initial_state() {
        let state = ChessState::initial();

        assert_eq!(state.player(), PlayerId::new(0));
        assert_eq!(state.ply(), 0);
        assert_eq!(state.halfmove_clock(), 0);
        assert_eq!(state.fullmove_number(), 1);
        assert!(state.history().is_empty());
        assert!(!state.in_check());
        assert_eq!(state.fen(), START_FEN);
    }

    #[test]
    fn test_from_fen_matches_initial() {
        let parsed = ChessState::from_fen(START_FEN).unwrap();
        assert_eq!(parsed, ChessState::initial());
    }

    #[test]
    fn test_from_fen_counters() {
        let state =
            ChessState::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2")
                .unwrap();

        assert_eq!(state.player(), PlayerId::new(1));
        assert_eq!(state.ply(), 3);
        assert_eq!(state.halfmove_clock(), 1);
        assert_eq!(state.fullmove_number(), 2);
        assert!(state.fen().ends_with(" b KQkq - 1 2"));
    }

    #[test]
    fn test_from_fen_without_counters() {
        let state = ChessState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - -").unwrap();
        assert_eq!(state.ply(), 1);
        assert_eq!(state.halfmove_clock(), 0);
    }

    #[test]
    fn test_from_fen_invalid() {
        for fen in ["", "not a fen", "8/8/8/8/8/8/8/8 w - - x 1"] {
            assert!(matches!(
                ChessState::from_fen(fen),
                Err(GameError::InvalidPosition(_))
            ));
        }
    }

    #[test]
    fn test_from_fen_fullmove_overflow() {
        for fen in [
            "7k/8/8/8/8/8/8/K7 w - - 0 4294967295",
            "7k/8/8/8/8/8/8/K7 b - - 0 2147483649",
        ] {
            assert!(matches!(
                ChessState::from_fen(fen),
                Err(GameError::InvalidPosition(_))
            ));
        }

        let last = ChessState::from_fen("7k/8/8/8/8/8/8/K7 b - - 0 2147483648").unwrap();
        assert_eq!(last.ply(), u32::MAX);
    }

    #[test]
    fn test_fen_en_passant_target() {
        let fen = "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let state = ChessState::from_fen(fen).unwrap();

        assert_eq!(state.fen(), fen);
        assert_eq!(en_passant_target(state.board()).map(|sq| sq.to_string()), Some("d6".into()));
        assert_eq!(ChessState::from_fen(&state.fen()).unwrap(), state);
    }

    #[test]
    fn test_fen_black_en_passant_target() {
        let fen = "rnbqkbnr/ppp1pppp/8/8/3pP3/P7/1PPP1PPP/RNBQKBNR b KQkq e3 0 3";
        let state = ChessState::from_fen(fen).unwrap();

        assert_eq!(state.fen(), fen);
    }

    #[test]
    fn test_equality_includes_ply() {
        let a = ChessState::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 10").unwrap();
        let b = ChessState::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 11").unwrap();

        assert_ne!(a, b);
        assert!(a.same_position(&b));
        assert_eq!(a.transposition_key(), b.transposition_key());
    }

    #[test]
    fn test_transposition_key_depends_on_player() {
        let white = ChessState::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let black = ChessState::from_fen("7k/8/8/8/8/8/8/K7 b - - 0 1").unwrap();

        assert!(!white.same_position(&black));
        assert_ne!(white.transposition_key(), black.transposition_key());
    }

    #[test]
    fn test_display_diagram() {
        let diagram = ChessState::initial().to_string();
        let lines: Vec<&str> = diagram.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[3], ". . . . . . . .");
        assert_eq!(lines[7], "R N B Q K B N R");
    }

    #[test]
    fn test_debug_contains_fen() {
        let debug = format!("{:?}", ChessState::initial());
        assert!(debug.contains(START_FEN));
    }
}
