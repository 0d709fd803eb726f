//! Chess environment.
//!
//! Maps the open-ended rules engine onto the fixed contract:
//! - legality by intersecting the engine's legal moves with the vocabulary
//! - `apply` computes the successor first and commits only on success
//! - outcomes: checkmate (win for the side that delivered it) and stalemate
//!
//! Repetition, the fifty-move rule and insufficient material are not
//! adjudicated. Such games stay ongoing; callers cap game length.

use ::chess::{BoardStatus, ChessMove, Color, MoveGen, Piece};
use log::{debug, error, log_enabled, trace, warn, Level};

use crate::core::{
    ActionId, ActionMask, ActionVocabulary, EqualityMode, GameConfig, GameError, PlayerId, Result,
    ResultVector,
};
use crate::nn::{EncodedState, StateEncoder};
use crate::rules::Environment;

use super::encoder::{ChessEncoder, OBSERVATION_SHAPE};
use super::state::{player_for_color, ChessState};
use super::vocabulary::{uci_vocabulary, ACTION_SPACE_SIZE};

/// Where a chess game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChessStatus {
    /// Not over (or over by a rule this adapter does not detect).
    Ongoing,
    /// Black is to move and checkmated.
    WhiteCheckmates,
    /// White is to move and checkmated.
    BlackCheckmates,
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

impl ChessStatus {
    /// Whether the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != ChessStatus::Ongoing
    }

    /// Outcome indicator `(white_win, black_win, draw)`.
    #[must_use]
    pub fn result_vector(self) -> ResultVector {
        match self {
            ChessStatus::Ongoing => ResultVector::ONGOING,
            ChessStatus::WhiteCheckmates => ResultVector::win(player_for_color(Color::White)),
            ChessStatus::BlackCheckmates => ResultVector::win(player_for_color(Color::Black)),
            ChessStatus::Stalemate => ResultVector::DRAW,
        }
    }
}

/// Chess implementation of the environment contract.
#[derive(Clone, Debug)]
pub struct ChessEnv {
    config: GameConfig,
    vocabulary: &'static ActionVocabulary<ChessMove>,
    encoder: ChessEncoder,
}

impl ChessEnv {
    /// Environment with the default configuration.
    ///
    /// Fails if the shared move vocabulary could not be built.
    pub fn new() -> Result<Self> {
        Self::with_config(GameConfig::default())
    }

    /// Environment with an explicit configuration.
    pub fn with_config(config: GameConfig) -> Result<Self> {
        let vocabulary = uci_vocabulary().map_err(|e| {
            error!("chess action vocabulary unavailable: {}", e);
            e
        })?;
        Ok(Self {
            config,
            vocabulary,
            encoder: ChessEncoder::new(),
        })
    }

    /// The configuration this environment was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The shared move vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &'static ActionVocabulary<ChessMove> {
        self.vocabulary
    }

    /// Index of a UCI token such as `e2e4` or `e7e8q`.
    pub fn action_for_token(&self, token: &str) -> Result<ActionId> {
        self.vocabulary.encode_token(token)
    }

    /// UCI token of an action index.
    pub fn token_for_action(&self, action: ActionId) -> Result<&'static str> {
        self.vocabulary.token(action)
    }

    /// Index of a rules-engine move.
    pub fn action_for_move(&self, mv: ChessMove) -> Result<ActionId> {
        self.vocabulary.encode(&mv)
    }

    /// Rules-engine move of an action index.
    pub fn move_for_action(&self, action: ActionId) -> Result<ChessMove> {
        self.vocabulary.decode(action).copied()
    }

    /// Apply a sequence of UCI tokens, stopping at the first failure.
    pub fn apply_tokens(&self, state: &mut ChessState, tokens: &[&str]) -> Result<()> {
        for token in tokens {
            let action = self.action_for_token(token)?;
            self.apply(state, action)?;
        }
        Ok(())
    }

    /// Current status of the game.
    #[must_use]
    pub fn status(&self, state: &ChessState) -> ChessStatus {
        match state.board().status() {
            BoardStatus::Ongoing => ChessStatus::Ongoing,
            BoardStatus::Stalemate => ChessStatus::Stalemate,
            BoardStatus::Checkmate => match state.side_to_move() {
                Color::White => ChessStatus::BlackCheckmates,
                Color::Black => ChessStatus::WhiteCheckmates,
            },
        }
    }

    /// Number of legal moves according to the rules engine.
    #[must_use]
    pub fn legal_move_count(&self, state: &ChessState) -> usize {
        MoveGen::new_legal(state.board()).len()
    }
}

impl Environment for ChessEnv {
    type State = ChessState;

    fn initial_state(&self) -> ChessState {
        ChessState::initial()
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }

    fn observation_shape(&self) -> [usize; 3] {
        OBSERVATION_SHAPE
    }

    fn player_count(&self) -> usize {
        2
    }

    fn supports_draw(&self) -> bool {
        true
    }

    fn supports_full_draw_detection(&self) -> bool {
        false
    }

    fn current_player(&self, state: &ChessState) -> PlayerId {
        state.player()
    }

    fn legal_action_mask(&self, state: &ChessState) -> Result<ActionMask> {
        let mut mask = ActionMask::new(self.vocabulary.len());
        let mut legal = 0usize;

        for mv in MoveGen::new_legal(state.board()) {
            let action = self.vocabulary.encode(&mv).map_err(|e| {
                error!(
                    "rules engine move {} has no vocabulary entry in {}",
                    mv,
                    state.fen()
                );
                e
            })?;
            mask.set(action)?;
            legal += 1;
        }

        mask.check_len(ACTION_SPACE_SIZE)?;
        debug_assert_eq!(mask.count(), legal, "vocabulary maps two moves to one index");
        Ok(mask)
    }

    fn apply(&self, state: &mut ChessState, action: ActionId) -> Result<()> {
        let mv = self.move_for_action(action)?;
        let board = state.board();

        if self.config.validation.enabled() && !board.legal(mv) {
            warn!(
                "rejected illegal action {} ({}) at ply {}",
                action,
                mv,
                state.ply()
            );
            return Err(GameError::IllegalAction {
                action,
                token: mv.to_string(),
                position: state.fen(),
            });
        }

        let irreversible = board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            || board.piece_on(mv.get_dest()).is_some();
        let next = board.make_move_new(mv);

        trace!("ply {}: {} plays {}", state.ply(), state.player(), mv);
        state.commit(next, irreversible, action);

        if log_enabled!(Level::Debug) {
            let status = self.status(state);
            if status.is_terminal() {
                debug!("game over at ply {}: {:?}", state.ply(), status);
            }
        }
        Ok(())
    }

    fn result(&self, state: &ChessState) -> ResultVector {
        self.status(state).result_vector()
    }

    fn observation(&self, state: &ChessState) -> Result<EncodedState> {
        let obs = self.encoder.encode(state);
        obs.check_shape(&OBSERVATION_SHAPE)?;
        Ok(obs)
    }

    fn equals(&self, a: &ChessState, b: &ChessState) -> bool {
        match self.config.equality {
            EqualityMode::Structural => a == b,
            EqualityMode::Transposition => a.same_position(b),
        }
    }
}
