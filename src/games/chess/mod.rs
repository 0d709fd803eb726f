//! Chess adapter.
//!
//! Standard chess behind the `Environment` contract:
//! - 1968 UCI move tokens as the action space
//! - `(19, 8, 8)` observations in absolute orientation
//! - checkmate and stalemate detection; other draw rules are not adjudicated
//!
//! Move generation and legality come from the `chess` crate.

mod encoder;
mod env;
mod state;
mod vocabulary;

pub use encoder::{piece_plane, planes, ChessEncoder, BOARD_SIZE, NUM_CHANNELS, OBSERVATION_SHAPE};
pub use env::{ChessEnv, ChessStatus};
pub use state::{en_passant_target, player_for_color, ChessState};
pub use vocabulary::{uci_moves, uci_vocabulary, ACTION_SPACE_SIZE};
