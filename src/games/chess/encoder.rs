//! Observation encoding for chess positions.
//!
//! A position becomes a `(19, 8, 8)` tensor indexed `[channel][rank][file]`
//! with rank 0 = rank 1 and file 0 = the a-file. The orientation is absolute:
//! it does not flip with the side to move, which is carried by its own plane.

use ::chess::{Color, Piece, ALL_COLORS, ALL_PIECES};

use crate::core::Result;
use crate::nn::{EncodedState, StateEncoder};

use super::state::{en_passant_target, ChessState};

/// Number of planes in the observation tensor.
pub const NUM_CHANNELS: usize = 19;

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// Observation tensor shape.
pub const OBSERVATION_SHAPE: [usize; 3] = [NUM_CHANNELS, BOARD_SIZE, BOARD_SIZE];

const PLANE_SIZE: usize = BOARD_SIZE * BOARD_SIZE;

/// Halfmove clock value that saturates its plane.
const HALFMOVE_SCALE: f32 = 100.0;

/// Plane indices for the observation tensor.
pub mod planes {
    /// First piece plane; White pieces occupy 0-5, Black 6-11, each in
    /// pawn, knight, bishop, rook, queen, king order.
    pub const PIECES: usize = 0;
    pub const SIDE_TO_MOVE: usize = 12;
    pub const CASTLING_WK: usize = 13;
    pub const CASTLING_WQ: usize = 14;
    pub const CASTLING_BK: usize = 15;
    pub const CASTLING_BQ: usize = 16;
    pub const EN_PASSANT: usize = 17;
    pub const HALFMOVE: usize = 18;
}

/// Plane holding pieces of `piece` and `color`.
#[must_use]
pub fn piece_plane(color: Color, piece: Piece) -> usize {
    planes::PIECES + color.to_index() * 6 + piece.to_index()
}

/// Flat tensor index of `(plane, rank, file)`.
#[inline]
fn index(plane: usize, rank: usize, file: usize) -> usize {
    plane * PLANE_SIZE + rank * BOARD_SIZE + file
}

#[inline]
fn fill_plane(obs: &mut [f32], plane: usize, value: f32) {
    let base = plane * PLANE_SIZE;
    obs[base..base + PLANE_SIZE].fill(value);
}

/// Chess position encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChessEncoder;

impl ChessEncoder {
    /// Create a new encoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Encode a FEN string directly.
    pub fn encode_fen(&self, fen: &str) -> Result<EncodedState> {
        let state = ChessState::from_fen(fen)?;
        Ok(self.encode(&state))
    }
}

impl StateEncoder<ChessState> for ChessEncoder {
    fn encode(&self, state: &ChessState) -> EncodedState {
        let board = state.board();
        let mut obs = vec![0.0f32; NUM_CHANNELS * PLANE_SIZE];

        for color in ALL_COLORS {
            for piece in ALL_PIECES {
                let plane = piece_plane(color, piece);
                for sq in *board.pieces(piece) & *board.color_combined(color) {
                    let i = index(plane, sq.get_rank().to_index(), sq.get_file().to_index());
                    obs[i] = 1.0;
                }
            }
        }

        if board.side_to_move() == Color::White {
            fill_plane(&mut obs, planes::SIDE_TO_MOVE, 1.0);
        }

        let castling = [
            (Color::White, true, planes::CASTLING_WK),
            (Color::White, false, planes::CASTLING_WQ),
            (Color::Black, true, planes::CASTLING_BK),
            (Color::Black, false, planes::CASTLING_BQ),
        ];
        for (color, kingside, plane) in castling {
            let rights = board.castle_rights(color);
            let allowed = if kingside {
                rights.has_kingside()
            } else {
                rights.has_queenside()
            };
            if allowed {
                fill_plane(&mut obs, plane, 1.0);
            }
        }

        if let Some(target) = en_passant_target(board) {
            let i = index(
                planes::EN_PASSANT,
                target.get_rank().to_index(),
                target.get_file().to_index(),
            );
            obs[i] = 1.0;
        }

        let halfmove = (state.halfmove_clock() as f32 / HALFMOVE_SCALE).min(1.0);
        fill_plane(&mut obs, planes::HALFMOVE, halfmove);

        EncodedState::new(obs, OBSERVATION_SHAPE.to_vec())
    }

    fn output_shape(&self) -> Vec<usize> {
        OBSERVATION_SHAPE.to_vec()
    }
}
