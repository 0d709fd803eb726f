//! Game outcomes.
//!
//! `GameResult` is the typed outcome; `ResultVector` is its fixed-size
//! indicator form `(player0_win, player1_win, draw)` handed to search and
//! training code. While a game is ongoing the vector is all zero.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// Reward in `[-1, 1]` from `player`'s point of view.
    #[must_use]
    pub fn reward_for(&self, player: PlayerId) -> f32 {
        match self {
            GameResult::Winner(p) if *p == player => 1.0,
            GameResult::Winner(_) => -1.0,
            GameResult::Draw => 0.0,
        }
    }
}

/// Indicator vector `(player0_win, player1_win, draw)`.
///
/// At most one entry is set; all zero means the game is not over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultVector([u8; 3]);

impl ResultVector {
    /// Number of entries.
    pub const LEN: usize = 3;

    /// The all-zero vector of an ongoing game.
    pub const ONGOING: Self = Self([0, 0, 0]);

    /// Indicator for a draw.
    pub const DRAW: Self = Self([0, 0, 1]);

    /// Indicator for a single winner of a two-player game.
    ///
    /// # Panics
    /// Debug builds assert that `player` is 0 or 1.
    #[must_use]
    pub fn win(player: PlayerId) -> Self {
        debug_assert!(player.index() < 2, "result vectors cover two players");
        let mut v = [0; 3];
        v[player.index().min(1)] = 1;
        Self(v)
    }

    /// Raw entries.
    #[must_use]
    pub fn as_array(&self) -> [u8; 3] {
        self.0
    }

    /// Whether any entry is set.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.0.iter().any(|&e| e != 0)
    }

    /// Typed view; `None` while ongoing.
    #[must_use]
    pub fn to_result(&self) -> Option<GameResult> {
        match self.0 {
            [1, 0, 0] => Some(GameResult::Winner(PlayerId::new(0))),
            [0, 1, 0] => Some(GameResult::Winner(PlayerId::new(1))),
            [0, 0, 1] => Some(GameResult::Draw),
            _ => None,
        }
    }
}

impl From<Option<GameResult>> for ResultVector {
    fn from(result: Option<GameResult>) -> Self {
        match result {
            None => ResultVector::ONGOING,
            Some(GameResult::Draw) => ResultVector::DRAW,
            Some(GameResult::Winner(p)) => ResultVector::win(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_game_result_reward() {
        let result = GameResult::Winner(PlayerId::new(0));
        assert_eq!(result.reward_for(PlayerId::new(0)), 1.0);
        assert_eq!(result.reward_for(PlayerId::new(1)), -1.0);
        assert_eq!(GameResult::Draw.reward_for(PlayerId::new(1)), 0.0);
    }

    #[test]
    fn test_result_vector_ongoing() {
        let v = ResultVector::from(None);
        assert_eq!(v.as_array(), [0, 0, 0]);
        assert!(!v.is_terminal());
        assert_eq!(v.to_result(), None);
        assert_eq!(v, ResultVector::default());
    }

    #[test]
    fn test_result_vector_exactly_one_entry() {
        for result in [
            GameResult::Winner(PlayerId::new(0)),
            GameResult::Winner(PlayerId::new(1)),
            GameResult::Draw,
        ] {
            let v = ResultVector::from(Some(result));
            assert_eq!(v.as_array().iter().filter(|&&e| e == 1).count(), 1);
            assert_eq!(v.to_result(), Some(result));
        }
    }

    #[test]
    fn test_result_vector_layout() {
        assert_eq!(ResultVector::win(PlayerId::new(0)).as_array(), [1, 0, 0]);
        assert_eq!(ResultVector::win(PlayerId::new(1)).as_array(), [0, 1, 0]);
        assert_eq!(ResultVector::DRAW.as_array(), [0, 0, 1]);
    }
}
