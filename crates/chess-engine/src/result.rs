//! How a finished game ended.

use chess_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameResult {
    /// The side to move is in check with no legal move.
    Checkmate { winner: Color },
    /// A side has no legal move but is not in check.
    Stalemate,
    /// A player resigned.
    Resignation { winner: Color },
}

impl GameResult {
    /// Returns the winning color, or `None` for a draw.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner } | GameResult::Resignation { winner } => Some(winner),
            GameResult::Stalemate => None,
        }
    }

    /// Returns true if the game ended without a winner.
    pub const fn is_draw(self) -> bool {
        self.winner().is_none()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "{} wins by checkmate", winner),
            GameResult::Stalemate => write!(f, "draw by stalemate"),
            GameResult::Resignation { winner } => write!(f, "{} wins by resignation", winner),
        }
    }
}
