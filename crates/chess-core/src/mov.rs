//! Move representation.

use crate::notation::parse_promotion;
use crate::{NotationError, PieceType, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chess move.
///
/// Castling is a king move of two columns and en passant is a diagonal pawn
/// move onto an empty square; the board infers both from geometry. Two moves
/// differing only in their promotion piece are distinct.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Creates a move without promotion.
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a pawn move that promotes to `kind`.
    #[inline]
    pub const fn promoting(from: Position, to: Position, kind: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Parses a move from UCI notation.
    pub fn from_uci(s: &str) -> Result<Self, NotationError> {
        let s = s.trim();
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(NotationError::InvalidMove(s.to_string()));
        }
        let from = Position::from_algebraic(&s[0..2])?;
        let to = Position::from_algebraic(&s[2..4])?;
        let promotion = if s.len() == 5 {
            Some(parse_promotion(&s[4..5])?)
        } else {
            None
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
