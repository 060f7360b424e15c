//! Text notation accepted at the boundary of the engine.
//!
//! Hosts receive moves as `{from, to, promotion?}` with squares written as
//! `[a-h][1-8]`. Everything here is validated before a [`Move`] is built, so
//! malformed input never reaches the rules engine.

use crate::{Move, PieceType, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for malformed squares, moves, and promotion pieces.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square: '{0}'")]
    InvalidSquare(String),

    #[error("invalid move text: '{0}'")]
    InvalidMove(String),

    #[error("invalid promotion piece: '{0}'")]
    InvalidPromotion(String),

    #[error("cannot promote to {0}")]
    NotPromotable(PieceType),
}

/// Parses a promotion piece given as a letter (`q`) or a name (`queen`).
pub fn parse_promotion(s: &str) -> Result<PieceType, NotationError> {
    let lower = s.trim().to_ascii_lowercase();
    let kind = match lower.as_str() {
        "queen" => Some(PieceType::Queen),
        "rook" => Some(PieceType::Rook),
        "bishop" => Some(PieceType::Bishop),
        "knight" => Some(PieceType::Knight),
        "pawn" => Some(PieceType::Pawn),
        "king" => Some(PieceType::King),
        _ => {
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => PieceType::from_char(c),
                _ => None,
            }
        }
    };
    match kind {
        Some(kind) if kind.is_promotable() => Ok(kind),
        Some(kind) => Err(NotationError::NotPromotable(kind)),
        None => Err(NotationError::InvalidPromotion(s.to_string())),
    }
}

/// A move as it arrives from a client, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

impl MoveRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        MoveRequest {
            from: from.into(),
            to: to.into(),
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, promotion: impl Into<String>) -> Self {
        self.promotion = Some(promotion.into());
        self
    }
}

impl TryFrom<&MoveRequest> for Move {
    type Error = NotationError;

    fn try_from(request: &MoveRequest) -> Result<Self, Self::Error> {
        let from = Position::from_algebraic(request.from.trim())?;
        let to = Position::from_algebraic(request.to.trim())?;
        let promotion = request
            .promotion
            .as_deref()
            .map(parse_promotion)
            .transpose()?;
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

impl From<Move> for MoveRequest {
    fn from(m: Move) -> Self {
        MoveRequest {
            from: m.from.to_algebraic(),
            to: m.to.to_algebraic(),
            promotion: m.promotion.map(|kind| kind.to_char().to_string()),
        }
    }
}
