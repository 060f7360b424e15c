use serde::{Deserialize, Serialize};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

    /// Column the king starts on.
    pub const KING_COLUMN: i8 = 5;

    /// Column of the rook that castles on this side.
    pub const fn rook_column(self) -> i8 {
        match self {
            CastlingSide::KingSide => 8,
            CastlingSide::QueenSide => 1,
        }
    }

    /// Column the king lands on.
    pub const fn king_to_column(self) -> i8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 3,
        }
    }

    /// Column the rook lands on, which is also the square the king passes.
    pub const fn rook_to_column(self) -> i8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 4,
        }
    }

    /// Columns strictly between king and rook.
    pub fn between_columns(self) -> std::ops::RangeInclusive<i8> {
        match self {
            CastlingSide::KingSide => 6..=7,
            CastlingSide::QueenSide => 2..=4,
        }
    }

    /// The side a king move toward `to_column` castles on.
    pub const fn from_king_to_column(to_column: i8) -> CastlingSide {
        if to_column > Self::KING_COLUMN {
            CastlingSide::KingSide
        } else {
            CastlingSide::QueenSide
        }
    }
}
