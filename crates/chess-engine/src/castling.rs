//! Castling rights bookkeeping.

use chess_core::{CastlingSide, Color, Position};
use serde::{Deserialize, Serialize};

/// Castling rights flags.
///
/// A right is lost for good once the king or the corresponding rook leaves
/// its home square (or the rook is captured there). Rights are never
/// restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    #[inline]
    const fn flag(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => Self::WHITE_KINGSIDE,
            (Color::White, CastlingSide::QueenSide) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastlingSide::KingSide) => Self::BLACK_KINGSIDE,
            (Color::Black, CastlingSide::QueenSide) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if `color` may still castle on `side`.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastlingSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Removes castling rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastlingSide::KingSide);
        self.remove(color, CastlingSide::QueenSide);
    }

    /// Removes one castling right.
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The home square of `color`'s king.
    pub const fn king_home(color: Color) -> Position {
        Position::new(color.back_rank(), CastlingSide::KING_COLUMN)
    }

    /// The home square of `color`'s rook on `side`.
    pub const fn rook_home(color: Color, side: CastlingSide) -> Position {
        Position::new(color.back_rank(), side.rook_column())
    }

    /// Returns the color and side whose rook starts on `pos`, if any.
    pub fn rook_home_at(pos: Position) -> Option<(Color, CastlingSide)> {
        Color::ALL
            .into_iter()
            .flat_map(|color| CastlingSide::ALL.map(|side| (color, side)))
            .find(|&(color, side)| Self::rook_home(color, side) == pos)
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}
