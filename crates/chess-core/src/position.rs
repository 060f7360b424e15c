//! Board coordinates.

use crate::NotationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (row, column) coordinate on the board, both 1-based.
///
/// Row 1 is White's back rank and column 1 is the a-file. Coordinates
/// outside `1..=8` are allowed so move generation can step off the board,
/// but such positions are never stored on a board; check
/// [`Position::outside_bounds`] before using one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    /// Creates a position from raw coordinates. No normalization is done.
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Position { row, column }
    }

    /// Returns true if either coordinate falls outside `1..=8`.
    #[inline]
    pub const fn outside_bounds(self) -> bool {
        self.row < 1 || self.row > 8 || self.column < 1 || self.column > 8
    }

    /// Returns the position shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, rows: i8, columns: i8) -> Self {
        Position {
            row: self.row.saturating_add(rows),
            column: self.column.saturating_add(columns),
        }
    }

    /// All 64 on-board positions, row by row starting at a1.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8).flat_map(|row| (1..=8).map(move |column| Position::new(row, column)))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, NotationError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(NotationError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(NotationError::InvalidSquare(s.to_string()));
        }
        Ok(Position::new((rank - b'0') as i8, (file - b'a' + 1) as i8))
    }

    /// Returns the algebraic notation for this position.
    ///
    /// Off-board positions are rendered as `?`.
    pub fn to_algebraic(self) -> String {
        if self.outside_bounds() {
            return "?".to_string();
        }
        let file = (b'a' + (self.column - 1) as u8) as char;
        format!("{}{}", file, self.row)
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outside_bounds() {
            write!(f, "Position({}, {})", self.row, self.column)
        } else {
            write!(f, "Position({})", self.to_algebraic())
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
