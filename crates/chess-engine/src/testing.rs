//! Test helpers.

use crate::Board;
use chess_core::{Piece, Position};

/// Builds a board from eight rows of eight characters, rank 8 first.
///
/// `.` is an empty square, letters are pieces (uppercase White).
/// Surrounding whitespace is ignored.
pub(crate) fn board_from_diagram(diagram: &str) -> Board {
    let rows: Vec<&str> = diagram
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(rows.len(), 8, "diagram needs 8 rows");

    let mut board = Board::new();
    for (i, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), 8, "row {:?} needs 8 squares", line);
        let row = 8 - i as i8;
        for (j, c) in line.chars().enumerate() {
            if c != '.' {
                let piece = Piece::from_char(c);
                assert!(piece.is_some(), "unknown piece {:?}", c);
                board.add_piece(Position::new(row, j as i8 + 1), piece);
            }
        }
    }
    board
}
