//! Direction tables and the two stepping strategies shared by all pieces.

use crate::Board;
use chess_core::{Color, Move, Position};

/// A (row delta, column delta) pair.
pub type Direction = (i8, i8);

pub const DIAGONALS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ORTHOGONALS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const ALL_DIRECTIONS: [Direction; 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// What a piece of `color` may do on `target`.
enum Landing {
    /// Off the board or blocked by a friendly piece.
    Blocked,
    /// Empty square, the ray may continue.
    Quiet,
    /// Enemy piece, the ray ends here.
    Capture,
}

#[inline]
fn landing(board: &Board, target: Position, color: Color) -> Landing {
    if target.outside_bounds() {
        return Landing::Blocked;
    }
    match board.get_piece(target) {
        None => Landing::Quiet,
        Some(p) if p.color != color => Landing::Capture,
        Some(_) => Landing::Blocked,
    }
}

/// Casts a ray in each direction until it leaves the board, hits a friendly
/// piece (excluded), or hits an enemy piece (included).
pub fn slide(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut target = from.offset(dr, dc);
        loop {
            match landing(board, target, color) {
                Landing::Blocked => break,
                Landing::Capture => {
                    moves.push(Move::new(from, target));
                    break;
                }
                Landing::Quiet => {
                    moves.push(Move::new(from, target));
                    target = target.offset(dr, dc);
                }
            }
        }
    }
}

/// Like [`slide`], but only one step in each direction.
pub fn step(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        let target = from.offset(dr, dc);
        match landing(board, target, color) {
            Landing::Blocked => {}
            Landing::Quiet | Landing::Capture => moves.push(Move::new(from, target)),
        }
    }
}
