//! Pseudo-legal move generation.
//!
//! Moves generated here follow each piece's geometry and never land on a
//! friendly piece, but may leave the mover's own king in check. Castling and
//! en passant depend on game history and are added by [`Game`](crate::Game).

mod attacks;
pub mod perft;

use crate::Board;
use chess_core::{Color, Move, Piece, PieceType, Position};

pub use attacks::{
    slide, step, Direction, ALL_DIRECTIONS, DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS,
};

/// Generates the pseudo-legal moves of the piece standing on `from`.
///
/// Returns an empty list if `from` is empty or off the board.
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Move> {
    match board.get_piece(from) {
        Some(piece) => piece_moves(board, from, piece),
        None => Vec::new(),
    }
}

/// Generates the pseudo-legal moves of `piece` as if it stood on `from`.
pub fn piece_moves(board: &Board, from: Position, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    let color = piece.color;
    match piece.kind {
        PieceType::Bishop => slide(board, from, color, &DIAGONALS, &mut moves),
        PieceType::Rook => slide(board, from, color, &ORTHOGONALS, &mut moves),
        PieceType::Queen => slide(board, from, color, &ALL_DIRECTIONS, &mut moves),
        PieceType::Knight => step(board, from, color, &KNIGHT_OFFSETS, &mut moves),
        PieceType::King => step(board, from, color, &ALL_DIRECTIONS, &mut moves),
        PieceType::Pawn => pawn_moves(board, from, color, &mut moves),
    }
    moves
}

/// Generates pseudo-legal pawn pushes and captures.
fn pawn_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    let one = from.offset(dir, 0);
    if board.is_empty_square(one) {
        push_pawn_move(from, one, color, moves);

        let two = from.offset(2 * dir, 0);
        if from.row == color.pawn_rank() && board.is_empty_square(two) {
            moves.push(Move::new(from, two));
        }
    }

    for side in [-1, 1] {
        let target = from.offset(dir, side);
        if matches!(board.get_piece(target), Some(p) if p.color != color) {
            push_pawn_move(from, target, color, moves);
        }
    }
}

/// Pushes a pawn move, expanding it into all four promotions on the last rank.
fn push_pawn_move(from: Position, to: Position, color: Color, moves: &mut Vec<Move>) {
    if to.row == color.promotion_rank() {
        for kind in PieceType::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Returns true if any piece of `by_color` could move onto `target`.
///
/// Forward pawn pushes can only reach empty squares, so for an occupied
/// `target` this is exactly the set of capturing moves.
pub fn is_square_attacked(board: &Board, target: Position, by_color: Color) -> bool {
    board
        .get_pieces(by_color)
        .into_iter()
        .any(|from| pseudo_legal_moves(board, from).iter().any(|m| m.to == target))
}

/// Returns true if the king of the given color is in check.
///
/// A board without that king is never in check.
pub fn is_king_attacked(board: &Board, king_color: Color) -> bool {
    match board.king_position(king_color) {
        Some(king) => is_square_attacked(board, king, king_color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn targets(moves: &[Move]) -> Vec<String> {
        let mut t: Vec<String> = moves.iter().map(|m| m.to_uci()).collect();
        t.sort();
        t
    }

    #[test]
    fn startpos_pawn_pushes() {
        let board = Board::standard();
        let moves = pseudo_legal_moves(&board, pos("e2"));
        assert_eq!(targets(&moves), vec!["e2e3", "e2e4"]);

        let moves = pseudo_legal_moves(&board, pos("d7"));
        assert_eq!(targets(&moves), vec!["d7d5", "d7d6"]);
    }

    #[test]
    fn startpos_knight_and_blocked_pieces() {
        let board = Board::standard();
        assert_eq!(
            targets(&pseudo_legal_moves(&board, pos("g1"))),
            vec!["g1f3", "g1h3"]
        );
        assert!(pseudo_legal_moves(&board, pos("a1")).is_empty());
        assert!(pseudo_legal_moves(&board, pos("d1")).is_empty());
        assert!(pseudo_legal_moves(&board, pos("e1")).is_empty());
        assert!(pseudo_legal_moves(&board, pos("e4")).is_empty());
    }

    #[test]
    fn pawn_double_step_needs_both_squares_empty() {
        let mut board = Board::new();
        board.add_piece(pos("c2"), Piece::from_char('P'));
        board.add_piece(pos("c4"), Piece::from_char('n'));
        assert_eq!(targets(&pseudo_legal_moves(&board, pos("c2"))), vec!["c2c3"]);

        board.add_piece(pos("c3"), Piece::from_char('n'));
        assert!(pseudo_legal_moves(&board, pos("c2")).is_empty());
    }

    #[test]
    fn pawn_double_step_only_from_home_rank() {
        let mut board = Board::new();
        board.add_piece(pos("c3"), Piece::from_char('P'));
        assert_eq!(targets(&pseudo_legal_moves(&board, pos("c3"))), vec!["c3c4"]);
    }

    #[test]
    fn pawn_captures_enemies_only() {
        let mut board = Board::new();
        board.add_piece(pos("e4"), Piece::from_char('P'));
        board.add_piece(pos("d5"), Piece::from_char('p'));
        board.add_piece(pos("f5"), Piece::from_char('N'));
        assert_eq!(
            targets(&pseudo_legal_moves(&board, pos("e4"))),
            vec!["e4d5", "e4e5"]
        );
    }

    #[test]
    fn pawn_on_edge_file() {
        let mut board = Board::new();
        board.add_piece(pos("a7"), Piece::from_char('p'));
        board.add_piece(pos("b6"), Piece::from_char('R'));
        assert_eq!(
            targets(&pseudo_legal_moves(&board, pos("a7"))),
            vec!["a7a5", "a7a6", "a7b6"]
        );
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let mut board = Board::new();
        board.add_piece(pos("g2"), Piece::from_char('p'));
        board.add_piece(pos("h1"), Piece::from_char('R'));
        let moves = pseudo_legal_moves(&board, pos("g2"));
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.promotion.is_some()));
        assert_eq!(moves.iter().filter(|m| m.to == pos("h1")).count(), 4);
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let mut board = Board::new();
        board.add_piece(pos("d4"), Piece::from_char('Q'));
        assert_eq!(pseudo_legal_moves(&board, pos("d4")).len(), 27);
    }

    #[test]
    fn pawn_never_attacks_straight_ahead() {
        let mut board = Board::new();
        board.add_piece(pos("e2"), Piece::from_char('p'));
        board.add_piece(pos("e1"), Piece::from_char('K'));
        assert!(!is_square_attacked(&board, pos("e1"), Color::Black));
        assert!(!is_king_attacked(&board, Color::White));

        board.add_piece(pos("e1"), None);
        board.add_piece(pos("d1"), Piece::from_char('K'));
        assert!(is_square_attacked(&board, pos("d1"), Color::Black));
        assert!(is_king_attacked(&board, Color::White));
    }

    #[test]
    fn king_attacked() {
        let mut board = Board::new();
        board.add_piece(pos("e1"), Piece::from_char('K'));
        board.add_piece(pos("e8"), Piece::from_char('r'));
        assert!(is_king_attacked(&board, Color::White));

        board.add_piece(pos("e4"), Piece::from_char('B'));
        assert!(!is_king_attacked(&board, Color::White));
        assert!(!is_king_attacked(&board, Color::Black));
    }
}
