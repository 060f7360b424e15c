//! Mailbox board representation.

use chess_core::{CastlingSide, Color, Move, Piece, PieceType, Position};
use serde::{Deserialize, Serialize};

/// Back rank layout from the a-file to the h-file.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Everything [`Board::undo_move`] needs to reverse one [`Board::do_move`].
///
/// The token is returned to the caller instead of being kept on the board,
/// so explorations can nest to any depth as long as each token is undone in
/// reverse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a move can only be undone with its token"]
pub struct Undo {
    /// The piece that stood on `from`, before any promotion.
    pub moved: Piece,
    /// The piece removed from `capture_site`, if any.
    pub captured: Option<Piece>,
    /// Where the captured piece stood. Differs from `to` for en passant.
    pub capture_site: Position,
    /// For castling: the rook's original and relocated squares.
    pub rook: Option<(Position, Position)>,
}

/// An 8x8 grid of optional pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// Creates a board with the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.reset_board();
        board
    }

    /// Clears the board and sets up the standard starting position.
    pub fn reset_board(&mut self) {
        self.squares = [[None; 8]; 8];
        for color in Color::ALL {
            for (i, kind) in BACK_RANK.iter().enumerate() {
                let column = i as i8 + 1;
                self.add_piece(
                    Position::new(color.back_rank(), column),
                    Some(Piece::new(color, *kind)),
                );
                self.add_piece(
                    Position::new(color.pawn_rank(), column),
                    Some(Piece::new(color, PieceType::Pawn)),
                );
            }
        }
    }

    #[inline]
    fn cell(pos: Position) -> Option<(usize, usize)> {
        if pos.outside_bounds() {
            None
        } else {
            Some(((pos.row - 1) as usize, (pos.column - 1) as usize))
        }
    }

    /// Returns the piece at `pos`. Off-board positions are always empty.
    #[inline]
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        Self::cell(pos).and_then(|(r, c)| self.squares[r][c])
    }

    /// Replaces the contents of `pos`, returning what was there.
    ///
    /// No legality checks are made. Writes to off-board positions are ignored.
    pub fn add_piece(&mut self, pos: Position, piece: Option<Piece>) -> Option<Piece> {
        match Self::cell(pos) {
            Some((r, c)) => std::mem::replace(&mut self.squares[r][c], piece),
            None => None,
        }
    }

    /// Returns true if `pos` is on the board and empty.
    #[inline]
    pub fn is_empty_square(&self, pos: Position) -> bool {
        !pos.outside_bounds() && self.get_piece(pos).is_none()
    }

    /// Returns every position occupied by `color`, row by row from a1.
    pub fn get_pieces(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|&pos| matches!(self.get_piece(pos), Some(p) if p.color == color))
            .collect()
    }

    /// Returns the position of `color`'s king, if it has one.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceType::King);
        Position::all().find(|&pos| self.get_piece(pos) == Some(king))
    }

    /// Applies `m`, returning the token that reverses it.
    ///
    /// Handles promotion, the en passant capture (a diagonal pawn move onto
    /// an empty square removes the pawn beside `from`), and castling (a king
    /// moving two columns also relocates the corner rook). Returns `None`
    /// without touching the board if `from` is empty.
    pub fn do_move(&mut self, m: Move) -> Option<Undo> {
        let moved = self.get_piece(m.from)?;
        let placed = match m.promotion {
            Some(kind) => Piece::new(moved.color, kind),
            None => moved,
        };

        let mut capture_site = m.to;
        let mut rook = None;
        match moved.kind {
            PieceType::Pawn if m.from.column != m.to.column && self.get_piece(m.to).is_none() => {
                capture_site = Position::new(m.from.row, m.to.column);
            }
            PieceType::King if m.to.column.abs_diff(m.from.column) == 2 => {
                let side = CastlingSide::from_king_to_column(m.to.column);
                let rook_from = Position::new(m.from.row, side.rook_column());
                let rook_to = Position::new(m.from.row, side.rook_to_column());
                if self.is_empty_square(rook_to) {
                    if let Some(piece) = self.add_piece(rook_from, None) {
                        self.add_piece(rook_to, Some(piece));
                        rook = Some((rook_from, rook_to));
                    }
                }
            }
            _ => {}
        }

        let captured = self.add_piece(capture_site, None);
        self.add_piece(m.from, None);
        self.add_piece(m.to, Some(placed));

        Some(Undo {
            moved,
            captured,
            capture_site,
            rook,
        })
    }

    /// Reverses a [`Board::do_move`] of `m`.
    ///
    /// Must be called with the token `do_move` returned for `m`, before any
    /// later move's token is undone.
    pub fn undo_move(&mut self, m: Move, undo: Undo) {
        self.add_piece(m.to, None);
        self.add_piece(m.from, Some(undo.moved));
        self.add_piece(undo.capture_site, undo.captured);
        if let Some((rook_from, rook_to)) = undo.rook {
            let piece = self.add_piece(rook_to, None);
            self.add_piece(rook_from, piece);
        }
    }
}
