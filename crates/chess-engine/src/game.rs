//! Game state machine.
//!
//! The [`Game`] struct owns the board and everything the rules need beyond
//! piece placement:
//! - Whose turn it is
//! - Castling rights (which kings and rooks have left home)
//! - The pawn that just made a double step, for en passant
//! - The latched result once the game is over

use crate::movegen::{is_king_attacked, piece_moves};
use crate::{Board, CastlingRights, GameResult};
use chess_core::{CastlingSide, Color, Move, MoveRequest, NotationError, Piece, PieceType, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for game operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move is not legal for the side to move. Nothing was changed.
    #[error("invalid move: {0}")]
    InvalidMove(Move),
    /// The game has already ended.
    #[error("game is over: {0}")]
    GameOver(GameResult),
    /// The move text could not be parsed.
    #[error(transparent)]
    Malformed(#[from] NotationError),
}

/// A chess game driven one move at a time.
///
/// Legality is checked by simulation: each candidate move is applied to a
/// scratch copy of the board, the mover's king is tested for check, and the
/// move is undone again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Color,
    castling: CastlingRights,
    /// Landing square of the pawn that double-stepped on the previous move.
    pawn_moved_two: Option<Position>,
    result: Option<GameResult>,
    moves: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Creates a game from an arbitrary board.
    ///
    /// Castling is allowed for any king and rook found on their home squares.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            castling: CastlingRights::ALL,
            pawn_moved_two: None,
            result: None,
            moves: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board and forgets all special-rule history.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.castling = CastlingRights::ALL;
        self.pawn_moved_two = None;
        self.result = None;
        self.moves.clear();
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Sets the side to move.
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Returns the castling rights still held by each side.
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the square of a pawn that may be captured en passant.
    pub fn pawn_moved_two(&self) -> Option<Position> {
        self.pawn_moved_two
    }

    /// Returns the moves played so far.
    pub fn move_history(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the legal moves of the piece on `pos`, or `None` if the
    /// square is empty.
    ///
    /// Works for either color regardless of whose turn it is. The order of
    /// the returned moves is deterministic.
    pub fn valid_moves(&self, pos: Position) -> Option<Vec<Move>> {
        let piece = self.board.get_piece(pos)?;
        let mut candidates = piece_moves(&self.board, pos, piece);
        match piece.kind {
            PieceType::Pawn => candidates.extend(self.en_passant_move(pos, piece.color)),
            PieceType::King => candidates.extend(self.castling_moves(pos, piece.color)),
            _ => {}
        }

        let mut scratch = self.board.clone();
        candidates.retain(|&m| keeps_king_safe(&mut scratch, m, piece.color));
        Some(candidates)
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .get_pieces(self.turn)
            .into_iter()
            .flat_map(|pos| self.valid_moves(pos).unwrap_or_default())
            .collect()
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .get_pieces(color)
            .into_iter()
            .any(|pos| self.valid_moves(pos).is_some_and(|moves| !moves.is_empty()))
    }

    /// The en passant capture available to the pawn on `from`, if any.
    fn en_passant_move(&self, from: Position, color: Color) -> Option<Move> {
        let target = self.pawn_moved_two?;
        if target.row != from.row || target.column.abs_diff(from.column) != 1 {
            return None;
        }
        if self.board.get_piece(target) != Some(Piece::new(color.opposite(), PieceType::Pawn)) {
            return None;
        }
        let to = target.offset(color.pawn_direction(), 0);
        self.board.is_empty_square(to).then(|| Move::new(from, to))
    }

    /// Castling moves for the king on `from`.
    ///
    /// The landing square is left to the regular legality filter; the square
    /// the king passes over is checked here by stepping the king onto it.
    fn castling_moves(&self, from: Position, color: Color) -> Vec<Move> {
        let home = CastlingRights::king_home(color);
        if from != home || is_king_attacked(&self.board, color) {
            return Vec::new();
        }

        let rook = Some(Piece::new(color, PieceType::Rook));
        let mut scratch = self.board.clone();
        CastlingSide::ALL
            .into_iter()
            .filter(|&side| self.castling.can_castle(color, side))
            .filter(|&side| self.board.get_piece(CastlingRights::rook_home(color, side)) == rook)
            .filter(|&side| {
                side.between_columns()
                    .all(|column| self.board.is_empty_square(Position::new(home.row, column)))
            })
            .filter(|&side| {
                let transit = Move::new(home, Position::new(home.row, side.rook_to_column()));
                keeps_king_safe(&mut scratch, transit, color)
            })
            .map(|side| Move::new(home, Position::new(home.row, side.king_to_column())))
            .collect()
    }

    /// Returns true if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.board, color)
    }

    /// Returns true if `color` is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `color` is not in check and has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Computes the result without latching it.
    ///
    /// Checkmate of the side to move is tested first, then stalemate of
    /// either side.
    pub fn outcome(&self) -> Option<GameResult> {
        if let Some(result) = self.result {
            return Some(result);
        }
        if self.is_in_checkmate(self.turn) {
            return Some(GameResult::Checkmate {
                winner: self.turn.opposite(),
            });
        }
        if Color::ALL.into_iter().any(|color| self.is_in_stalemate(color)) {
            return Some(GameResult::Stalemate);
        }
        None
    }

    /// Returns true if the game is over, latching the result the first time
    /// it is detected.
    pub fn is_over(&mut self) -> bool {
        self.latch_outcome().is_some()
    }

    /// Latches the computed outcome if none is recorded yet.
    fn latch_outcome(&mut self) -> Option<GameResult> {
        if self.result.is_none() {
            if let Some(result) = self.outcome() {
                info!(%result, plies = self.moves.len(), "game over");
                self.result = Some(result);
            }
        }
        self.result
    }

    /// Returns the latched result, if the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Makes a move for the side to move.
    ///
    /// Fails with [`GameError::GameOver`] if the position is terminal, even
    /// when nobody has asked [`Game::is_over`] yet; the result is latched.
    /// Fails without changing anything if the source square is empty or
    /// holds an opponent piece, or the move is not among the piece's legal
    /// moves.
    pub fn make_move(&mut self, m: Move) -> Result<(), GameError> {
        if let Some(result) = self.latch_outcome() {
            debug!(%m, %result, "move rejected: game is over");
            return Err(GameError::GameOver(result));
        }
        let Some(piece) = self.board.get_piece(m.from) else {
            debug!(%m, "move rejected: source square is empty");
            return Err(GameError::InvalidMove(m));
        };
        if piece.color != self.turn {
            debug!(%m, turn = %self.turn, "move rejected: not this side's turn");
            return Err(GameError::InvalidMove(m));
        }
        let legal = self.valid_moves(m.from).unwrap_or_default();
        if !legal.contains(&m) {
            debug!(%m, "move rejected: not a legal move");
            return Err(GameError::InvalidMove(m));
        }

        self.commit(m);
        debug!(%m, turn = %self.turn, "move committed");
        self.latch_outcome();
        Ok(())
    }

    /// Parses and makes a move in UCI notation (e.g., "e2e4", "e7e8q").
    pub fn make_move_uci(&mut self, uci: &str) -> Result<(), GameError> {
        let m = Move::from_uci(uci)?;
        self.make_move(m)
    }

    /// Validates and makes a move that arrived from a client.
    pub fn make_move_request(&mut self, request: &MoveRequest) -> Result<(), GameError> {
        let m = Move::try_from(request)?;
        self.make_move(m)
    }

    /// Ends the game with `color` resigning.
    pub fn resign(&mut self, color: Color) -> Result<(), GameError> {
        if let Some(result) = self.latch_outcome() {
            return Err(GameError::GameOver(result));
        }
        let result = GameResult::Resignation {
            winner: color.opposite(),
        };
        info!(%result, plies = self.moves.len(), "game over");
        self.result = Some(result);
        Ok(())
    }

    /// Applies a move already known to be legal and passes the turn.
    pub(crate) fn commit(&mut self, m: Move) {
        let Some(piece) = self.board.get_piece(m.from) else {
            return;
        };
        self.pawn_moved_two = None;
        self.update_special_rules(piece, m);
        let _undo = self.board.do_move(m);
        self.turn = self.turn.opposite();
        self.moves.push(m);
    }

    fn update_special_rules(&mut self, piece: Piece, m: Move) {
        let color = piece.color;
        match piece.kind {
            PieceType::Pawn if m.to.row.abs_diff(m.from.row) == 2 => {
                self.pawn_moved_two = Some(m.to);
            }
            PieceType::King if m.from == CastlingRights::king_home(color) => {
                self.castling.remove_color(color);
            }
            PieceType::Rook => {
                if let Some((owner, side)) = CastlingRights::rook_home_at(m.from) {
                    if owner == color {
                        self.castling.remove(owner, side);
                    }
                }
            }
            _ => {}
        }
        // Capturing a rook at home also ends that castling right.
        if let Some((owner, side)) = CastlingRights::rook_home_at(m.to) {
            if owner != color {
                self.castling.remove(owner, side);
            }
        }
    }
}

/// Plays `m` on `board`, tests whether `color`'s king is safe, and takes the
/// move back.
fn keeps_king_safe(board: &mut Board, m: Move, color: Color) -> bool {
    match board.do_move(m) {
        Some(undo) => {
            let safe = !is_king_attacked(board, color);
            board.undo_move(m, undo);
            safe
        }
        None => false,
    }
}
