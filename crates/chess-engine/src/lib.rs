//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 mailbox board with reversible [`Board::do_move`]
//! - [`Game`] - Turn handling, legality checking, castling and en passant
//! - [`GameResult`] - Checkmate, stalemate, and resignation detection
//! - Pseudo-legal move generation and perft in [`movegen`]
//!
//! # Example
//!
//! ```
//! use chess_engine::Game;
//! use chess_core::{Color, Position};
//!
//! let mut game = Game::new();
//! let e2 = Position::from_algebraic("e2").unwrap();
//! assert_eq!(game.valid_moves(e2).unwrap().len(), 2);
//!
//! for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.make_move_uci(m).unwrap();
//! }
//! assert!(game.is_in_checkmate(Color::White));
//! assert!(game.is_over());
//! ```

mod board;
mod castling;
mod game;
pub mod movegen;
mod result;
#[cfg(test)]
mod testing;

pub use board::{Board, Undo};
pub use castling::CastlingRights;
pub use game::{Game, GameError};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{is_king_attacked, is_square_attacked, pseudo_legal_moves};
pub use result::GameResult;
