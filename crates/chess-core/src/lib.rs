//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`], [`PieceType`] and [`Color`] for piece representation
//! - [`Position`] for 1-based (row, column) board coordinates
//! - [`Move`] for move representation, including promotion choice
//! - [`MoveRequest`] and [`NotationError`] for validating text input

mod castling_side;
mod color;
mod mov;
pub mod notation;
mod piece;
mod position;

pub use castling_side::CastlingSide;
pub use color::Color;
pub use mov::Move;
pub use notation::{MoveRequest, NotationError};
pub use piece::{Piece, PieceType};
pub use position::Position;
