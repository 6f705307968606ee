//! Core types for chess.
//!
//! This crate provides the fundamental types used by the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates, with [`SquareError`] for bad input
//! - [`Move`] for move representation
//! - Board layout text parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Cells, FenError, FenParser};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{Square, SquareError};
