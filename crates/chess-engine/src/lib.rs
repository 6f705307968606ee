//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of pieces and the side to move
//! - [`PieceRules`] - per-piece movement geometry and attack sets
//! - [`try_move`] - move validation with typed rejections ([`MoveError`])
//! - [`is_in_check`] and [`is_checkmate`] - check and checkmate detection
//! - [`Game`] - a board bundled with its [`RulesConfig`]
//!
//! # Architecture
//!
//! Pieces are a closed enum dispatched by `match`. The validator layers turn
//! order, friendly-capture and self-check rules over the piece geometry.
//! Checkmate detection replays every candidate move on a scratch copy of the
//! board, so queries never alter the game they inspect.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_engine::Game;
//!
//! let mut game = Game::new();
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//! game.move_piece(e2, e4).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! assert!(!game.is_checkmate(Color::Black));
//! ```

mod bitboard;
mod board;
pub mod check;
mod config;
mod game;
pub mod movegen;
pub mod validate;

pub use bitboard::Bitboard;
pub use board::Board;
pub use check::{attacked_by, is_checkmate, is_in_check, is_square_attacked};
pub use config::{ConfigError, RulesConfig};
pub use game::Game;
pub use movegen::{legal_moves, PieceRules};
pub use validate::{try_move, MoveError, MoveOutcome};
