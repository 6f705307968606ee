//! Game session management.
//!
//! The [`Game`] struct owns one [`Board`] and the [`RulesConfig`] that
//! governs it. Independent games are independent values; nothing is shared
//! between them.

use crate::check::{is_checkmate, is_in_check};
use crate::movegen::legal_moves;
use crate::validate::{try_move, MoveError, MoveOutcome};
use crate::{Board, RulesConfig};
use chess_core::{Color, FenError, Move, Piece, Square};

/// A chess game: a board, its side to move, and the rules in force.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Current board.
    board: Board,
    /// Rules applied to every move.
    config: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting layout and default rules.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a new game with the standard starting layout.
    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_board(Board::startpos(), config)
    }

    /// Creates a game from a custom board.
    pub fn from_board(board: Board, config: RulesConfig) -> Self {
        Game { board, config }
    }

    /// Creates a game from layout text, with default rules.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::from_fen(fen)?;
        Ok(Self::from_board(board, RulesConfig::default()))
    }

    /// Returns a reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the rules in force.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    /// Returns the piece at the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Validates and plays a move.
    ///
    /// On success the turn passes to the other side. On failure the game is
    /// unchanged.
    pub fn move_piece(&mut self, start: Square, end: Square) -> Result<MoveOutcome, MoveError> {
        try_move(&mut self.board, start, end, &self.config)
    }

    /// Plays a move given as raw `(row, col)` pairs.
    ///
    /// Coordinates outside `0..8` fail with [`MoveError::OutOfBounds`] before
    /// any rule is consulted.
    pub fn move_coords(
        &mut self,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<MoveOutcome, MoveError> {
        let start = Square::try_from(start)?;
        let end = Square::try_from(end)?;
        self.move_piece(start, end)
    }

    /// Returns true if the king of `color` is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Returns true if `color` is in check with no move that escapes it.
    ///
    /// The query never changes the game.
    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(&self.board, color, &self.config)
    }

    /// Returns the winner if either side is checkmated.
    pub fn winner(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.is_checkmate(color))
            .map(Color::opposite)
    }

    /// Returns all moves the side to move may play.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, &self.config)
    }

    /// Returns the current board as layout text.
    pub fn to_fen(&self) -> String {
        self.board.to_fen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{PieceKind, SquareError};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert!(!game.is_in_check(Color::White));
        assert_eq!(game.winner(), None);
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn moves_alternate() {
        let mut game = Game::new();
        game.move_piece(sq(6, 4), sq(4, 4)).unwrap();
        assert_eq!(game.turn(), Color::Black);
        game.move_piece(sq(1, 4), sq(3, 4)).unwrap();
        assert_eq!(game.turn(), Color::White);
        assert!(matches!(
            game.move_piece(sq(1, 3), sq(3, 3)),
            Err(MoveError::WrongTurn { .. })
        ));
    }

    #[test]
    fn move_coords_bounds() {
        let mut game = Game::new();
        let before = game.clone();
        let err = game.move_coords((6, 4), (8, 4)).unwrap_err();
        assert_eq!(
            err,
            MoveError::OutOfBounds(SquareError::OutOfBounds { row: 8, col: 4 })
        );
        assert_eq!(game, before);

        game.move_coords((7, 6), (5, 5)).unwrap();
        assert_eq!(game.piece_at(sq(5, 5)), Some(Piece::white(PieceKind::Knight)));
    }

    #[test]
    fn checkmate_fools_mate() {
        let mut game = Game::new();
        game.move_piece(sq(6, 5), sq(5, 5)).unwrap();
        game.move_piece(sq(1, 4), sq(3, 4)).unwrap();
        game.move_piece(sq(6, 6), sq(4, 6)).unwrap();
        game.move_piece(sq(0, 3), sq(4, 7)).unwrap();
        assert!(game.is_in_check(Color::White));
        assert!(game.is_checkmate(Color::White));
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn self_check_allowed_by_config() {
        let config = RulesConfig {
            allow_self_check: true,
        };
        let board = Board::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w").unwrap();
        let mut game = Game::from_board(board.clone(), config);
        assert!(game.move_piece(sq(6, 4), sq(5, 3)).is_ok());

        let mut strict = Game::from_board(board, RulesConfig::default());
        assert!(matches!(
            strict.move_piece(sq(6, 4), sq(5, 3)),
            Err(MoveError::LeavesKingInCheck(_))
        ));
    }

    #[test]
    fn games_are_independent() {
        let mut first = Game::new();
        let second = Game::new();
        first.move_piece(sq(6, 4), sq(4, 4)).unwrap();
        assert_ne!(first.to_fen(), second.to_fen());
        assert_eq!(second.turn(), Color::White);
    }
}
