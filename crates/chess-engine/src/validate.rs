//! Move validation.
//!
//! [`try_move`] layers the board-level rules on top of a piece's own
//! geometry. The checks run in a fixed order and each assumes the earlier
//! ones passed:
//!
//! 1. a piece stands on the start square,
//! 2. it belongs to the side to move,
//! 3. its movement pattern reaches the end square,
//! 4. the end square does not hold a piece of the same color,
//! 5. the move does not leave the mover's king attacked (unless the
//!    configuration allows it).
//!
//! A rejected move leaves the board untouched.

use crate::check::is_in_check;
use crate::movegen::PieceRules;
use crate::{Board, RulesConfig};
use chess_core::{Color, Move, Piece, Square, SquareError};
use thiserror::Error;

/// Reasons a move is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPieceAtStart(Square),

    #[error("it is {turn}'s turn, cannot move the {piece}")]
    WrongTurn { turn: Color, piece: Piece },

    #[error("the {piece} cannot move {mov}")]
    IllegalGeometry { piece: Piece, mov: Move },

    #[error("cannot capture own piece at {0}")]
    FriendlyCapture(Square),

    #[error("{0} would leave the king in check")]
    LeavesKingInCheck(Move),

    #[error(transparent)]
    OutOfBounds(#[from] SquareError),
}

/// The result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was played.
    pub mov: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The enemy piece removed from the end square, if any.
    pub captured: Option<Piece>,
}

/// Validates a move and, if it is accepted, plays it on `board`.
///
/// On success the piece is relocated, any captured piece is discarded and
/// the turn passes to the other side.
pub fn try_move(
    board: &mut Board,
    start: Square,
    end: Square,
    config: &RulesConfig,
) -> Result<MoveOutcome, MoveError> {
    let mov = Move::new(start, end);
    let result = check_move(board, mov, config);
    match result {
        Ok(piece) => {
            let captured = board.relocate(start, end);
            board.flip_turn();
            if let Some(victim) = captured {
                tracing::debug!("{} captured {} at {}", piece, victim, end);
            }
            tracing::debug!("{} played {}", piece, mov);
            Ok(MoveOutcome {
                mov,
                piece,
                captured,
            })
        }
        Err(e) => {
            tracing::trace!("rejected {}: {}", mov, e);
            Err(e)
        }
    }
}

/// Runs every rule against `mov` without touching the board.
fn check_move(board: &Board, mov: Move, config: &RulesConfig) -> Result<Piece, MoveError> {
    let piece = board
        .piece_at(mov.start)
        .ok_or(MoveError::NoPieceAtStart(mov.start))?;

    if piece.color != board.turn() {
        return Err(MoveError::WrongTurn {
            turn: board.turn(),
            piece,
        });
    }

    if !piece.is_valid_move(mov.start, mov.end, board) {
        return Err(MoveError::IllegalGeometry { piece, mov });
    }

    if board
        .piece_at(mov.end)
        .is_some_and(|target| target.color == piece.color)
    {
        return Err(MoveError::FriendlyCapture(mov.end));
    }

    if !config.allow_self_check {
        let mut after = board.clone();
        after.relocate(mov.start, mov.end);
        if is_in_check(&after, piece.color) {
            return Err(MoveError::LeavesKingInCheck(mov));
        }
    }

    Ok(piece)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn strict() -> RulesConfig {
        RulesConfig::default()
    }

    fn lenient() -> RulesConfig {
        RulesConfig {
            allow_self_check: true,
        }
    }

    #[test]
    fn accepts_pawn_push_and_flips_turn() {
        let mut board = Board::startpos();
        let outcome = try_move(&mut board, sq(6, 4), sq(4, 4), &strict()).unwrap();
        assert_eq!(outcome.piece, Piece::white(PieceKind::Pawn));
        assert_eq!(outcome.captured, None);
        assert_eq!(board.turn(), Color::Black);
        assert!(board.is_empty(sq(6, 4)));
    }

    #[test]
    fn rejects_empty_start() {
        let mut board = Board::startpos();
        let before = board.clone();
        let err = try_move(&mut board, sq(4, 4), sq(3, 4), &strict()).unwrap_err();
        assert_eq!(err, MoveError::NoPieceAtStart(sq(4, 4)));
        assert_eq!(board, before);
    }

    #[test]
    fn rejects_wrong_turn() {
        let mut board = Board::startpos();
        let err = try_move(&mut board, sq(1, 4), sq(3, 4), &strict()).unwrap_err();
        assert_eq!(
            err,
            MoveError::WrongTurn {
                turn: Color::White,
                piece: Piece::black(PieceKind::Pawn),
            }
        );
        assert_eq!(board.turn(), Color::White);
    }

    #[test]
    fn rejects_bad_geometry() {
        let mut board = Board::startpos();
        let err = try_move(&mut board, sq(6, 4), sq(3, 4), &strict()).unwrap_err();
        assert!(matches!(err, MoveError::IllegalGeometry { .. }));
    }

    #[test]
    fn geometry_is_checked_before_friendly_capture() {
        // Rook a1 to a2 is geometrically fine but lands on its own pawn.
        let mut board = Board::startpos();
        let err = try_move(&mut board, sq(7, 0), sq(6, 0), &strict()).unwrap_err();
        assert_eq!(err, MoveError::FriendlyCapture(sq(6, 0)));

        // Rook a1 to a3 jumps over that pawn: geometry fails first.
        let err = try_move(&mut board, sq(7, 0), sq(5, 0), &strict()).unwrap_err();
        assert!(matches!(err, MoveError::IllegalGeometry { .. }));
    }

    #[test]
    fn null_move_is_a_friendly_capture() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w").unwrap();
        let err = try_move(&mut board, sq(7, 4), sq(7, 4), &strict()).unwrap_err();
        assert_eq!(err, MoveError::FriendlyCapture(sq(7, 4)));
    }

    #[test]
    fn capture_reports_victim() {
        let mut board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w").unwrap();
        let outcome = try_move(&mut board, sq(4, 4), sq(3, 3), &strict()).unwrap();
        assert_eq!(outcome.captured, Some(Piece::black(PieceKind::Pawn)));
        assert_eq!(board.piece_at(sq(3, 3)), Some(Piece::white(PieceKind::Pawn)));
        assert_eq!(board.pieces(Color::Black).count(), 1);
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        // White bishop on e2 is pinned by the rook on e8.
        let fen = "4r2k/8/8/8/8/8/4B3/4K3 w";
        let mut board = Board::from_fen(fen).unwrap();
        let err = try_move(&mut board, sq(6, 4), sq(5, 3), &strict()).unwrap_err();
        assert_eq!(err, MoveError::LeavesKingInCheck(Move::new(sq(6, 4), sq(5, 3))));
        assert_eq!(board.to_fen(), fen);

        // With self-check allowed the move is played anyway.
        let outcome = try_move(&mut board, sq(6, 4), sq(5, 3), &lenient()).unwrap();
        assert_eq!(outcome.captured, None);
        assert!(is_in_check(&board, Color::White));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::from_fen("3r3k/8/8/8/8/8/8/4K3 w").unwrap();
        let err = try_move(&mut board, sq(7, 4), sq(7, 3), &strict()).unwrap_err();
        assert!(matches!(err, MoveError::LeavesKingInCheck(_)));
        assert!(try_move(&mut board, sq(7, 4), sq(7, 5), &strict()).is_ok());
    }

    #[test]
    fn error_display() {
        let err = MoveError::NoPieceAtStart(sq(4, 4));
        assert_eq!(err.to_string(), "no piece at e4");

        let err = MoveError::FriendlyCapture(sq(7, 0));
        assert!(err.to_string().contains("a1"));

        let err: MoveError = SquareError::OutOfBounds { row: 9, col: 0 }.into();
        assert!(err.to_string().contains("(9, 0)"));
    }
}
