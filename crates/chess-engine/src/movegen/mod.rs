//! Per-piece movement rules.
//!
//! [`PieceRules`] is the capability every piece provides: a geometric
//! legality test for a single move and the set of squares it attacks. Both
//! are pure functions of the board snapshot. Turn order, friendly captures
//! and self-check are handled by [`crate::validate`].

mod attacks;

use crate::validate::try_move;
use crate::{Bitboard, Board, RulesConfig};
use chess_core::{Color, Move, Piece, PieceKind, Square};

pub use attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};

/// Movement and attack rules shared by all piece kinds.
pub trait PieceRules {
    /// Returns true if the piece's movement pattern connects `start` to `end`.
    ///
    /// Sliding pieces must have every square strictly between the two empty.
    /// Pawns step forward onto empty squares (two steps only from their
    /// starting row, through an empty square) and step diagonally forward
    /// only onto an enemy. Start and end may coincide; no occupant check is
    /// made at `start`.
    fn is_valid_move(&self, start: Square, end: Square, board: &Board) -> bool;

    /// Returns the squares this piece would threaten if it stood on `at`.
    fn attacks(&self, at: Square, board: &Board) -> Bitboard;
}

impl PieceRules for Piece {
    fn is_valid_move(&self, start: Square, end: Square, board: &Board) -> bool {
        let m = Move::new(start, end);
        match self.kind {
            PieceKind::Pawn => pawn_move(m, self.color, board),
            PieceKind::Rook => rook_move(m, board),
            PieceKind::Knight => knight_move(m),
            PieceKind::Bishop => bishop_move(m, board),
            PieceKind::Queen => rook_move(m, board) || bishop_move(m, board),
            PieceKind::King => king_move(m),
        }
    }

    fn attacks(&self, at: Square, board: &Board) -> Bitboard {
        match self.kind {
            PieceKind::Pawn => pawn_attacks(at, self.color, board),
            PieceKind::Rook => rook_attacks(at, self.color, board),
            PieceKind::Knight => knight_attacks(at),
            PieceKind::Bishop => bishop_attacks(at, self.color, board),
            PieceKind::Queen => queen_attacks(at, self.color, board),
            PieceKind::King => king_attacks(at),
        }
    }
}

fn pawn_move(m: Move, color: Color, board: &Board) -> bool {
    let (d_row, d_col) = m.delta();
    let forward = color.pawn_direction();

    if d_col == 0 {
        if m.start.row() == color.pawn_row() && d_row == 2 * forward {
            return board.is_empty(m.end) && path_clear(m, board);
        }
        return d_row == forward && board.is_empty(m.end);
    }

    d_col.abs() == 1
        && d_row == forward
        && board
            .piece_at(m.end)
            .is_some_and(|target| target.color != color)
}

fn rook_move(m: Move, board: &Board) -> bool {
    let (d_row, d_col) = m.delta();
    (d_row == 0 || d_col == 0) && path_clear(m, board)
}

fn bishop_move(m: Move, board: &Board) -> bool {
    let (d_row, d_col) = m.delta();
    d_row.abs() == d_col.abs() && path_clear(m, board)
}

fn knight_move(m: Move) -> bool {
    let (d_row, d_col) = m.delta();
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

fn king_move(m: Move) -> bool {
    let (d_row, d_col) = m.delta();
    d_row.abs() <= 1 && d_col.abs() <= 1
}

/// Returns true if every square strictly between the ends of a straight or
/// diagonal move is empty.
fn path_clear(m: Move, board: &Board) -> bool {
    let (d_row, d_col) = m.delta();
    let step = (d_row.signum(), d_col.signum());
    let mut current = m.start.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == m.end {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step.0, step.1);
    }
    false
}

/// Generates every move the side to move may legally make.
///
/// Each of the 64 destinations is tried for each piece through the
/// validator on a scratch copy, so the result honors the same rules as
/// [`try_move`].
pub fn legal_moves(board: &Board, config: &RulesConfig) -> Vec<Move> {
    let us = board.turn();
    let mut moves = Vec::new();
    for (start, _) in board.pieces(us) {
        for end in Square::all() {
            let mut scratch = board.clone();
            if try_move(&mut scratch, start, end, config).is_ok() {
                moves.push(Move::new(start, end));
            }
        }
    }
    moves
}
