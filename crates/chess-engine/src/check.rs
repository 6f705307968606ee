//! Check and checkmate detection.

use crate::movegen::PieceRules;
use crate::validate::try_move;
use crate::{Bitboard, Board, RulesConfig};
use chess_core::{Color, Square};

/// Returns the union of the attack sets of every `color` piece.
pub fn attacked_by(board: &Board, color: Color) -> Bitboard {
    let mut attacked = Bitboard::EMPTY;
    for (sq, piece) in board.pieces(color) {
        attacked |= piece.attacks(sq, board);
    }
    attacked
}

/// Returns true if any `by` piece attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(sq, piece)| piece.attacks(sq, board).contains(target))
}

/// Returns true if the king of `color` is attacked by an enemy piece.
///
/// A board without a king of that color is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

/// Returns true if `color` is in check and no move gets it out.
///
/// Every piece of `color` is tried against all 64 destinations through the
/// validator, each on its own copy of the board with `color` to move. The
/// board passed in is never modified, whoever's turn it is.
pub fn is_checkmate(board: &Board, color: Color, config: &RulesConfig) -> bool {
    if !is_in_check(board, color) {
        return false;
    }

    for (start, _) in board.pieces(color) {
        for end in Square::all() {
            let mut scratch = board.clone();
            scratch.set_turn(color);
            if try_move(&mut scratch, start, end, config).is_ok() && !is_in_check(&scratch, color)
            {
                tracing::debug!("{} escapes check with {}{}", color, start, end);
                return false;
            }
        }
    }

    true
}
