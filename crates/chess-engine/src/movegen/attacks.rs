//! Attack set generation for all piece kinds.
//!
//! Sliding and pawn attacks depend on occupancy and on the attacker's color:
//! a ray stops at the first occupant and includes it only when it is an
//! enemy. Knight and king attacks are the bounds-checked offsets, whatever
//! stands on them.

use crate::{Bitboard, Board};
use chess_core::{Color, Square};

/// Precomputed knight attack tables.
const KNIGHT_ATTACKS: [Bitboard; 64] = compute_leaper_attacks(&KNIGHT_OFFSETS);

/// Precomputed king attack tables.
const KING_ATTACKS: [Bitboard; 64] = compute_leaper_attacks(&KING_OFFSETS);

/// Knight offsets as (row delta, col delta).
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// King offsets as (row delta, col delta).
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal ray directions.
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions.
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns knight attacks from the given square.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index() as usize]
}

/// Returns king attacks from the given square.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index() as usize]
}

/// Returns the forward diagonals of a `color` pawn on `sq` that hold an enemy.
pub fn pawn_attacks(sq: Square, color: Color, board: &Board) -> Bitboard {
    let forward = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(|d_col| sq.offset(forward, d_col))
        .filter(|&target| is_enemy(board, target, color))
        .collect()
}

/// Returns orthogonal ray attacks of a `color` rook on `sq`.
pub fn rook_attacks(sq: Square, color: Color, board: &Board) -> Bitboard {
    ray_attacks(sq, color, board, &ROOK_DIRECTIONS)
}

/// Returns diagonal ray attacks of a `color` bishop on `sq`.
pub fn bishop_attacks(sq: Square, color: Color, board: &Board) -> Bitboard {
    ray_attacks(sq, color, board, &BISHOP_DIRECTIONS)
}

/// Returns queen attacks (rook and bishop rays combined).
pub fn queen_attacks(sq: Square, color: Color, board: &Board) -> Bitboard {
    rook_attacks(sq, color, board) | bishop_attacks(sq, color, board)
}

fn ray_attacks(sq: Square, color: Color, board: &Board, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(d_row, d_col) in directions {
        let mut current = sq.offset(d_row, d_col);
        while let Some(target) = current {
            if let Some(occupant) = board.piece_at(target) {
                if occupant.color != color {
                    attacks.set(target);
                }
                break;
            }
            attacks.set(target);
            current = target.offset(d_row, d_col);
        }
    }
    attacks
}

#[inline]
fn is_enemy(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).is_some_and(|p| p.color != color)
}

/// Computes offset attacks for all squares at compile time.
const fn compute_leaper_attacks(offsets: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0i8;

    while sq < 64 {
        let row = sq / 8;
        let col = sq % 8;
        let mut bb = 0u64;

        let mut i = 0;
        while i < offsets.len() {
            let r = row + offsets[i].0;
            let c = col + offsets[i].1;
            if r >= 0 && r < 8 && c >= 0 && c < 8 {
                bb |= 1u64 << ((r * 8 + c) as u32);
            }
            i += 1;
        }

        attacks[sq as usize] = Bitboard(bb);
        sq += 1;
    }

    attacks
}
