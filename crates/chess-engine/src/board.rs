//! Board state: the 8x8 grid of occupants and the side to move.

use chess_core::{Cells, Color, FenError, FenParser, Piece, PieceKind, Square};

use crate::Bitboard;

/// The back row piece order, from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete board state.
///
/// Each cell owns at most one piece. `Board` performs no rule checks; the
/// validator in [`crate::validate`] is the only caller that should mutate a
/// board during play.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Occupants indexed `[row][col]`.
    cells: Cells,

    /// The side to move.
    turn: Color,
}

impl Board {
    /// Creates an empty board with White to move.
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            turn: Color::White,
        }
    }

    /// Creates the standard starting layout with White to move.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for col in 0..8 {
                board.cells[back][col] = Some(Piece::new(BACK_ROW[col], color));
                board.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Creates a board from layout text (see [`FenParser`]).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Board {
            cells: parsed.cells,
            turn: parsed.active_color,
        })
    }

    /// Converts the board to layout text.
    pub fn to_fen(&self) -> String {
        FenParser::format(&self.cells, self.turn)
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places a piece, returning whatever occupied the square before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].replace(piece)
    }

    /// Removes and returns the piece at the given square.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Moves whatever is at `start` to `end` without any rule check.
    ///
    /// `start` is left empty. The previous occupant of `end` is returned and
    /// is no longer on the board.
    pub fn relocate(&mut self, start: Square, end: Square) -> Option<Piece> {
        match self.take(start) {
            Some(piece) => self.put(end, piece),
            None => self.take(end),
        }
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Sets the side to move.
    #[inline]
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Hands the move to the other side.
    #[inline]
    pub fn flip_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Returns every occupied square with its piece, row by row.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Returns the squares and pieces belonging to `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns a bitboard of all occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.occupants().map(|(sq, _)| sq).collect()
    }

    /// Returns the square of the first king of `color` found, scanning row by row.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}
