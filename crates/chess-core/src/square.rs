//! Board square representation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when building a square from untrusted input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("coordinates ({row}, {col}) are off the board; both must be in 0..8")]
    OutOfBounds { row: i64, col: i64 },

    #[error("malformed coordinates {0:?}: expected \"row,col\"")]
    Malformed(String),
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed row-major from Black's back row:
/// - (0, 0) = a8 = 0, (0, 7) = h8 = 7
/// - (7, 0) = a1 = 56, (7, 7) = h1 = 63
///
/// A `Square` is always on the board; fallible constructors reject anything else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, or `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e2" is row 6, col 4).
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Square::new(b'8' - rank, file - b'a')
    }

    /// Returns an iterator over all 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7), where row 0 is Black's back row.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7), where column 0 is the a-file.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square shifted by the given deltas, if it stays on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let (Some(row), Some(col)) = (
            (self.row() as i8).checked_add(d_row),
            (self.col() as i8).checked_add(d_col),
        ) else {
            return None;
        };
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }

    /// Returns a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> u64 {
        1u64 << self.0
    }
}

impl TryFrom<(i64, i64)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square((row * 8 + col) as u8))
        } else {
            Err(SquareError::OutOfBounds { row, col })
        }
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        let row = i64::try_from(row).unwrap_or(i64::MAX);
        let col = i64::try_from(col).unwrap_or(i64::MAX);
        Square::try_from((row, col))
    }
}

/// Parses the `row,col` form, e.g. `"6,4"`.
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SquareError::Malformed(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(malformed)?;
        let row: i64 = row.trim().parse().map_err(|_| malformed())?;
        let col: i64 = col.trim().parse().map_err(|_| malformed())?;
        Square::try_from((row, col))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
