//! Move representation.

use crate::Square;
use std::fmt;

/// A move from one square to another.
///
/// Moves carry no flags: castling, en passant and promotion are not part of
/// the rules this workspace implements.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Move { start, end }
    }

    /// Returns the row and column deltas from start to end.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        (
            self.end.row() as i8 - self.start.row() as i8,
            self.end.col() as i8 - self.start.col() as i8,
        )
    }

    /// Returns the move in coordinate notation (e.g., "e2e4").
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn move_delta() {
        let m = Move::new(sq(6, 4), sq(4, 4));
        assert_eq!(m.delta(), (-2, 0));
        let m = Move::new(sq(0, 1), sq(2, 2));
        assert_eq!(m.delta(), (2, 1));
    }

    #[test]
    fn move_coordinate() {
        let m = Move::new(sq(6, 4), sq(4, 4));
        assert_eq!(m.to_coordinate(), "e2e4");
        let m = Move::new(sq(0, 0), sq(7, 7));
        assert_eq!(m.to_coordinate(), "a8h1");
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(sq(6, 4), sq(4, 4));
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }
}
