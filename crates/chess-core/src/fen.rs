//! Board layout text, a reduced FEN (Forsyth-Edwards Notation).
//!
//! Only the piece placement and the side to move are meaningful here, since
//! castling, en passant and move counters are not tracked. A layout reads
//! `"<placement> [w|b]"`, where the placement lists row 0 (Black's back row)
//! first. The side to move defaults to White when omitted.

use crate::{Color, Piece};
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid layout: expected 1 or 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Cells of a parsed layout, indexed `[row][col]`.
pub type Cells = [[Option<Piece>; 8]; 8];

/// Parsed layout data.
///
/// The engine is responsible for turning this into its board representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Occupants, indexed `[row][col]`.
    pub cells: Cells,
    /// The side to move.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting layout.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses a layout string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 2 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let cells = Self::parse_piece_placement(parts[0])?;

        let active_color = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            cells,
            active_color,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<Cells, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut cells: Cells = [[None; 8]; 8];
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "empty run of {} in row {}",
                            run, row
                        )));
                    }
                    col += run as usize;
                } else if let Some(piece) = Piece::from_char(c) {
                    if col < 8 {
                        cells[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in row {}",
                        c, row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "row {} has {} squares, expected 8",
                    row, col
                )));
            }
        }

        Ok(cells)
    }

    /// Serializes cells and side to move back to layout text.
    pub fn format(cells: &Cells, active_color: Color) -> String {
        let mut fen = String::new();

        for (row, occupants) in cells.iter().enumerate() {
            let mut empty_count = 0;
            for occupant in occupants {
                match occupant {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match active_color {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen
    }

    /// Converts the parsed layout back to text.
    pub fn to_fen(&self) -> String {
        Self::format(&self.cells, self.active_color)
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
