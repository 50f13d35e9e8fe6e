//! Text layout of a position: 32 cells plus the side to move.
//!
//! A layout lists the cells in square order (1 to 32), optionally split into
//! rows of four with `/`, followed by whitespace and the side to move:
//!
//! ```text
//! bbbb/bbbb/bbbb/..../..../wwww/wwww/wwww b
//! ```
//!
//! `b`/`w` are men, `B`/`W` are kings and `.` is an empty square.

use crate::{Cell, Color, Square};
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid cell character '{0}' at square {1}")]
    InvalidCell(char, usize),

    #[error("invalid layout: expected 32 cells, got {0}")]
    InvalidCellCount(usize),

    #[error("invalid side to move: expected 'b' or 'w', got '{0}'")]
    InvalidSideToMove(String),
}

/// Parsed layout data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Cells indexed by square index (square number - 1).
    pub cells: [Cell; Square::COUNT],
    /// The side to move.
    pub side_to_move: Color,
}

impl Layout {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "bbbb/bbbb/bbbb/..../..../wwww/wwww/wwww b";

    /// Parses a layout string.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(LayoutError::InvalidPartCount(parts.len()));
        }

        let mut cells = [Cell::Empty; Square::COUNT];
        let mut count = 0;
        for c in parts[0].chars().filter(|&c| c != '/') {
            let cell = Cell::from_char(c).ok_or(LayoutError::InvalidCell(c, count + 1))?;
            if count < Square::COUNT {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != Square::COUNT {
            return Err(LayoutError::InvalidCellCount(count));
        }

        let mut side = parts[1].chars();
        let side_to_move = match (side.next().and_then(Color::from_char), side.next()) {
            (Some(color), None) => color,
            _ => return Err(LayoutError::InvalidSideToMove(parts[1].to_string())),
        };

        Ok(Layout {
            cells,
            side_to_move,
        })
    }

    /// Converts the layout back to a string, with row separators.
    pub fn to_layout_string(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(4)
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect();
        format!("{} {}", rows.join("/"), self.side_to_move.to_char())
    }
}

impl Default for Layout {
    fn default() -> Self {
        let mut cells = [Cell::Empty; Square::COUNT];
        cells[..12].fill(Cell::BlackMan);
        cells[20..].fill(Cell::WhiteMan);
        Layout {
            cells,
            side_to_move: Color::Black,
        }
    }
}
