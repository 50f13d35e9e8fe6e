//! Piece and cell representation.

use crate::Color;

/// The rank of a checkers piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Man = 0,
    King = 1,
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Man => write!(f, "Man"),
            Piece::King => write!(f, "King"),
        }
    }
}

/// The contents of one playable square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    BlackMan,
    BlackKing,
    WhiteMan,
    WhiteKing,
}

impl Cell {
    /// Creates an occupied cell.
    #[inline]
    pub const fn new(piece: Piece, color: Color) -> Self {
        match (piece, color) {
            (Piece::Man, Color::Black) => Cell::BlackMan,
            (Piece::King, Color::Black) => Cell::BlackKing,
            (Piece::Man, Color::White) => Cell::WhiteMan,
            (Piece::King, Color::White) => Cell::WhiteKing,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the color of the piece, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::BlackMan | Cell::BlackKing => Some(Color::Black),
            Cell::WhiteMan | Cell::WhiteKing => Some(Color::White),
        }
    }

    /// Returns the rank of the piece, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::BlackMan | Cell::WhiteMan => Some(Piece::Man),
            Cell::BlackKing | Cell::WhiteKing => Some(Piece::King),
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::BlackKing | Cell::WhiteKing)
    }

    /// Returns true if both cells hold pieces of different colors.
    #[inline]
    pub fn is_opponent_of(self, other: Cell) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// Returns the king of the same color. Kings and empty cells are unchanged.
    #[inline]
    pub const fn crowned(self) -> Self {
        match self {
            Cell::BlackMan => Cell::BlackKing,
            Cell::WhiteMan => Cell::WhiteKing,
            other => other,
        }
    }

    /// Returns the layout character: `b`/`B` for black, `w`/`W` for white,
    /// uppercase for kings, `.` for an empty square.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::BlackMan => 'b',
            Cell::BlackKing => 'B',
            Cell::WhiteMan => 'w',
            Cell::WhiteKing => 'W',
        }
    }

    /// Parses a layout character. Both `.` and a space mean empty.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'b' => Some(Cell::BlackMan),
            'B' => Some(Cell::BlackKing),
            'w' => Some(Cell::WhiteMan),
            'W' => Some(Cell::WhiteKing),
            _ => None,
        }
    }
}
