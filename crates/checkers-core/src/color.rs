//! Player color representation.

use crate::Direction;

/// Represents the two players. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the directions a man of this color moves in.
    ///
    /// Black sets up on squares 1-12 at the top of the board and moves
    /// down, White sets up on squares 21-32 and moves up.
    #[inline]
    pub const fn forward(self) -> &'static [Direction] {
        match self {
            Color::Black => &[Direction::SW, Direction::SE],
            Color::White => &[Direction::NW, Direction::NE],
        }
    }

    /// Returns the board row (0 = top) on which men of this color promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Black => 7,
            Color::White => 0,
        }
    }

    /// Returns the layout character for this color ('b' or 'w').
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    /// Parses a layout character ('b' or 'w', case-insensitive).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(Color::Black),
            'w' => Some(Color::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}
