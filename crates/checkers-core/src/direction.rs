//! Diagonal directions.

use std::fmt;

/// One of the four diagonals, named from the point of view of a board
/// printed with rank 8 (squares 1-4) at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    NW = 0,
    NE = 1,
    SW = 2,
    SE = 3,
}

impl Direction {
    /// All directions in table order.
    pub const ALL: [Direction; 4] = [Direction::NW, Direction::NE, Direction::SW, Direction::SE];

    /// Returns the index (0-3) used by the adjacency table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the direction pointing the other way along the same diagonal.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::NW => Direction::SE,
            Direction::NE => Direction::SW,
            Direction::SW => Direction::NE,
            Direction::SE => Direction::NW,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::NW => "NW",
            Direction::NE => "NE",
            Direction::SW => "SW",
            Direction::SE => "SE",
        };
        write!(f, "{}", name)
    }
}
