//! Playable square representation and coordinate conversion.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building a square from a number or coordinate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("square {0} is outside the range 1-32")]
    OutOfRange(u8),

    #[error("invalid coordinate: '{0}'")]
    InvalidCoordinate(String),

    #[error("{0} is a light square and cannot hold a piece")]
    NotPlayable(String),
}

/// A file (column) on the board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the board, from 1 to 8. Rank 8 is printed at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One of the 32 playable dark squares, numbered 1-32.
///
/// Numbering zig-zags from the top of the board:
///
/// ```text
/// 8  . 1 . 2 . 3 . 4
/// 7  5 . 6 . 7 . 8 .
/// 6  . 9 .10 .11 .12
/// 5 13 .14 .15 .16 .
/// 4  .17 .18 .19 .20
/// 3 21 .22 .23 .24 .
/// 2  .25 .26 .27 .28
/// 1 29 .30 .31 .32 .
///    a b c d e f g h
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of playable squares.
    pub const COUNT: usize = 32;

    /// Creates a square from its number (1-32).
    #[inline]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 32 {
            Some(Square(number))
        } else {
            None
        }
    }

    /// Creates a square from a board index (0-31).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Square(index as u8 + 1))
        } else {
            None
        }
    }

    /// Iterates over all squares in numbering order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=32).map(Square)
    }

    /// Returns the square number (1-32).
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns the board index (0-31).
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the board row, 0 for the top row (squares 1-4).
    #[inline]
    pub const fn row(self) -> u8 {
        (self.0 - 1) / 4
    }

    /// Returns the file of this square.
    ///
    /// Even rows start on file b, odd rows on file a.
    #[inline]
    pub const fn file(self) -> File {
        let column = (self.0 - 1) % 4;
        let index = if self.row() % 2 == 0 {
            column * 2 + 1
        } else {
            column * 2
        };
        match File::from_index(index) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(7 - self.row()) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the (file, rank) coordinate of this square.
    #[inline]
    pub const fn coord(self) -> (File, Rank) {
        (self.file(), self.rank())
    }

    /// Returns the square at a coordinate, or `None` for a light square.
    #[inline]
    pub const fn from_coord(file: File, rank: Rank) -> Option<Self> {
        let row = 7 - rank.index();
        let column = file.index();
        if (row + column) % 2 == 0 {
            return None;
        }
        Some(Square(row * 4 + column / 2 + 1))
    }

    /// Parses a square from a coordinate (e.g., "b6").
    pub fn from_algebraic(s: &str) -> Result<Self, SquareError> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (File::from_char(f), Rank::from_char(r)),
            _ => return Err(SquareError::InvalidCoordinate(s.to_string())),
        };
        match (file, rank) {
            (Some(file), Some(rank)) => Square::from_coord(file, rank)
                .ok_or_else(|| SquareError::NotPlayable(s.to_ascii_lowercase())),
            _ => Err(SquareError::InvalidCoordinate(s.to_string())),
        }
    }

    /// Returns the coordinate notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Square::new(number).ok_or(SquareError::OutOfRange(number))
    }
}

/// Accepts either a square number ("9") or a coordinate ("b6").
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            let number = s
                .parse::<u8>()
                .map_err(|_| SquareError::InvalidCoordinate(s.to_string()))?;
            return Square::try_from(number);
        }
        Square::from_algebraic(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
