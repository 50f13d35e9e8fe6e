//! Move representation.

use crate::{Direction, Square, SquareError};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors that can occur when parsing move notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("empty move")]
    Empty,

    #[error("expected '<from>-<to>' or '<from>x<to>', got '{0}'")]
    InvalidFormat(String),

    #[error(transparent)]
    Square(#[from] SquareError),
}

/// A checkers move: a simple step or a chain of one or more jumps.
///
/// `captured` lists the squares of the jumped pieces in the order they were
/// jumped. `direction` is the direction of the last step or jump; it only
/// matters while a chain is being generated and is ignored by equality.
#[derive(Clone, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Vec<Square>,
    direction: Option<Direction>,
}

impl Move {
    /// Creates a move without captures and without a known direction.
    ///
    /// This is the shape produced by parsing user input; the engine
    /// resolves it against the generated legal moves.
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: Vec::new(),
            direction: None,
        }
    }

    /// Creates a one-square step in `direction`.
    pub fn step(from: Square, to: Square, direction: Direction) -> Self {
        Move {
            from,
            to,
            captured: Vec::new(),
            direction: Some(direction),
        }
    }

    /// Creates a move with an explicit capture list.
    pub fn with_captures(from: Square, to: Square, captured: Vec<Square>) -> Self {
        Move {
            from,
            to,
            captured,
            direction: None,
        }
    }

    /// Extends the chain by one jump over `jumped` landing on `landing`.
    pub fn push_jump(&mut self, jumped: Square, landing: Square, direction: Direction) {
        self.captured.push(jumped);
        self.to = landing;
        self.direction = Some(direction);
    }

    /// Returns the source square.
    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// Returns the jumped squares in jump order.
    #[inline]
    pub fn captured(&self) -> &[Square] {
        &self.captured
    }

    /// Returns the direction of the final step or jump, if known.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Returns true if both moves start and end on the same squares,
    /// regardless of what they capture on the way.
    #[inline]
    pub fn selects(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    /// Parses a move such as `9-13`, `22x15`, `b6-a5` or `d6xb4`.
    ///
    /// The result carries no captures; the capture list is always taken
    /// from the matching generated move.
    pub fn from_notation(s: &str) -> Result<Self, MoveParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoveParseError::Empty);
        }
        let (from, to) = s
            .split_once(['-', 'x', 'X'])
            .ok_or_else(|| MoveParseError::InvalidFormat(s.to_string()))?;
        if from.is_empty() || to.is_empty() {
            return Err(MoveParseError::InvalidFormat(s.to_string()));
        }
        Ok(Move::new(from.parse()?, to.parse()?))
    }

    /// Returns the move in coordinate notation (e.g., "b6-a5", "d6xb4").
    pub fn to_algebraic(&self) -> String {
        format!(
            "{}{}{}",
            self.from.to_algebraic(),
            self.separator(),
            self.to.to_algebraic()
        )
    }

    fn separator(&self) -> char {
        if self.is_capture() {
            'x'
        } else {
            '-'
        }
    }
}

/// Exact equality: same squares and the same captures in the same order.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.selects(other) && self.captured == other.captured
    }
}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.captured.hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self)?;
        if self.is_capture() {
            write!(f, " {:?}", self.captured.iter().map(|s| s.number()).collect::<Vec<_>>())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.separator(), self.to)
    }
}
