//! Move generation.
//!
//! This module enumerates the legal moves of a single piece, including
//! branching capture chains, and applies the forced-capture rule across
//! all pieces of a color.

mod captures;
pub mod perft;

use crate::topology::neighbor;
use crate::{Board, GameError};
use checkers_core::{Cell, Color, Direction, Move, Piece, Square};

pub use captures::MAX_CHAIN_LENGTH;

const KING_DIRECTIONS: &[Direction] = &Direction::ALL;

/// A list of moves produced by one generation query.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if any move captures.
    pub fn has_captures(&self) -> bool {
        self.moves.iter().any(Move::is_capture)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }

    /// Finds the move the caller means by `candidate`.
    ///
    /// Moves are matched on their from and to squares. When several
    /// capture paths share both, the one with exactly the candidate's
    /// captures wins, otherwise the first generated path is used.
    pub fn find(&self, candidate: &Move) -> Option<&Move> {
        self.moves
            .iter()
            .find(|m| *m == candidate)
            .or_else(|| self.moves.iter().find(|m| m.selects(candidate)))
    }

    /// Returns true if some move has the same from and to squares.
    pub fn selects(&self, candidate: &Move) -> bool {
        self.moves.iter().any(|m| m.selects(candidate))
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns the directions the piece in `cell` may move and capture in.
///
/// Kings use all four diagonals; men only their color's forward pair.
pub fn allowed_directions(cell: Cell) -> Option<&'static [Direction]> {
    match (cell.piece()?, cell.color()?) {
        (Piece::King, _) => Some(KING_DIRECTIONS),
        (Piece::Man, color) => Some(color.forward()),
    }
}

/// Generates every maximal move for the piece on `square`, ignoring what
/// the other pieces of its color could do.
///
/// If the piece can capture, only its capture chains are returned.
pub fn generate_moves(board: &Board, square: Square) -> Result<MoveList, GameError> {
    let cell = board.cell(square);
    let directions = allowed_directions(cell).ok_or(GameError::EmptySquare(square))?;

    let mut moves = MoveList::new();
    moves.extend(captures::capture_chains(board, square, directions));

    if moves.is_empty() {
        for &direction in directions {
            if let Some(to) = neighbor(square, direction) {
                if board.is_empty(to) {
                    moves.push(Move::step(square, to, direction));
                }
            }
        }
    }

    tracing::trace!(%square, count = moves.len(), "generated moves");
    Ok(moves)
}

/// Returns true if any piece of `color` has a capture available.
pub fn must_capture(board: &Board, color: Color) -> bool {
    board.squares_of(color).any(|square| {
        // only pieces of `color` are visited, never an empty square
        let directions = allowed_directions(board.cell(square)).unwrap_or(&[]);
        captures::has_capture(board, square, directions)
    })
}

/// Returns the moves the piece on `square` may legally make this turn.
///
/// While any piece of the same color can capture, pieces without a
/// capture get no moves at all.
pub fn legal_moves(board: &Board, square: Square) -> Result<MoveList, GameError> {
    let mut moves = generate_moves(board, square)?;
    if !moves.has_captures() {
        let color = board
            .cell(square)
            .color()
            .ok_or(GameError::EmptySquare(square))?;
        if must_capture(board, color) {
            moves.retain(Move::is_capture);
        }
    }
    Ok(moves)
}

/// Returns every legal move for `color`, in square order.
pub fn all_legal_moves(board: &Board, color: Color) -> MoveList {
    let forced = must_capture(board, color);
    let mut moves = MoveList::new();
    for square in board.squares_of(color) {
        if let Ok(piece_moves) = generate_moves(board, square) {
            moves.extend(
                piece_moves
                    .into_iter()
                    .filter(|m| !forced || m.is_capture()),
            );
        }
    }
    moves
}

/// Applies `m` to a copy of `board` without checking legality.
///
/// The moving piece is relocated, every captured square is cleared and a
/// man reaching its promotion row is crowned.
pub fn make_move(board: &Board, m: &Move) -> Board {
    let mut next = *board;
    let mut cell = next.take(m.from());
    for &captured in m.captured() {
        next.take(captured);
    }
    if let Some(color) = cell.color() {
        if m.to().row() == color.promotion_row() {
            cell = cell.crowned();
        }
    }
    next.set(m.to(), cell);
    next
}
