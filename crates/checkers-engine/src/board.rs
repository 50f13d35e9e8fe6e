//! Board representation.

use checkers_core::{Cell, Color, Layout, LayoutError, Square};
use std::fmt;

/// The 32 playable cells, indexed by square index (square number - 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; Square::COUNT],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [Cell::Empty; Square::COUNT],
        }
    }

    /// Creates the standard starting position: black men on 1-12, white
    /// men on 21-32.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for (i, cell) in board.cells.iter_mut().enumerate() {
            *cell = match i {
                0..=11 => Cell::BlackMan,
                20..=31 => Cell::WhiteMan,
                _ => Cell::Empty,
            };
        }
        board
    }

    /// Creates a board from already-parsed cells.
    pub const fn from_cells(cells: [Cell; Square::COUNT]) -> Self {
        Board { cells }
    }

    /// Parses a layout string, returning the board and the side to move.
    pub fn from_layout(layout: &str) -> Result<(Self, Color), LayoutError> {
        let parsed = Layout::parse(layout)?;
        Ok((Board::from_cells(parsed.cells), parsed.side_to_move))
    }

    /// Serializes the board with `side_to_move` as a layout string.
    pub fn to_layout(&self, side_to_move: Color) -> String {
        Layout {
            cells: self.cells,
            side_to_move,
        }
        .to_layout_string()
    }

    /// Returns the cell on `square`.
    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Places `cell` on `square`.
    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.index()] = cell;
    }

    /// Empties `square`, returning what was there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Cell {
        std::mem::take(&mut self.cells[square.index()])
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cell(square).is_empty()
    }

    /// Returns all cells in square order.
    #[inline]
    pub fn cells(&self) -> &[Cell; Square::COUNT] {
        &self.cells
    }

    /// Iterates over the squares holding a piece of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&s| self.cell(s).color() == Some(color))
    }

    /// Counts the pieces of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.squares_of(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: String = self.cells.iter().map(|c| c.to_char()).collect();
        write!(f, "Board({})", cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Piece;

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    #[test]
    fn startpos_setup() {
        let board = Board::startpos();
        assert_eq!(board.count(Color::Black), 12);
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.cell(sq(12)), Cell::BlackMan);
        assert!(board.is_empty(sq(13)));
        assert!(board.is_empty(sq(20)));
        assert_eq!(board.cell(sq(21)), Cell::WhiteMan);
        assert!(board
            .cells()
            .iter()
            .all(|c| c.piece() != Some(Piece::King)));
    }

    #[test]
    fn startpos_matches_layout() {
        let (board, side) = Board::from_layout(Layout::STARTPOS).unwrap();
        assert_eq!(board, Board::startpos());
        assert_eq!(side, Color::Black);
        assert_eq!(Board::startpos().to_layout(Color::Black), Layout::STARTPOS);
    }

    #[test]
    fn set_and_take() {
        let mut board = Board::empty();
        board.set(sq(17), Cell::WhiteKing);
        assert_eq!(board.cell(sq(17)), Cell::WhiteKing);
        assert_eq!(board.take(sq(17)), Cell::WhiteKing);
        assert!(board.is_empty(sq(17)));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn squares_of_color() {
        let (board, _) = Board::from_layout("b.../..../..../..W./..../..../..../...w w").unwrap();
        assert_eq!(board.squares_of(Color::Black).collect::<Vec<_>>(), vec![sq(1)]);
        assert_eq!(
            board.squares_of(Color::White).collect::<Vec<_>>(),
            vec![sq(15), sq(32)]
        );
    }

    #[test]
    fn debug_output() {
        let board = Board::startpos();
        assert_eq!(
            format!("{:?}", board),
            "Board(bbbbbbbbbbbb........wwwwwwwwwwww)"
        );
    }
}
