//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the seam through which
//! collaborators such as the random opponent and perft drive the engine
//! without depending on its internals.

mod standard;

pub use standard::StandardCheckers;

use crate::{Board, MoveList};
use checkers_core::{Color, Move};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White has no legal move (or no pieces) on its turn.
    BlackWins,
    /// Black has no legal move (or no pieces) on its turn.
    WhiteWins,
}

impl GameResult {
    /// Returns the winning color.
    pub const fn winner(self) -> Color {
        match self {
            GameResult::BlackWins => Color::Black,
            GameResult::WhiteWins => Color::White,
        }
    }

    /// Returns the result in which `color` wins.
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::Black => GameResult::BlackWins,
            Color::White => GameResult::WhiteWins,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins", self.winner())
    }
}

/// Trait for implementing checkers rule sets.
///
/// # Example
///
/// ```
/// use checkers_engine::StandardCheckers;
/// use checkers_engine::rules::RuleSet;
/// use checkers_core::Color;
///
/// let board = StandardCheckers.initial_board();
/// let moves = StandardCheckers.generate_moves(&board, Color::Black);
/// assert_eq!(moves.len(), 7);
/// ```
pub trait RuleSet {
    /// Returns the initial board for this rule set.
    fn initial_board(&self) -> Board;

    /// Returns the side that moves first.
    fn first_to_move(&self) -> Color {
        Color::Black
    }

    /// Generates all legal moves for `side`.
    fn generate_moves(&self, board: &Board, side: Color) -> MoveList;

    /// Returns true if `side` is obliged to capture.
    fn must_capture(&self, board: &Board, side: Color) -> bool;

    /// Returns true if `m` is legal for `side`, matching on from and to.
    fn is_legal(&self, board: &Board, side: Color, m: &Move) -> bool {
        self.generate_moves(board, side).selects(m)
    }

    /// Makes a move on the board, returning the new board.
    ///
    /// The move must carry its captures; use a generated move.
    fn make_move(&self, board: &Board, m: &Move) -> Board;

    /// Returns the game result if `side` cannot move, otherwise `None`.
    fn game_result(&self, board: &Board, side: Color) -> Option<GameResult> {
        if self.generate_moves(board, side).is_empty() {
            Some(GameResult::win_for(side.opposite()))
        } else {
            None
        }
    }

    /// Returns true if the game is over with `side` to move.
    fn is_game_over(&self, board: &Board, side: Color) -> bool {
        self.game_result(board, side).is_some()
    }
}
