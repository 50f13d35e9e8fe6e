//! Full game management with history tracking.
//!
//! [`Game`] is the only place where a board is mutated during play. Every
//! move is validated against freshly generated legal moves, applied as a
//! whole, and appended to the move history.

use crate::movegen::{all_legal_moves, legal_moves, must_capture};
use crate::rules::{GameResult, RuleSet, StandardCheckers};
use crate::{Board, MoveList};
use checkers_core::{Cell, Color, LayoutError, Move, MoveParseError, Square, SquareError};
use thiserror::Error;

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move as generated, with its authoritative capture list.
    pub mov: Move,
    /// The side that made the move.
    pub color: Color,
    /// Whether the moving man was crowned by this move.
    pub crowned: bool,
}

/// Error type for engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The queried square holds no piece.
    #[error("square {0} is empty")]
    EmptySquare(Square),

    /// The move is not in the current legal move set.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A square number or coordinate is outside the board.
    #[error(transparent)]
    OutOfRange(#[from] SquareError),

    /// The move text could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(#[from] MoveParseError),

    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A checkers game session.
///
/// Owns the board, the side to move and the append-only move history.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    moves: Vec<GameMove>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, Black to move.
    pub fn new() -> Self {
        Self::from_board(
            StandardCheckers.initial_board(),
            StandardCheckers.first_to_move(),
        )
    }

    /// Creates a game from a custom position.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            moves: Vec::new(),
            result: None,
        };
        game.check_game_end();
        game
    }

    /// Creates a game from a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let (board, side_to_move) = Board::from_layout(layout)?;
        Ok(Self::from_board(board, side_to_move))
    }

    /// Returns a reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns true if the side to move is obliged to capture.
    pub fn must_capture(&self) -> bool {
        must_capture(&self.board, self.side_to_move)
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        all_legal_moves(&self.board, self.side_to_move)
    }

    /// Returns the legal moves of the piece on `square` this turn.
    ///
    /// A piece of the side not to move has no legal moves.
    pub fn legal_moves_from(&self, square: Square) -> Result<MoveList, GameError> {
        let moves = legal_moves(&self.board, square)?;
        if self.board.cell(square).color() != Some(self.side_to_move) {
            return Ok(MoveList::new());
        }
        Ok(moves)
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the history in numeric notation, one entry per move.
    pub fn history_notation(&self) -> Vec<String> {
        self.moves.iter().map(|gm| gm.mov.to_string()).collect()
    }

    /// Validates `candidate` against the legal moves of its piece and, if it
    /// is one of them, plays it.
    ///
    /// Only the from and to squares of `candidate` are trusted: the captured
    /// pieces come from the matching generated move. On error the game is
    /// left untouched.
    pub fn make_move(&mut self, candidate: &Move) -> Result<GameMove, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let cell = self.board.cell(candidate.from());
        if cell.is_empty() {
            return Err(GameError::EmptySquare(candidate.from()));
        }
        if cell.color() != Some(self.side_to_move) {
            return Err(GameError::IllegalMove(format!(
                "{}: it is {}'s turn",
                candidate, self.side_to_move
            )));
        }

        let legal = legal_moves(&self.board, candidate.from())?;
        let mov = match legal.find(candidate) {
            Some(m) => m.clone(),
            None if legal.is_empty() && self.must_capture() => {
                return Err(GameError::IllegalMove(format!(
                    "{}: a capture is available and must be taken",
                    candidate
                )))
            }
            None => return Err(GameError::IllegalMove(candidate.to_string())),
        };

        Ok(self.apply_move(mov, cell))
    }

    /// Parses and plays a move such as `9-13` or `b6-a5`.
    pub fn make_move_notation(&mut self, notation: &str) -> Result<GameMove, GameError> {
        let candidate = Move::from_notation(notation)?;
        self.make_move(&candidate)
    }

    /// Internal method to apply a legal move.
    fn apply_move(&mut self, mov: Move, cell: Cell) -> GameMove {
        self.board = StandardCheckers.make_move(&self.board, &mov);
        let crowned = !cell.is_king() && self.board.cell(mov.to()).is_king();

        tracing::debug!(
            color = %self.side_to_move,
            mov = %mov,
            captured = mov.captured().len(),
            crowned,
            "applied move"
        );

        let record = GameMove {
            mov,
            color: self.side_to_move,
            crowned,
        };
        self.moves.push(record.clone());
        self.side_to_move = self.side_to_move.opposite();
        self.check_game_end();
        record
    }

    /// Checks if the side to move is out of moves and updates the result.
    fn check_game_end(&mut self) {
        self.result = StandardCheckers.game_result(&self.board, self.side_to_move);
        if let Some(result) = self.result {
            tracing::info!(%result, plies = self.moves.len(), "game over");
        }
    }

    /// Returns the current position as a layout string.
    pub fn to_layout(&self) -> String {
        self.board.to_layout(self.side_to_move)
    }
}
