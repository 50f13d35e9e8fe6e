//! Rules engine for 8x8 checkers.
//!
//! This crate provides:
//! - [`Board`] - the 32 playable squares and their contents
//! - [`topology`] - the fixed diagonal adjacency of the playable squares
//! - Move generation with branching capture chains and forced captures
//! - [`Game`] - a validated game session with history tracking
//! - [`RuleSet`] - the seam through which opponents and tools drive the rules
//!
//! # Example
//!
//! ```
//! use checkers_engine::{Board, Game, StandardCheckers};
//! use checkers_engine::rules::RuleSet;
//! use checkers_core::Color;
//!
//! // Stateless queries on a board
//! let board = StandardCheckers.initial_board();
//! assert_eq!(StandardCheckers.generate_moves(&board, Color::Black).len(), 7);
//!
//! // A game session validates and records every move
//! let mut game = Game::new();
//! game.make_move_notation("9-13").unwrap();
//! game.make_move_notation("22-18").unwrap();
//! assert_eq!(game.history_notation(), vec!["9-13", "22-18"]);
//! assert_ne!(game.board(), &Board::startpos());
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;
pub mod topology;

pub use board::Board;
pub use game::{Game, GameError, GameMove};
pub use movegen::{
    all_legal_moves, allowed_directions, generate_moves, legal_moves, make_move, must_capture,
    MoveList, MAX_CHAIN_LENGTH,
};
pub use rules::{GameResult, RuleSet, StandardCheckers};
pub use topology::{landing_square, neighbor};
