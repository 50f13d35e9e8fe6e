//! Standard checkers rules implementation.

use super::RuleSet;
use crate::movegen::{all_legal_moves, make_move, must_capture};
use crate::{Board, MoveList};
use checkers_core::{Color, Move};

/// Standard 8x8 checkers.
///
/// - Men step and capture diagonally forward, kings in all four directions
/// - Captures are compulsory, and a capture chain must be completed
/// - A man reaching the far row is crowned
/// - A side without a legal move loses
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCheckers;

impl RuleSet for StandardCheckers {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn generate_moves(&self, board: &Board, side: Color) -> MoveList {
        all_legal_moves(board, side)
    }

    fn must_capture(&self, board: &Board, side: Color) -> bool {
        must_capture(board, side)
    }

    fn make_move(&self, board: &Board, m: &Move) -> Board {
        make_move(board, m)
    }
}
