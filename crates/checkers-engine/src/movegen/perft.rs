//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use super::{all_legal_moves, make_move};
use crate::Board;
use checkers_core::Color;

/// Counts the number of leaf nodes at the given depth, `side` to move.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let next = make_move(board, m);
        nodes += perft(&next, side.opposite(), depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, side: Color, depth: u32) -> Vec<(String, u64)> {
    let moves = all_legal_moves(board, side);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let next = make_move(board, m);
        let nodes = if depth > 1 {
            perft(&next, side.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    // Starting position perft values for 8x8 checkers
    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Board::startpos(), Color::Black, 1), 7);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Board::startpos(), Color::Black, 2), 49);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Board::startpos(), Color::Black, 3), 302);
    }

    #[test]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Board::startpos(), Color::Black, 4), 1469);
    }

    #[test]
    fn perft_depth_zero() {
        assert_eq!(perft(&Board::empty(), Color::White, 0), 1);
    }

    #[test]
    fn perft_no_pieces() {
        assert_eq!(perft(&Board::empty(), Color::White, 3), 0);
    }

    #[test]
    fn perft_divide_sums_to_perft() {
        let board = Board::startpos();
        let divide = perft_divide(&board, Color::Black, 3);
        assert_eq!(divide.len(), 7);
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, Color::Black, 3));
        assert!(divide.iter().any(|(m, _)| m == "9-13"));
    }
}
