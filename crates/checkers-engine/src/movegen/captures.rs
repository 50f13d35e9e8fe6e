//! Capture-chain search.
//!
//! A chain starts with one jump and keeps jumping from each landing square
//! until no jump is left. Continuing along the axis of the previous jump
//! extends the current chain; turning onto another diagonal forks a copy of
//! it, so every maximal path ends up as its own [`Move`].
//!
//! While a chain is searched the moving piece has left its origin square,
//! and jumped pieces stay on the board until the move is applied: a piece
//! cannot be jumped twice and its square cannot be landed on.

use crate::topology::{landing_square, neighbor};
use crate::Board;
use checkers_core::{Cell, Direction, Move, Square};

/// Upper bound on the number of jumps in one chain (a full side of men).
pub const MAX_CHAIN_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy)]
struct Jump {
    over: Square,
    landing: Square,
    direction: Direction,
}

/// Jumps available to `mover` standing on `at`.
fn jumps<'a>(
    board: &'a Board,
    mover: Cell,
    at: Square,
    directions: &'a [Direction],
    captured: &'a [Square],
) -> impl Iterator<Item = Jump> + 'a {
    directions.iter().filter_map(move |&direction| {
        let over = neighbor(at, direction)?;
        if !board.cell(over).is_opponent_of(mover) || captured.contains(&over) {
            return None;
        }
        let landing = landing_square(at, direction)?;
        board.is_empty(landing).then_some(Jump {
            over,
            landing,
            direction,
        })
    })
}

/// Returns true if the piece on `square` has at least one jump.
pub(super) fn has_capture(board: &Board, square: Square, directions: &[Direction]) -> bool {
    jumps(board, board.cell(square), square, directions, &[])
        .next()
        .is_some()
}

/// Returns every maximal capture chain of the piece on `square`.
pub(super) fn capture_chains(board: &Board, square: Square, directions: &[Direction]) -> Vec<Move> {
    let mut scratch = *board;
    let mover = scratch.take(square);

    let openings: Vec<Jump> = jumps(&scratch, mover, square, directions, &[]).collect();
    let mut chains = Vec::new();
    for jump in openings {
        let mut chain = Move::new(square, square);
        chain.push_jump(jump.over, jump.landing, jump.direction);
        chains.extend(extend_chain(&scratch, mover, directions, chain));
    }
    chains
}

fn extend_chain(board: &Board, mover: Cell, directions: &[Direction], mut chain: Move) -> Vec<Move> {
    if chain.captured().len() >= MAX_CHAIN_LENGTH {
        return vec![chain];
    }

    let (same_axis, turns): (Vec<Jump>, Vec<Jump>) =
        jumps(board, mover, chain.to(), directions, chain.captured())
            .partition(|jump| Some(jump.direction) == chain.direction());

    if same_axis.is_empty() && turns.is_empty() {
        return vec![chain];
    }

    let forks: Vec<Move> = turns
        .iter()
        .map(|jump| {
            let mut fork = chain.clone();
            fork.push_jump(jump.over, jump.landing, jump.direction);
            fork
        })
        .collect();

    let mut completed = Vec::new();
    // one jump per direction, so at most one continues the axis
    if let Some(jump) = same_axis.first() {
        chain.push_jump(jump.over, jump.landing, jump.direction);
        completed.extend(extend_chain(board, mover, directions, chain));
    }
    for fork in forks {
        completed.extend(extend_chain(board, mover, directions, fork));
    }
    completed
}
