//! Computer opponent that plays a uniformly random legal move.

use checkers_core::{Color, Move};
use checkers_engine::{Board, RuleSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates an opponent, reproducible when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomOpponent { rng }
    }

    /// Picks one of the legal moves of `side`, or `None` if there are none.
    pub fn choose_move<R: RuleSet>(&mut self, rules: &R, board: &Board, side: Color) -> Option<Move> {
        let moves = rules.generate_moves(board, side);
        moves.as_slice().choose(&mut self.rng).cloned()
    }
}
