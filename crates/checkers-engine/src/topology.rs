//! Board topology: the diagonal neighbors of every playable square.
//!
//! All direction arithmetic goes through [`ADJACENCY`]. There is no
//! formula-based neighbor computation anywhere else in the engine.

use checkers_core::{Direction, Square};

/// Marks a board edge in [`ADJACENCY`]. Never a valid square number.
const NO_SQUARE: u8 = 0;

/// Neighbors of each square in `[NW, NE, SW, SE]` order, indexed by
/// square index (square number - 1).
#[rustfmt::skip]
const ADJACENCY: [[u8; 4]; Square::COUNT] = [
    [ 0,  0,  5,  6], // 1
    [ 0,  0,  6,  7], // 2
    [ 0,  0,  7,  8], // 3
    [ 0,  0,  8,  0], // 4
    [ 0,  1,  0,  9], // 5
    [ 1,  2,  9, 10], // 6
    [ 2,  3, 10, 11], // 7
    [ 3,  4, 11, 12], // 8
    [ 5,  6, 13, 14], // 9
    [ 6,  7, 14, 15], // 10
    [ 7,  8, 15, 16], // 11
    [ 8,  0, 16,  0], // 12
    [ 0,  9,  0, 17], // 13
    [ 9, 10, 17, 18], // 14
    [10, 11, 18, 19], // 15
    [11, 12, 19, 20], // 16
    [13, 14, 21, 22], // 17
    [14, 15, 22, 23], // 18
    [15, 16, 23, 24], // 19
    [16,  0, 24,  0], // 20
    [ 0, 17,  0, 25], // 21
    [17, 18, 25, 26], // 22
    [18, 19, 26, 27], // 23
    [19, 20, 27, 28], // 24
    [21, 22, 29, 30], // 25
    [22, 23, 30, 31], // 26
    [23, 24, 31, 32], // 27
    [24,  0, 32,  0], // 28
    [ 0, 25,  0,  0], // 29
    [25, 26,  0,  0], // 30
    [26, 27,  0,  0], // 31
    [27, 28,  0,  0], // 32
];

/// Returns the square adjacent to `square` in `direction`, or `None` at
/// the board edge.
#[inline]
pub fn neighbor(square: Square, direction: Direction) -> Option<Square> {
    match ADJACENCY[square.index()][direction.index()] {
        NO_SQUARE => None,
        number => Square::new(number),
    }
}

/// Returns the square two steps away in `direction`: where a piece lands
/// after jumping the neighbor in that direction.
///
/// `None` if either step runs off the board.
#[inline]
pub fn landing_square(square: Square, direction: Direction) -> Option<Square> {
    let over = neighbor(square, direction)?;
    neighbor(over, direction)
}
