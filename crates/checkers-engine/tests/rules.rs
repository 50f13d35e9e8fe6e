//! Integration tests for move generation and game sessions.

use checkers_core::{Cell, Color, Direction, Move, Piece, Square};
use checkers_engine::{
    all_legal_moves, allowed_directions, generate_moves, landing_square, make_move, must_capture,
    neighbor, Board, Game, GameError, GameResult, MAX_CHAIN_LENGTH,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn sq(n: u8) -> Square {
    Square::new(n).unwrap()
}

fn board(layout: &str) -> Board {
    Board::from_layout(layout).unwrap().0
}

fn squares(numbers: &[u8]) -> Vec<Square> {
    numbers.iter().map(|&n| sq(n)).collect()
}

#[test]
fn opening_man_steps_forward() {
    let moves = generate_moves(&Board::startpos(), sq(9)).unwrap();
    let set: HashSet<Move> = moves.into_iter().collect();
    let expected: HashSet<Move> = [Move::new(sq(9), sq(13)), Move::new(sq(9), sq(14))]
        .into_iter()
        .collect();
    assert_eq!(set, expected);
}

#[test]
fn single_capture() {
    // white man on 22, black man on 18: 22 jumps NE to 15
    let b = board("..../..../..../..../.b../.w../..../.... w");
    let moves = generate_moves(&b, sq(22)).unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0], Move::with_captures(sq(22), sq(15), squares(&[18])));
}

#[test]
fn double_capture_in_jump_order() {
    // white man on 19 jumps 15 to 10, then 6 to 1
    let b = board("..../.b../..../..b./..w./..../..../.... w");
    let moves = generate_moves(&b, sq(19)).unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].from(), sq(19));
    assert_eq!(moves[0].to(), sq(1));
    assert_eq!(moves[0].captured(), &squares(&[15, 6])[..]);
}

#[test]
fn lone_king_has_four_steps() {
    let b = board("..../..../..../..../W.../..../..../.... w");
    let moves = generate_moves(&b, sq(17)).unwrap();
    assert_eq!(moves.len(), 4);
    assert!(!moves.has_captures());
    let mut directions: Vec<Direction> = moves
        .as_slice()
        .iter()
        .filter_map(Move::direction)
        .collect();
    directions.sort_by_key(|d| d.index());
    assert_eq!(directions, Direction::ALL.to_vec());
}

#[test]
fn crowned_man_moves_backwards_next_turn() {
    let mut game = Game::from_layout("..../b.../..../..../..../..../..../.... w").unwrap();
    // white has no pieces, so the position is already decided
    assert_eq!(game.result(), Some(GameResult::BlackWins));

    game = Game::from_layout("..../.w../..../..../..../..../b.../...w b").unwrap();
    game.make_move_notation("25-29").unwrap();
    game.make_move_notation("32-27").unwrap();
    let moves = game.legal_moves_from(sq(29)).unwrap();
    assert_eq!(moves.as_slice(), &[Move::new(sq(29), sq(25))]);
}

#[test]
fn rejected_move_changes_nothing() {
    let mut game = Game::from_layout("b.../..../..b./..w./..../..../..../.... b").unwrap();
    let before = *game.board();
    for text in ["1-5", "11-16", "11-19", "15-19", "x", "11-40"] {
        assert!(game.make_move_notation(text).is_err(), "{text} accepted");
        assert_eq!(game.board(), &before);
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.move_history().is_empty());
    }
}

#[test]
fn full_opening_sequence() {
    let mut game = Game::new();
    for text in ["11-15", "23-19", "8-11", "22-17", "9-13", "17-14"] {
        game.make_move_notation(text).unwrap();
    }
    // 10x17 is forced for black
    assert!(game.must_capture());
    assert!(matches!(
        game.make_move_notation("4-8"),
        Err(GameError::IllegalMove(_))
    ));
    let played = game.make_move_notation("10x17").unwrap();
    assert_eq!(played.mov.captured(), &[sq(14)]);
    assert_eq!(game.board().count(Color::White), 11);
    assert_eq!(game.ply_count(), 7);
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        4 => Just(Cell::Empty),
        2 => Just(Cell::BlackMan),
        2 => Just(Cell::WhiteMan),
        1 => Just(Cell::BlackKing),
        1 => Just(Cell::WhiteKing),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::array::uniform32(cell_strategy()).prop_map(Board::from_cells)
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Black), Just(Color::White)]
}

proptest! {
    #[test]
    fn generation_is_pure(b in board_strategy(), color in color_strategy()) {
        let copy = b;
        let first = all_legal_moves(&b, color);
        let second = all_legal_moves(&b, color);
        prop_assert_eq!(b, copy);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn forced_capture_is_consistent(b in board_strategy(), color in color_strategy()) {
        let moves = all_legal_moves(&b, color);
        if must_capture(&b, color) {
            prop_assert!(!moves.is_empty());
            prop_assert!(moves.as_slice().iter().all(Move::is_capture));
        } else {
            prop_assert!(!moves.has_captures());
        }
    }

    #[test]
    fn men_step_forward_only(b in board_strategy(), color in color_strategy()) {
        for m in &all_legal_moves(&b, color) {
            let cell = b.cell(m.from());
            if m.is_capture() || cell.piece() != Some(Piece::Man) {
                continue;
            }
            let expected_row = match color {
                Color::Black => m.from().row() + 1,
                Color::White => m.from().row().wrapping_sub(1),
            };
            prop_assert_eq!(m.to().row(), expected_row);
        }
    }

    #[test]
    fn captures_remove_distinct_opponents(b in board_strategy(), color in color_strategy()) {
        for m in &all_legal_moves(&b, color) {
            let captured: HashSet<Square> = m.captured().iter().copied().collect();
            prop_assert_eq!(captured.len(), m.captured().len());
            for &s in m.captured() {
                prop_assert_eq!(b.cell(s).color(), Some(color.opposite()));
            }

            let next = make_move(&b, m);
            prop_assert_eq!(
                next.count(color.opposite()),
                b.count(color.opposite()) - m.captured().len()
            );
            prop_assert_eq!(next.count(color), b.count(color));
            prop_assert_eq!(next.cell(m.to()).color(), Some(color));
        }
    }

    #[test]
    fn capture_chains_are_maximal(b in board_strategy(), color in color_strategy()) {
        for m in &all_legal_moves(&b, color) {
            if !m.is_capture() || m.captured().len() == MAX_CHAIN_LENGTH {
                continue;
            }
            // the chain's end position, with the jumped pieces still standing
            let mut end = make_move(&b, m);
            for &s in m.captured() {
                end.set(s, b.cell(s));
            }
            let directions = allowed_directions(b.cell(m.from())).unwrap();
            for &direction in directions {
                let (Some(over), Some(landing)) =
                    (neighbor(m.to(), direction), landing_square(m.to(), direction))
                else {
                    continue;
                };
                let jumpable = end.cell(over).color() == Some(color.opposite())
                    && !m.captured().contains(&over)
                    && end.is_empty(landing);
                prop_assert!(!jumpable, "{:?} could continue over {}", m, over);
            }
        }
    }

    #[test]
    fn rejected_moves_leave_game_untouched(
        b in board_strategy(),
        color in color_strategy(),
        from in 1u8..=32,
        to in 1u8..=32,
    ) {
        let mut game = Game::from_board(b, color);
        let candidate = Move::new(sq(from), sq(to));
        let legal = all_legal_moves(&b, color).selects(&candidate);
        match game.make_move(&candidate) {
            Ok(played) => {
                prop_assert!(legal);
                prop_assert!(played.mov.selects(&candidate));
                prop_assert_eq!(game.side_to_move(), color.opposite());
                prop_assert_eq!(game.ply_count(), 1);
            }
            Err(_) => {
                prop_assert!(!legal);
                prop_assert_eq!(game.board(), &b);
                prop_assert_eq!(game.side_to_move(), color);
                prop_assert_eq!(game.ply_count(), 0);
            }
        }
    }

    #[test]
    fn layout_roundtrip(b in board_strategy(), color in color_strategy()) {
        let layout = b.to_layout(color);
        prop_assert_eq!(Board::from_layout(&layout), Ok((b, color)));
    }
}
