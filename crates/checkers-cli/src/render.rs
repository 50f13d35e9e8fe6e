//! Terminal rendering of the board.
//!
//! Ranks are printed from 8 down to 1 with the file letters underneath.
//! Light squares are drawn as blanks; destination squares of a selected
//! piece can be highlighted.

use checkers_core::{File, Rank, Square};
use checkers_engine::Board;

const ANSI_HIGHLIGHT: &str = "\x1b[7m";
const ANSI_YELLOW: &str = "\x1b[30;103m";
const ANSI_CLEAR: &str = "\x1b[0m";

/// Marks highlighted squares when colors are off.
const PLAIN_MARK: char = '*';

/// Renders `board`, highlighting the squares in `highlights`.
pub fn render(board: &Board, highlights: &[Square], color: bool) -> String {
    let mut out = String::new();
    for rank in Rank::ALL.iter().rev() {
        out.push(rank.to_char());
        for file in File::ALL {
            match Square::from_coord(file, *rank) {
                None if color => out.push_str(&format!("{ANSI_HIGHLIGHT} {ANSI_CLEAR}")),
                None => out.push(' '),
                Some(square) => {
                    let piece = board.cell(square).to_char();
                    let marked = highlights.contains(&square);
                    match (marked, color) {
                        (true, true) => out.push_str(&format!("{ANSI_YELLOW}{piece}{ANSI_CLEAR}")),
                        (true, false) => out.push(PLAIN_MARK),
                        (false, _) => out.push(piece),
                    }
                }
            }
        }
        out.push('\n');
    }
    out.push(' ');
    out.extend(File::ALL.iter().map(|f| f.to_char()));
    out
}
