//! Parsing of the commands typed at the game prompt.

use checkers_core::{Move, MoveParseError, Square, SquareError};
use thiserror::Error;

/// A command entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move such as `9-13`, `22x15` or `b6-a5`.
    Play(Move),
    /// Show the moves of the piece on a square, e.g. `s9` or `s b6`.
    Show(Square),
    /// List every legal move of the side to move.
    Moves,
    /// Print the moves played so far.
    History,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("'s' needs a square, e.g. 's9' or 'sb6': {0}")]
    Show(#[source] SquareError),

    #[error(transparent)]
    Move(#[from] MoveParseError),
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        match input.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Ok(Command::Quit),
            "moves" => return Ok(Command::Moves),
            "history" => return Ok(Command::History),
            "help" | "?" => return Ok(Command::Help),
            _ => {}
        }

        // files run a-h, so no move starts with 's'
        if let Some(rest) = input.strip_prefix(['s', 'S']) {
            return rest.parse().map(Command::Show).map_err(CommandError::Show);
        }

        Ok(Command::Play(Move::from_notation(input)?))
    }
}

pub const HELP: &str = "\
commands:
  9-13, 22x15, b6-a5   play a move
  s9, s b6             show the moves of a piece
  moves                list all legal moves
  history              print the moves played so far
  q                    quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    #[test]
    fn keywords() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse(" QUIT "), Ok(Command::Quit));
        assert_eq!(Command::parse("moves"), Ok(Command::Moves));
        assert_eq!(Command::parse("history"), Ok(Command::History));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
    }

    #[test]
    fn moves() {
        assert_eq!(
            Command::parse("9-13"),
            Ok(Command::Play(Move::new(sq(9), sq(13))))
        );
        assert_eq!(
            Command::parse("c3xe5"),
            Ok(Command::Play(Move::new(sq(22), sq(15))))
        );
        assert!(matches!(
            Command::parse("hello"),
            Err(CommandError::Move(MoveParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn show() {
        assert_eq!(Command::parse("s9"), Ok(Command::Show(sq(9))));
        assert_eq!(Command::parse("s 22"), Ok(Command::Show(sq(22))));
        assert_eq!(Command::parse("sb6"), Ok(Command::Show(sq(9))));
        assert_eq!(
            Command::parse("s33"),
            Err(CommandError::Show(SquareError::OutOfRange(33)))
        );
        assert!(matches!(Command::parse("s"), Err(CommandError::Show(_))));
    }
}
