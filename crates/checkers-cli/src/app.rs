//! The interactive game loop.

use crate::command::{Command, CommandError, HELP};
use crate::config::Config;
use crate::opponent::RandomOpponent;
use crate::render::render;
use anyhow::Context;
use checkers_core::Square;
use checkers_engine::{Game, StandardCheckers};
use std::io::{BufRead, Write};

/// Plays one game, reading commands from `input` and writing to `out`.
///
/// Returns the game as it stood when the loop ended, either because the
/// game was decided, the player quit, or the input ran out.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, mut out: W) -> anyhow::Result<Game> {
    let mut game = match &config.layout {
        Some(layout) => Game::from_layout(layout)
            .with_context(|| format!("invalid start layout '{layout}'"))?,
        None => Game::new(),
    };
    let mut opponent = RandomOpponent::new(config.seed);
    let mut lines = input.lines();

    writeln!(out, "{}", render(game.board(), &[], config.color))?;

    loop {
        if let Some(result) = game.result() {
            writeln!(out, "{result}")?;
            break;
        }

        let side = game.side_to_move();
        if !config.human.controls(side) {
            let Some(mov) = opponent.choose_move(&StandardCheckers, game.board(), side) else {
                break;
            };
            let played = game.make_move(&mov)?;
            writeln!(out, "{side} plays {}", played.mov)?;
            writeln!(out, "{}", render(game.board(), &[], config.color))?;
            continue;
        }

        write!(out, "{side}> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        tracing::debug!(?command, "command");

        match command {
            Command::Play(candidate) => match game.make_move(&candidate) {
                Ok(_) => writeln!(out, "{}", render(game.board(), &[], config.color))?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Show(square) => show(&game, square, config.color, &mut out)?,
            Command::Moves => {
                let moves = game.legal_moves();
                let listed: Vec<String> = moves.as_slice().iter().map(|m| m.to_string()).collect();
                writeln!(out, "{}", listed.join(" "))?;
                if game.must_capture() {
                    writeln!(out, "a capture is available and must be taken")?;
                }
            }
            Command::History => writeln!(out, "{}", game.history_notation().join(" "))?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {
                writeln!(out, "Quitting")?;
                break;
            }
        }
    }

    writeln!(out, "History: {}", game.history_notation().join(" "))?;
    Ok(game)
}

fn show<W: Write>(game: &Game, square: Square, color: bool, out: &mut W) -> anyhow::Result<()> {
    let moves = match game.legal_moves_from(square) {
        Ok(moves) => moves,
        Err(e) => {
            writeln!(out, "error: {e}")?;
            return Ok(());
        }
    };
    let listed: Vec<String> = moves.as_slice().iter().map(|m| m.to_algebraic()).collect();
    writeln!(
        out,
        "The available moves for the piece on square {square} are: {}",
        listed.join("; ")
    )?;
    let targets: Vec<Square> = moves.as_slice().iter().map(|m| m.to()).collect();
    writeln!(out, "{}", render(game.board(), &targets, color))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HumanSide;
    use checkers_core::Color;

    fn play(config: &Config, script: &str) -> (Game, String) {
        let mut out = Vec::new();
        let game = run(config, script.as_bytes(), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    fn two_humans() -> Config {
        Config {
            human: HumanSide::Both,
            color: false,
            ..Config::default()
        }
    }

    #[test]
    fn hot_seat_game() {
        let (game, out) = play(&two_humans(), "9-13\nc3-d4\nhistory\nq\n");
        assert_eq!(game.history_notation(), vec!["9-13", "22-18"]);
        assert!(out.contains("9-13 22-18\n"));
        assert!(out.contains("Quitting\n"));
        assert!(out.ends_with("History: 9-13 22-18\n"));
    }

    #[test]
    fn errors_do_not_end_the_game() {
        let (game, out) = play(&two_humans(), "22-18\n9-40\n\nbogus\n9-13\nq\n");
        assert_eq!(game.ply_count(), 1);
        assert_eq!(out.matches("error:").count(), 3);
    }

    #[test]
    fn show_lists_and_highlights() {
        let (_, out) = play(&two_humans(), "s9\ns 16\nq\n");
        assert!(out.contains("The available moves for the piece on square 9 are: b6-a5; b6-c5\n"));
        assert!(out.contains("5* * . . \n"));
        assert!(out.contains("error: square 16 is empty\n"));
    }

    #[test]
    fn moves_reports_forced_capture() {
        let config = Config {
            layout: Some("b.../..../..b./..w./..../..../..../.... b".to_string()),
            ..two_humans()
        };
        let (_, out) = play(&config, "moves\nq\n");
        assert!(out.contains("11x18\na capture is available and must be taken\n"));
    }

    #[test]
    fn computer_answers_every_move() {
        let config = Config {
            human: HumanSide::Black,
            seed: Some(9),
            color: false,
            layout: None,
        };
        let (game, out) = play(&config, "11-15\nq\n");
        assert_eq!(game.ply_count(), 2);
        assert_eq!(game.move_history()[1].color, Color::White);
        assert!(out.contains("White plays "));
    }

    #[test]
    fn computer_plays_to_the_end() {
        let config = Config {
            human: HumanSide::White,
            seed: Some(3),
            color: false,
            layout: Some("..../..../..b./..w./..../..../..../.... b".to_string()),
        };
        let (game, out) = play(&config, "");
        assert_eq!(game.result().map(|r| r.winner()), Some(Color::Black));
        assert!(out.contains("Black plays 11x18\n"));
        assert!(out.contains("Black wins\n"));
    }

    #[test]
    fn end_of_input_quits() {
        let (game, out) = play(&two_humans(), "9-13\n");
        assert_eq!(game.ply_count(), 1);
        assert!(out.ends_with("History: 9-13\n"));
    }

    #[test]
    fn bad_layout_is_reported() {
        let config = Config {
            layout: Some("nonsense".to_string()),
            ..two_humans()
        };
        let err = run(&config, "".as_bytes(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("invalid start layout"));
    }
}
