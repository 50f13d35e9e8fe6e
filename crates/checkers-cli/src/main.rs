//! Terminal checkers.
//!
//! Plays a game on the terminal against a random opponent, or between two
//! humans sharing the keyboard. Type `help` at the prompt for the commands.

mod app;
mod command;
mod config;
mod opponent;
mod render;

use clap::Parser;
use config::{Config, HumanSide};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play checkers in the terminal.
#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Play checkers against a random opponent or another human")]
struct Args {
    /// Sides played from the keyboard
    #[arg(long, value_enum)]
    human: Option<HumanSide>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file (defaults to ./checkers.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting position as a layout string
    #[arg(long)]
    layout: Option<String>,

    /// Draw the board without ANSI colors
    #[arg(long)]
    no_color: bool,
}

impl Args {
    /// Overrides file settings with the flags given on the command line.
    fn apply(self, config: &mut Config) {
        if let Some(human) = self.human {
            config.human = human;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.layout.is_some() {
            config.layout = self.layout;
        }
        if self.no_color {
            config.color = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    tracing::info!(human = ?config.human, seed = ?config.seed, "starting game");

    let stdin = std::io::stdin();
    let game = app::run(&config, stdin.lock(), std::io::stdout())?;
    tracing::info!(plies = game.ply_count(), result = ?game.result(), "game ended");
    Ok(())
}
