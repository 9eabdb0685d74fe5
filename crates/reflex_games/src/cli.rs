//! Command-line interface for reflex_games.

use clap::{Args, Parser, Subcommand};
use reflex_tictactoe::Mark;
use std::path::PathBuf;

/// Reflex Games - tic-tac-toe against a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "reflex_games")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Print the opponent's choice for a board
    Suggest {
        /// Nine cells, row-major: X, O, and `.` for empty (e.g. "XX..O....")
        board: String,

        /// Mark to choose for; inferred from the counts when omitted
        #[arg(long)]
        mark: Option<Mark>,

        /// Seed for the random tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for the `play` command. Each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Opponent thinking delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the opponent's random tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mark you play (X moves first)
    #[arg(long)]
    pub human: Option<Mark>,

    /// Where to write logs
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl PlayArgs {
    /// Applies every flag that was given on top of `settings`.
    pub fn apply(&self, mut settings: crate::Settings) -> crate::Settings {
        if let Some(ms) = self.delay_ms {
            settings = settings.with_think_delay_ms(ms);
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(mark) = self.human {
            settings = settings.with_human_mark(mark);
        }
        if let Some(path) = &self.log_file {
            settings = settings.with_log_file(path.clone());
        }
        settings
    }
}
