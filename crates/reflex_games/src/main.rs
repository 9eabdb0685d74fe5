//! Reflex Games - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use reflex_games::{logging, suggest, tui, Cli, CliCommand, PlayArgs, Settings};
use reflex_tictactoe::{Board, RngSource};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        CliCommand::Play(args) => run_play(args).await,
        CliCommand::Suggest { board, mark, seed } => run_suggest(&board, mark, seed),
    }
}

/// Run the interactive game.
async fn run_play(args: PlayArgs) -> Result<()> {
    let settings = args.apply(Settings::load(args.config.as_deref())?);
    logging::init_file(settings.log_file())?;
    info!(?settings, "Settings resolved");
    tui::run_tui(settings).await
}

/// Print the opponent's answer for a board.
fn run_suggest(board: &str, mark: Option<reflex_tictactoe::Mark>, seed: Option<u64>) -> Result<()> {
    logging::init_stderr();
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let text = match seed {
        Some(seed) => suggest::report(&board, mark, RngSource::seeded(seed)),
        None => suggest::report(&board, mark, RngSource::thread()),
    };
    print!("{}", text);
    Ok(())
}
