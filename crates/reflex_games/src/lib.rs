//! Reflex Games - terminal tic-tac-toe against a heuristic opponent.
//!
//! The rules and the opponent live in `reflex_tictactoe`. This crate is the
//! driver around them.
//!
//! # Architecture
//!
//! - **Driver**: owns the game, schedules the opponent after a delay, and
//!   publishes snapshots on a `watch` channel
//! - **TUI**: ratatui front end subscribed to those snapshots
//! - **Settings**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use reflex_games::{Command, Driver};
//! use reflex_tictactoe::{FixedPick, Mark, Position};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (driver, handle) = Driver::new(Mark::X, Duration::from_millis(500), FixedPick(0));
//! driver.spawn();
//! handle.send(Command::HumanMove(Position::Center))?;
//! let mut updates = handle.subscribe();
//! updates.wait_for(|s| s.state.history().len() == 2).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod driver;
mod settings;

pub mod logging;
pub mod suggest;
pub mod tui;

pub use cli::{Cli, Command as CliCommand, PlayArgs};
pub use driver::{Command, Driver, DriverHandle, DriverStopped, Snapshot};
pub use settings::{ConfigError, Settings, DEFAULT_CONFIG_PATH};
