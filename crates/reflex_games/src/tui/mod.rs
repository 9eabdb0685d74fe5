//! Terminal UI for Reflex Games.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{key_action, move_cursor, UiAction};

use crate::driver::{Command, Driver, DriverHandle};
use crate::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use reflex_tictactoe::RngSource;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
#[instrument(skip_all, fields(human = %settings.human_mark(), delay_ms = settings.think_delay_ms()))]
pub async fn run_tui(settings: Settings) -> Result<()> {
    info!("Starting Reflex Games TUI");

    let rng = (*settings.seed()).map_or_else(RngSource::from_os_rng, RngSource::seeded);
    let (driver, handle) = Driver::new(*settings.human_mark(), settings.think_delay(), rng);
    let driver_task = driver.spawn();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, &handle).await;

    // Restore the terminal before reporting anything.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let _ = handle.send(Command::Quit);
    drop(handle);
    if let Err(e) = driver_task.await {
        error!(error = %e, "Driver task failed");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Reflex Games TUI exited");
    res
}

async fn run_app(terminal: &mut Tui, handle: &DriverHandle) -> Result<()> {
    let mut snapshots = handle.subscribe();
    let mut app = App::new(snapshots.borrow_and_update().clone());

    loop {
        if snapshots.has_changed()? {
            app.update(snapshots.borrow_and_update().clone());
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_action(app.cursor(), key.code) {
            Some(UiAction::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Some(UiAction::Reset) => handle.send(Command::Reset)?,
            Some(UiAction::Place(pos)) => {
                app.set_cursor(pos);
                handle.send(Command::HumanMove(pos))?;
            }
            Some(UiAction::MoveCursor(pos)) => app.set_cursor(pos),
            None => {}
        }
    }
}
