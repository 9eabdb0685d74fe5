//! View state for the terminal UI.

use crate::driver::Snapshot;
use reflex_tictactoe::{GameResult, Position};
use tracing::debug;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct App {
    cursor: Position,
    snapshot: Snapshot,
}

impl App {
    /// Creates the view with the cursor on the center square.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            cursor: Position::Center,
            snapshot,
        }
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the highlight.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Latest state from the driver.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Replaces the displayed state.
    pub fn update(&mut self, snapshot: Snapshot) {
        if snapshot != self.snapshot {
            debug!(moves = snapshot.state.history().len(), "Snapshot updated");
            self.snapshot = snapshot;
        }
    }

    /// Headline shown above the board.
    pub fn status_text(&self) -> String {
        let state = &self.snapshot.state;
        match state.result() {
            GameResult::InProgress if state.is_human_turn() => "Player's Turn (You)".to_string(),
            GameResult::InProgress => "Auto Player's Turn (AI)".to_string(),
            result => result.to_string(),
        }
    }

    /// Secondary line: last opponent choice or last refused move.
    pub fn detail_text(&self) -> String {
        if let Some(err) = &self.snapshot.last_error {
            return format!("{}", err);
        }
        if self.snapshot.thinking {
            return "AI is thinking...".to_string();
        }
        match &self.snapshot.last_decision {
            Some(decision) => format!("AI played {}", decision),
            None => String::new(),
        }
    }

    /// Key help, adjusted to whether the game is over.
    pub fn help_text(&self) -> &'static str {
        if self.snapshot.state.is_over() {
            "r: reset game | q: quit"
        } else {
            "1-9 or arrows + Enter: move | r: reset | q: quit"
        }
    }
}
