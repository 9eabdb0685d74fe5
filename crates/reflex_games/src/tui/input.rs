//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use reflex_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Place the human's mark.
    Place(Position),
    /// Move the highlight.
    MoveCursor(Position),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps a key to an action. Digits 1-9 follow the on-screen numbering.
pub fn key_action(cursor: Position, key: KeyCode) -> Option<UiAction> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char('r') => Some(UiAction::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::Place(cursor)),
        KeyCode::Char(c) => Position::from_key(c).map(UiAction::Place),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(UiAction::MoveCursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}
