//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses `x`/`o` in either case.
    #[instrument]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl FromStr for Mark {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::from_char(c).ok_or(ParseBoardError::InvalidChar(c)),
            _ => Err(ParseBoardError::InvalidMark(s.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so `Position::to_index`
/// addresses the backing array directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of the board with `mark` placed at `pos`.
    pub fn with(mut self, pos: Position, mark: Mark) -> Self {
        self.set(pos, Square::Occupied(mark));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Checks the alternating-turn invariant: X has either as many marks as O
    /// or exactly one more.
    #[instrument]
    pub fn is_consistent(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        x == o || x == o + 1
    }

    /// Mark whose turn it is if play alternated from an empty board.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    Square::Occupied(mark) => result.push_str(&mark.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    /// Compact 9-character form, accepted back by `FromStr`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            match square {
                Square::Empty => write!(f, ".")?,
                Square::Occupied(mark) => write!(f, "{}", mark)?,
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells: `X`/`O` (any case) for marks and `.`, `-`, `_`,
    /// space or a digit for empty squares. Row separators `/` and `|` are
    /// skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !matches!(c, '/' | '|')).collect();
        if cells.len() != 9 {
            return Err(ParseBoardError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells) {
            let square = match c {
                '.' | '-' | '_' | ' ' => Square::Empty,
                c if c.is_ascii_digit() => Square::Empty,
                c => Square::Occupied(Mark::from_char(c).ok_or(ParseBoardError::InvalidChar(c))?),
            };
            board.set(pos, square);
        }
        Ok(board)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No winner yet and at least one empty square.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// Board full with no winner.
    Draw,
}

impl GameResult {
    /// Returns true for a win or a draw.
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameResult::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Won(mark) => write!(f, "Winner: {}", mark),
            GameResult::Draw => write!(f, "Winner: Draw"),
        }
    }
}

/// Error parsing a board or mark from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The board did not have exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A cell character was not a mark or an empty placeholder.
    #[display("Invalid cell character {:?}", _0)]
    InvalidChar(#[error(not(source))] char),
    /// A mark string was not a single `x` or `o`.
    #[display("Invalid mark {:?}, expected X or O", _0)]
    InvalidMark(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_compact() {
        let board: Board = "XX..O....".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.to_string(), "XX..O....");
    }

    #[test]
    fn test_parse_with_row_separators_and_digits() {
        let board: Board = "x2o/4X6/789".parse().unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(board.get(Position::TopRight), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "XXZ......".parse::<Board>(),
            Err(ParseBoardError::InvalidChar('Z'))
        );
    }

    #[test]
    fn test_display_grid_numbers_empty_squares() {
        let board = Board::new().with(Position::Center, Mark::X);
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_consistency_and_next_mark() {
        let board = Board::new();
        assert!(board.is_consistent());
        assert_eq!(board.next_mark(), Mark::X);

        let board = board.with(Position::TopLeft, Mark::X);
        assert!(board.is_consistent());
        assert_eq!(board.next_mark(), Mark::O);

        let board = board.with(Position::TopRight, Mark::X);
        assert!(!board.is_consistent());
    }

    #[test]
    fn test_mark_parse() {
        assert_eq!("o".parse::<Mark>(), Ok(Mark::O));
        assert_eq!(" X ".parse::<Mark>(), Ok(Mark::X));
        assert!("xo".parse::<Mark>().is_err());
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
