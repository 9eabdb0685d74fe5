//! The eight winning lines.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// Three positions that win when held by a single mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [Position; 3]);

/// Rows, then columns, then diagonals. Every scan uses this order.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

impl Line {
    /// Positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns true if every square on the line holds `mark`.
    pub fn is_held_by(&self, board: &Board, mark: Mark) -> bool {
        self.0
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark))
    }

    /// If two squares hold `mark` and the third is empty, returns the empty one.
    pub fn completion_for(&self, board: &Board, mark: Mark) -> Option<Position> {
        let mut empty = None;
        let mut held = 0;
        for pos in self.0 {
            match board.get(pos) {
                Square::Empty => empty = Some(pos),
                Square::Occupied(m) if m == mark => held += 1,
                Square::Occupied(_) => return None,
            }
        }
        if held == 2 { empty } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_covered() {
        for pos in Position::ALL {
            let count = LINES.iter().filter(|l| l.contains(pos)).count();
            let expected = match pos {
                Position::Center => 4,
                p if p.is_corner() => 3,
                _ => 2,
            };
            assert_eq!(count, expected, "{pos}");
        }
    }

    #[test]
    fn test_completion_for() {
        let line = LINES[0];
        let board = Board::new()
            .with(Position::TopLeft, Mark::O)
            .with(Position::TopRight, Mark::O);
        assert_eq!(line.completion_for(&board, Mark::O), Some(Position::TopCenter));
        assert_eq!(line.completion_for(&board, Mark::X), None);

        let blocked = board.with(Position::TopCenter, Mark::X);
        assert_eq!(line.completion_for(&blocked, Mark::O), None);
    }
}
