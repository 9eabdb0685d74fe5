//! Win detection and board evaluation.

use super::draw::is_full;
use super::lines::{Line, LINES};
use crate::{Board, GameResult, Mark};
use tracing::instrument;

/// Returns the first line (in scan order) fully held by `mark`.
#[instrument]
pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    LINES.into_iter().find(|line| line.is_held_by(board, mark))
}

/// Evaluates the board from the point of view of `mark`.
///
/// Reports `Won(mark)` if `mark` holds any line, `Draw` if the board is full
/// otherwise, and `InProgress` in every other case. Lines held by the other
/// mark are not considered.
#[instrument]
pub fn evaluate(board: &Board, mark: Mark) -> GameResult {
    if winning_line(board, mark).is_some() {
        GameResult::Won(mark)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Returns the mark owning the first completed line, checking both marks.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|Line([a, b, c])| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark)).then_some(mark)
    })
}

/// Evaluates the board without a point of view.
#[instrument]
pub fn outcome(board: &Board) -> GameResult {
    match winner(board) {
        Some(mark) => GameResult::Won(mark),
        None if is_full(board) => GameResult::Draw,
        None => GameResult::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new(), Mark::X), GameResult::InProgress);
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let b = board("XXXOO....");
        assert_eq!(evaluate(&b, Mark::X), GameResult::Won(Mark::X));
        assert_eq!(winning_line(&b, Mark::X), Some(LINES[0]));
    }

    #[test]
    fn test_winner_diagonal() {
        let b = board("OX..OX..O");
        assert_eq!(evaluate(&b, Mark::O), GameResult::Won(Mark::O));
        assert_eq!(winner(&b), Some(Mark::O));
    }

    #[test]
    fn test_other_mark_line_is_not_a_win_for_mark() {
        let b = board("XXXOO....");
        assert_eq!(evaluate(&b, Mark::O), GameResult::InProgress);
        assert_eq!(outcome(&b), GameResult::Won(Mark::X));
    }

    #[test]
    fn test_full_board_with_line_is_a_win_not_draw() {
        let b = board("XOXOXOOXX");
        assert_eq!(evaluate(&b, Mark::X), GameResult::Won(Mark::X));
        assert_eq!(evaluate(&b, Mark::O), GameResult::Draw);
    }

    #[test]
    fn test_double_line_reports_first_in_scan_order() {
        // X holds the top row and the left column.
        let b = board("XXXXOOXOO");
        let line = winning_line(&b, Mark::X).unwrap();
        assert_eq!(line.positions(), [Position::TopLeft, Position::TopCenter, Position::TopRight]);
    }

    #[test]
    fn test_draw() {
        let b = board("XOXXOOOXX");
        assert_eq!(evaluate(&b, Mark::X), GameResult::Draw);
        assert_eq!(evaluate(&b, Mark::O), GameResult::Draw);
        assert_eq!(outcome(&b), GameResult::Draw);
    }
}
