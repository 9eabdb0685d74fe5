//! One-shot analysis of a board given on the command line.

use reflex_tictactoe::{outcome, select_move_explained, Board, GameResult, Mark, RandomSource};
use tracing::{debug, instrument};

/// Describes `board` and the opponent's reply for `mark`.
///
/// Without `mark` the side to move is inferred from the mark counts.
#[instrument(skip(rng))]
pub fn report(board: &Board, mark: Option<Mark>, rng: impl RandomSource) -> String {
    let mark = mark.unwrap_or_else(|| board.next_mark());
    let mut out = format!("{}\n\n", board.display());

    if !board.is_consistent() {
        out.push_str("Warning: mark counts cannot come from alternating play\n");
    }

    match outcome(board) {
        GameResult::InProgress => {}
        result => {
            out.push_str(&format!("Game over. {}\n", result));
            return out;
        }
    }

    out.push_str(&format!("{} to move\n", mark));
    match select_move_explained(board, mark, mark.opponent(), rng) {
        Some(decision) => {
            debug!(%decision, "Suggested move");
            out.push_str(&format!("Suggested: {}\n", decision));
        }
        None => out.push_str("No empty squares\n"),
    }
    out
}
