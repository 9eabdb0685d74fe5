//! Fixed-priority heuristic opponent.
//!
//! The opponent never searches. It takes the first of these that applies:
//! its own winning square, a square blocking the human's win, the center, a
//! random free corner, a random free square.

use crate::random::RandomSource;
use crate::rules::LINES;
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which priority step produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rationale {
    /// Completes one of the opponent's own lines.
    #[display("win")]
    Win,
    /// Fills the gap in one of the human's lines.
    #[display("block")]
    Block,
    /// Takes the center square.
    #[display("center")]
    Center,
    /// Random free corner.
    #[display("corner")]
    Corner,
    /// Random free square.
    #[display("any")]
    Any,
}

/// A chosen move together with the reason for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    /// Square to play.
    pub position: Position,
    /// Step that chose it.
    pub rationale: Rationale,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (key {}, {})",
            self.position,
            self.position.to_index() + 1,
            self.rationale
        )
    }
}

/// Returns the empty square that would complete a line for `mark`.
///
/// Lines are scanned in [`LINES`] order and the first match wins.
#[instrument]
pub fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    LINES
        .iter()
        .find_map(|line| line.completion_for(board, mark))
}

/// Empty squares in index order.
pub fn empty_positions(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}

/// Chooses the opponent's next square.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(rng))]
pub fn select_move(
    board: &Board,
    automated: Mark,
    human: Mark,
    rng: impl RandomSource,
) -> Option<Position> {
    select_move_explained(board, automated, human, rng).map(|d| d.position)
}

/// Like [`select_move`], also reporting which step chose the square.
#[instrument(skip(rng))]
pub fn select_move_explained(
    board: &Board,
    automated: Mark,
    human: Mark,
    mut rng: impl RandomSource,
) -> Option<Decision> {
    let decision = |position, rationale| Some(Decision { position, rationale });

    if let Some(pos) = completing_move(board, automated) {
        return decision(pos, Rationale::Win);
    }

    if let Some(pos) = completing_move(board, human) {
        return decision(pos, Rationale::Block);
    }

    if board.is_empty(Position::Center) {
        return decision(Position::Center, Rationale::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if !corners.is_empty() {
        let pos = corners[rng.pick(corners.len())];
        debug!(candidates = corners.len(), chosen = %pos, "Picked corner");
        return decision(pos, Rationale::Corner);
    }

    let free = empty_positions(board);
    if free.is_empty() {
        debug!("No empty squares left");
        return None;
    }
    let pos = free[rng.pick(free.len())];
    debug!(candidates = free.len(), chosen = %pos, "Picked free square");
    decision(pos, Rationale::Any)
}
