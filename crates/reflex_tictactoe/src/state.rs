//! Game state as a value, advanced by a pure transition function.
//!
//! Drivers never mutate a `GameState` in place. They hand the current state
//! and an [`Action`] to [`transition`] and keep whatever comes back.

use super::action::{Action, Move, MoveError};
use super::rules::{self, Line};
use super::{Board, GameResult, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One step of a game between a human and the automated opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Mark,
    result: GameResult,
    history: Vec<Move>,
    human: Mark,
}

impl GameState {
    /// Creates a fresh game. X always moves first; `human` picks which mark
    /// the human plays.
    #[instrument]
    pub fn new(human: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            result: GameResult::InProgress,
            history: Vec::new(),
            human,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Result computed at the last transition.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark played by the human.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Mark played by the opponent.
    pub fn automated(&self) -> Mark {
        self.human.opponent()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// Returns true when the opponent should move next.
    pub fn is_automated_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.automated()
    }

    /// Returns true when the human should move next.
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.human
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.result
            .winner()
            .and_then(|mark| rules::winning_line(&self.board, mark))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

/// Applies `action` to `state`, returning the next state.
///
/// Placing is rejected once the game is over, out of turn, or on an
/// occupied square. After a placement only the mover is evaluated: a move
/// can complete a line for its own mark and nobody else's.
#[instrument(skip(state), fields(to_move = %state.to_move, moves = state.history.len()))]
pub fn transition(state: &GameState, action: Action) -> Result<GameState, MoveError> {
    let mov = match action {
        Action::Reset => {
            debug!("Resetting game");
            return Ok(GameState::new(state.human));
        }
        Action::Place(mov) => mov,
    };

    if state.is_over() {
        return Err(MoveError::GameOver);
    }
    if mov.mark != state.to_move {
        return Err(MoveError::WrongPlayer(mov.mark));
    }
    if !state.board.is_empty(mov.position) {
        return Err(MoveError::SquareOccupied(mov.position));
    }

    let mut next = state.clone();
    next.board.set(mov.position, Square::Occupied(mov.mark));
    next.history.push(mov);
    next.to_move = mov.mark.opponent();
    next.result = rules::evaluate(&next.board, mov.mark);

    debug!(%mov, result = %next.result, "Move applied");
    Ok(next)
}

/// Replays `moves` from a fresh game.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(human: Mark, moves: &[Move]) -> Result<GameState, MoveError> {
    moves
        .iter()
        .try_fold(GameState::new(human), |state, mov| {
            transition(&state, Action::Place(*mov))
        })
}
