//! Reflex tic-tac-toe - pure game logic.
//!
//! This crate holds everything about the game that does not touch a
//! terminal or a clock.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] decides win, draw or in-progress for a mark
//! - **Opponent**: [`select_move`] picks a square by fixed priority
//!   (win, block, center, corner, any)
//! - **State**: [`GameState`] is advanced by the pure [`transition`]
//!
//! # Example
//!
//! ```
//! use reflex_tictactoe::{select_move, Board, FixedPick, Mark, Position};
//!
//! let board: Board = "XX..O....".parse().unwrap();
//! let pick = select_move(&board, Mark::O, Mark::X, FixedPick(0));
//! assert_eq!(pick, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod random;
mod selector;
mod state;
mod types;

pub mod rules;

pub use action::{Action, Move, MoveError};
pub use position::Position;
pub use random::{FixedPick, RandomSource, RngSource};
pub use rules::{evaluate, is_full, outcome, winner, winning_line, Line, LINES};
pub use selector::{
    completing_move, empty_positions, select_move, select_move_explained, Decision, Rationale,
};
pub use state::{replay, transition, GameState};
pub use types::{Board, GameResult, Mark, ParseBoardError, Square};
