//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! board storage so the opponent and the state machine can share them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{Line, LINES};
pub use win::{evaluate, outcome, winner, winning_line};
