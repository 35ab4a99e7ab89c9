//! Tic-tac-toe rules, board and round state.

mod action;
mod invariants;
mod phases;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::InvalidMove;
pub use invariants::{Invariant, MonotonicBoardInvariant};
pub use phases::{RoundOutcome, Turn};
pub use position::{Position, WINNING_LINES};
pub use state::{GameState, Score};
pub use types::{Board, Mark, Square};
