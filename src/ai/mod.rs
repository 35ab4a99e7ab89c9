//! Computer opponent.
//!
//! The computer picks squares with one of three fixed policies, chosen by
//! [`Difficulty`]:
//!
//! - **Easy**: uniformly random empty square.
//! - **Medium**: a coin flip per move between the Easy and Hard policies.
//! - **Hard**: greedy one-move lookahead. Win if possible, otherwise block
//!   the opponent's immediate win, otherwise play randomly. It does not see
//!   forks, so it can be beaten.

mod difficulty;
mod selector;

pub use difficulty::Difficulty;
pub use selector::{MoveSelector, SelectError, select_computer_move, winning_move};
