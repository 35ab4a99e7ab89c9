//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! state so the move selector can evaluate hypothetical boards with the same
//! predicates the game uses.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{completes_line, winning_line};
