//! Tic-tac-toe against a computer opponent.
//!
//! A human (X) plays the computer (O), which picks moves at one of three
//! difficulty tiers. The library holds the game rules and the computer's
//! move selection; front ends drive it through a [`Session`].
//!
//! # Architecture
//!
//! - **Games**: board, winning lines, round state and score
//! - **AI**: random and greedy move selection behind [`Difficulty`]
//! - **Session**: human-move / computer-reply sequencing
//! - **Console**: line-based terminal front end
//!
//! # Example
//!
//! ```
//! use tictac_duel::{Difficulty, MoveSelector, RoundOutcome, Session};
//!
//! let mut session = Session::new("Ada", Difficulty::Hard, MoveSelector::seeded(7));
//! let outcome = session.play_human_move(4).unwrap();
//! assert_eq!(outcome, RoundOutcome::InProgress);
//! let (_reply, outcome) = session.play_computer_move().unwrap();
//! assert_eq!(outcome, RoundOutcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod autoplay;
mod config;
mod console;
mod games;
mod session;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, InvalidMove, Invariant, Mark, MonotonicBoardInvariant, Position,
    RoundOutcome, Score, Square, Turn, WINNING_LINES,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{completes_line, is_full, winning_line};

// Crate-level exports - Computer opponent
pub use ai::{Difficulty, MoveSelector, SelectError, select_computer_move, winning_move};

// Crate-level exports - Session management
pub use session::{AI_NAME, GameError, Session};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Front ends
pub use autoplay::autoplay;
pub use console::{Command, Console};
