//! Turn and round-outcome markers.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Whose turn it is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub enum Turn {
    /// The human is to move. Every round starts here.
    #[default]
    #[display("player's turn")]
    Player,
    /// The computer is to move.
    #[display("AI's turn")]
    Ai,
}

impl Turn {
    /// The mark placed by whoever holds this turn.
    pub fn mark(self) -> Mark {
        match self {
            Turn::Player => Mark::X,
            Turn::Ai => Mark::O,
        }
    }

    /// The other side's turn.
    pub fn next(self) -> Self {
        match self {
            Turn::Player => Turn::Ai,
            Turn::Ai => Turn::Player,
        }
    }
}

/// Result of evaluating a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// No line complete and at least one empty square.
    #[default]
    InProgress,
    /// The human completed a line.
    PlayerWin,
    /// The computer completed a line.
    AiWin,
    /// Board full with no line complete.
    Draw,
}

impl RoundOutcome {
    /// The win outcome credited to whoever plays `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => RoundOutcome::PlayerWin,
            Mark::O => RoundOutcome::AiWin,
        }
    }

    /// Returns true once the round has ended.
    pub fn is_terminal(self) -> bool {
        self != RoundOutcome::InProgress
    }
}
