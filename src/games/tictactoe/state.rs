//! Round state and session score.

use super::action::InvalidMove;
use super::invariants::{Invariant, MonotonicBoardInvariant};
use super::phases::{RoundOutcome, Turn};
use super::position::Position;
use super::rules::{is_full, winning_line};
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Wins tallied across rounds.
///
/// Only ever incremented; a round reset leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    player: u32,
    ai: u32,
}

impl Score {
    /// Rounds won by the human.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// Rounds won by the computer.
    pub fn ai(&self) -> u32 {
        self.ai
    }

    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWin => self.player += 1,
            RoundOutcome::AiWin => self.ai += 1,
            RoundOutcome::InProgress | RoundOutcome::Draw => {}
        }
    }
}

/// Board, turn, outcome and score of one game session.
///
/// Moves, outcome evaluation and turn switching are separate calls so the
/// caller decides when the computer replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Turn,
    active: bool,
    outcome: RoundOutcome,
    winning_line: Option<[Position; 3]>,
    history: Vec<(Position, Mark)>,
    score: Score,
}

impl GameState {
    /// Creates a fresh round with a zero score.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Player,
            active: true,
            outcome: RoundOutcome::InProgress,
            winning_line: None,
            history: Vec::new(),
            score: Score::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Outcome from the most recent evaluation.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// The line that ended the round, if it was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Moves applied this round, oldest first.
    pub fn history(&self) -> &[(Position, Mark)] {
        &self.history
    }

    /// Returns the session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Places `mark` at board index `index`.
    ///
    /// Neither switches the turn nor evaluates the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the index is not 0-8, the square is taken,
    /// or the round has ended. The board is unchanged on error.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<Position, InvalidMove> {
        if !self.active {
            return Err(InvalidMove::RoundInactive);
        }
        let pos = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            return Err(InvalidMove::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(mark));
        self.history.push((pos, mark));
        debug_assert!(
            MonotonicBoardInvariant::holds(self),
            "{}",
            MonotonicBoardInvariant::description()
        );
        debug!(%pos, ?mark, "Mark placed");
        Ok(pos)
    }

    /// Scores the round from the point of view of `mover`, who just played.
    ///
    /// A terminal outcome deactivates the round and is credited to the score
    /// once; evaluating an already finished round returns the stored outcome.
    #[instrument(skip(self))]
    pub fn evaluate_outcome(&mut self, mover: Mark) -> RoundOutcome {
        if !self.active {
            return self.outcome;
        }

        let outcome = if let Some(line) = winning_line(&self.board, mover) {
            info!(?mover, ?line, "Round won");
            self.winning_line = Some(line);
            RoundOutcome::win_for(mover)
        } else if is_full(&self.board) {
            info!("Round drawn");
            RoundOutcome::Draw
        } else {
            RoundOutcome::InProgress
        };

        if outcome.is_terminal() {
            self.active = false;
            self.score.record(outcome);
        }
        self.outcome = outcome;
        outcome
    }

    /// Hands the move to the other side.
    #[instrument(skip(self))]
    pub fn switch_turn(&mut self) -> Turn {
        self.turn = self.turn.next();
        self.turn
    }

    /// Starts a new round: empty board, player to move, round active.
    ///
    /// The score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(score = ?self.score, "Resetting round");
        self.board = Board::new();
        self.turn = Turn::Player;
        self.active = true;
        self.outcome = RoundOutcome::InProgress;
        self.winning_line = None;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[(usize, Mark)]) -> RoundOutcome {
        let mut outcome = RoundOutcome::InProgress;
        for &(index, mark) in moves {
            state.apply_move(index, mark).unwrap();
            outcome = state.evaluate_outcome(mark);
        }
        outcome
    }

    #[test]
    fn test_apply_move_sets_square() {
        let mut state = GameState::new();
        let pos = state.apply_move(4, Mark::X).unwrap();
        assert_eq!(pos, Position::Center);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(state.turn(), Turn::Player, "apply_move must not switch turn");
        assert_eq!(state.outcome(), RoundOutcome::InProgress);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(9, Mark::X), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(*state.board(), Board::new());
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut state = GameState::new();
        state.apply_move(0, Mark::X).unwrap();
        let before = *state.board();
        assert_eq!(
            state.apply_move(0, Mark::O),
            Err(InvalidMove::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(*state.board(), before);
    }

    #[test]
    fn test_win_deactivates_and_scores_once() {
        let mut state = GameState::new();
        let outcome = play(
            &mut state,
            &[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)],
        );
        assert_eq!(outcome, RoundOutcome::PlayerWin);
        assert!(!state.is_active());
        assert_eq!(
            state.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(state.score().player(), 1);

        // Re-evaluating a finished round does not score again.
        assert_eq!(state.evaluate_outcome(Mark::X), RoundOutcome::PlayerWin);
        assert_eq!(state.score().player(), 1);
        assert_eq!(state.apply_move(5, Mark::O), Err(InvalidMove::RoundInactive));
    }

    #[test]
    fn test_ai_win_credits_ai() {
        let mut state = GameState::new();
        let outcome = play(
            &mut state,
            &[(0, Mark::X), (2, Mark::O), (1, Mark::X), (4, Mark::O), (8, Mark::X), (6, Mark::O)],
        );
        assert_eq!(outcome, RoundOutcome::AiWin);
        assert_eq!(state.score().ai(), 1);
        assert_eq!(state.score().player(), 0);
    }

    #[test]
    fn test_win_only_checked_for_mover() {
        let mut state = GameState::new();
        play(&mut state, &[(0, Mark::X), (1, Mark::X)]);
        state.apply_move(2, Mark::X).unwrap();
        assert_eq!(state.evaluate_outcome(Mark::O), RoundOutcome::InProgress);
        assert!(state.is_active());
    }

    #[test]
    fn test_reset_keeps_score() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)],
        );
        state.switch_turn();
        state.reset();

        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.turn(), Turn::Player);
        assert!(state.is_active());
        assert_eq!(state.outcome(), RoundOutcome::InProgress);
        assert_eq!(state.winning_line(), None);
        assert!(state.history().is_empty());
        assert_eq!(state.score().player(), 1);
    }

    #[test]
    fn test_switch_turn_alternates() {
        let mut state = GameState::new();
        assert_eq!(state.switch_turn(), Turn::Ai);
        assert_eq!(state.switch_turn(), Turn::Player);
    }
}
