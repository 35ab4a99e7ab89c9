//! Move selection policies.

use super::Difficulty;
use crate::games::tictactoe::{Board, Mark, Position, rules::completes_line};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, instrument};

/// Error returned when the computer is asked to move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// Every square is occupied.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl std::error::Error for SelectError {}

/// Picks the computer's next square.
///
/// Generic over the random source so games can be replayed from a seed.
/// The board passed in is only read; lookahead works on copies.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = ThreadRng> {
    rng: R,
}

impl MoveSelector<ThreadRng> {
    /// Creates a selector backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for MoveSelector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector<ChaCha20Rng> {
    /// Creates a deterministic selector from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector using the given RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a square for `mark` according to `difficulty`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoMovesAvailable`] if the board is full.
    #[instrument(skip(self, board))]
    pub fn select(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        mark: Mark,
    ) -> Result<Position, SelectError> {
        let pos = match difficulty {
            Difficulty::Easy => self.random_move(board)?,
            Difficulty::Hard => self.greedy_move(board, mark)?,
            Difficulty::Medium => {
                // One coin flip per request.
                if self.rng.gen_bool(0.5) {
                    self.greedy_move(board, mark)?
                } else {
                    self.random_move(board)?
                }
            }
        };
        debug!(%pos, "Computer chose square");
        Ok(pos)
    }

    /// Uniformly random empty square.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoMovesAvailable`] if the board is full.
    pub fn random_move(&mut self, board: &Board) -> Result<Position, SelectError> {
        board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SelectError::NoMovesAvailable)
    }

    /// Win if possible, else block the opponent's win, else random.
    ///
    /// Ties go to the lowest board index.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoMovesAvailable`] if the board is full.
    pub fn greedy_move(&mut self, board: &Board, mark: Mark) -> Result<Position, SelectError> {
        if let Some(pos) = winning_move(board, mark) {
            debug!(%pos, "Taking win");
            return Ok(pos);
        }
        if let Some(pos) = winning_move(board, mark.opponent()) {
            debug!(%pos, "Blocking opponent");
            return Ok(pos);
        }
        self.random_move(board)
    }
}

/// First empty square, in board-index order, that would complete a line for `mark`.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|&pos| completes_line(board, pos, mark))
}

/// Chooses the computer's (O) move with a fresh thread-local RNG.
///
/// # Errors
///
/// Returns [`SelectError::NoMovesAvailable`] if the board is full.
#[instrument(skip(board))]
pub fn select_computer_move(board: &Board, difficulty: Difficulty) -> Result<Position, SelectError> {
    MoveSelector::new().select(board, difficulty, Mark::O)
}
