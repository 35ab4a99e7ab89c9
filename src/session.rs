//! Game session: one human against the computer.
//!
//! A [`Session`] owns the round state, the difficulty and the move selector,
//! and sequences a turn: the human's move is applied and scored, then, if the
//! round is still open, the computer is asked to reply. When the reply happens
//! is left to the front end so it can add a delay.

use crate::ai::{Difficulty, MoveSelector, SelectError};
use crate::config::GameConfig;
use crate::games::tictactoe::{GameState, InvalidMove, Mark, Position, RoundOutcome, Turn};
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, instrument};

/// Label the computer is shown under.
pub const AI_NAME: &str = "AI";

/// Anything a turn can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The move was rejected; the board is unchanged.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),
    /// The computer had nowhere to play.
    #[display("{}", _0)]
    NoMovesAvailable(SelectError),
}

impl std::error::Error for GameError {}

/// A human-vs-computer game session.
#[derive(Debug, Clone)]
pub struct Session<R = ThreadRng> {
    state: GameState,
    difficulty: Difficulty,
    player_name: String,
    selector: MoveSelector<R>,
}

impl Session<ChaCha20Rng> {
    /// Builds a session from configuration.
    ///
    /// Uses the configured seed when present, entropy otherwise.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => ChaCha20Rng::seed_from_u64(*seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self::new(
            config.player_name().clone(),
            *config.difficulty(),
            MoveSelector::with_rng(rng),
        )
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session with a zero score.
    #[instrument(skip(player_name, selector))]
    pub fn new(
        player_name: impl Into<String>,
        difficulty: Difficulty,
        selector: MoveSelector<R>,
    ) -> Self {
        let player_name = player_name.into();
        info!(%player_name, %difficulty, "Starting session");
        Self {
            state: GameState::new(),
            difficulty,
            player_name,
            selector,
        }
    }

    /// Returns the round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the human player's display name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Plays the human's mark at `index` and scores the round.
    ///
    /// If the round is still in progress the turn passes to the computer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the round is over, the computer
    /// is to move, or the square is out of range or taken.
    #[instrument(skip(self))]
    pub fn play_human_move(&mut self, index: usize) -> Result<RoundOutcome, GameError> {
        self.ensure_turn(Turn::Player)?;
        self.state.apply_move(index, Mark::X)?;
        Ok(self.finish_turn(Mark::X))
    }

    /// Lets the computer reply with the current difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the round is over or it is not
    /// the computer's turn, and [`GameError::NoMovesAvailable`] if the board
    /// is full.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn play_computer_move(&mut self) -> Result<(Position, RoundOutcome), GameError> {
        self.ensure_turn(Turn::Ai)?;
        let pos = self
            .selector
            .select(self.state.board(), self.difficulty, Mark::O)?;
        self.state.apply_move(pos.to_index(), Mark::O)?;
        Ok((pos, self.finish_turn(Mark::O)))
    }

    /// Changes the difficulty and starts a new round.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(from = %self.difficulty, to = %difficulty, "Changing difficulty");
        self.difficulty = difficulty;
        self.reset();
    }

    /// Starts a new round. The score carries over.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Status text for the finished round, empty while it is running.
    pub fn status_line(&self) -> String {
        match self.state.outcome() {
            RoundOutcome::InProgress => String::new(),
            RoundOutcome::PlayerWin => format!("{} Wins! 🎉", self.player_name),
            RoundOutcome::AiWin => format!("{AI_NAME} Wins! 🤖"),
            RoundOutcome::Draw => "Draw! 🤝".to_string(),
        }
    }

    /// Score as `"<name>: <wins> | AI: <wins>"`.
    pub fn score_line(&self) -> String {
        let score = self.state.score();
        format!(
            "{}: {} | {AI_NAME}: {}",
            self.player_name,
            score.player(),
            score.ai()
        )
    }

    fn ensure_turn(&self, expected: Turn) -> Result<(), InvalidMove> {
        if !self.state.is_active() {
            return Err(InvalidMove::RoundInactive);
        }
        let turn = self.state.turn();
        if turn != expected {
            debug!(?turn, ?expected, "Move out of turn");
            return Err(InvalidMove::WrongTurn(turn));
        }
        Ok(())
    }

    fn finish_turn(&mut self, mover: Mark) -> RoundOutcome {
        let outcome = self.state.evaluate_outcome(mover);
        if outcome == RoundOutcome::InProgress {
            self.state.switch_turn();
        }
        outcome
    }
}
