//! Line-based terminal front end.
//!
//! Renders the board, reads one command per line and drives a [`Session`].
//! The computer's reply is delayed by the configured pause.

use crate::ai::Difficulty;
use crate::games::tictactoe::{Position, RoundOutcome};
use crate::session::Session;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the player's mark.
    Place(Position),
    /// Start a new round.
    Reset,
    /// Switch difficulty (starts a new round).
    SetDifficulty(Difficulty),
    /// Leave the game.
    Quit,
}

impl Command {
    /// Parses one input line; `None` if it means nothing.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Some(Command::Quit),
            "r" | "reset" => return Some(Command::Reset),
            "easy" => return Some(Command::SetDifficulty(Difficulty::Easy)),
            "medium" => return Some(Command::SetDifficulty(Difficulty::Medium)),
            "hard" => return Some(Command::SetDifficulty(Difficulty::Hard)),
            _ => {}
        }
        let mut chars = line.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(difficulty) = Difficulty::from_shortcut(c) {
                return Some(Command::SetDifficulty(difficulty));
            }
        }
        Position::from_input(line).map(Command::Place)
    }
}

/// Interactive game over any reader and writer.
pub struct Console<I, O, R> {
    input: I,
    output: O,
    session: Session<R>,
    reply_delay: Duration,
}

impl<I: BufRead, O: Write, R: Rng> Console<I, O, R> {
    /// Creates a console around an existing session.
    pub fn new(input: I, output: O, session: Session<R>, reply_delay: Duration) -> Self {
        Self {
            input,
            output,
            session,
            reply_delay,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Consumes the console, returning its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Plays until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Only I/O failures are returned; rejected moves are reported on the
    /// output and the prompt repeats.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Squares are numbered 1-9. Commands: r = reset, e/m/h = difficulty, q = quit."
        )?;
        loop {
            self.render()?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(Command::Reset) => self.session.reset(),
                Some(Command::SetDifficulty(difficulty)) => {
                    self.session.set_difficulty(difficulty);
                    writeln!(self.output, "Difficulty set to {}.", difficulty)?;
                }
                Some(Command::Place(pos)) => self.place(pos)?,
                None => writeln!(self.output, "Unrecognised input: {}", line.trim())?,
            }
        }
        writeln!(self.output, "{}", self.session.score_line())?;
        Ok(())
    }

    fn place(&mut self, pos: Position) -> io::Result<()> {
        match self.session.play_human_move(pos.to_index()) {
            Ok(RoundOutcome::InProgress) => {}
            Ok(_) => return Ok(()),
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        }

        if !self.reply_delay.is_zero() {
            std::thread::sleep(self.reply_delay);
        }
        match self.session.play_computer_move() {
            Ok((reply, _)) => writeln!(self.output, "AI plays {}.", reply)?,
            Err(e) => {
                warn!(error = %e, "Computer could not move");
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let state = self.session.state();
        writeln!(self.output)?;
        writeln!(self.output, "{}", state.board().display())?;
        let status = self.session.status_line();
        if !status.is_empty() {
            writeln!(self.output, "{}  (r to play again)", status)?;
        }
        writeln!(
            self.output,
            "{}   [{}]",
            self.session.score_line(),
            self.session.difficulty()
        )
    }
}
