//! Command-line interface for tictac_duel.

use clap::{Parser, Subcommand};
use tictac_duel::Difficulty;

/// Tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictac_duel")]
#[command(about = "Play tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// TOML config file; flags below override its values
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Computer strength
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Name shown for you in status and score text
        #[arg(short, long)]
        name: Option<String>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit a random player against the computer and print the score
    Autoplay {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Computer strength
        #[arg(short, long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,

        /// Seed for both players
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}
