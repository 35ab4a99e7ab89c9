//! tictac_duel - terminal tic-tac-toe against the computer.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::time::Duration;
use tictac_duel::{Console, GameConfig, Session, autoplay};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            name,
            delay_ms,
            seed,
        } => {
            let mut game_config = match config {
                Some(path) => GameConfig::from_file(path)?,
                None => GameConfig::default(),
            };
            if let Some(difficulty) = difficulty {
                game_config = game_config.with_difficulty(difficulty);
            }
            if let Some(name) = name {
                game_config = game_config.with_player_name(name);
            }
            if let Some(ms) = delay_ms {
                game_config = game_config.with_reply_delay_ms(ms);
            }
            if let Some(seed) = seed {
                game_config = game_config.with_seed(seed);
            }
            run_play(&game_config)
        }
        Command::Autoplay {
            rounds,
            difficulty,
            seed,
        } => run_autoplay(rounds, difficulty, seed),
    }
}

/// Run the interactive terminal game
fn run_play(config: &GameConfig) -> Result<()> {
    debug!(?config, "Starting interactive game");
    let session = Session::from_config(config);
    let stdin = std::io::stdin();
    let mut console = Console::new(
        stdin.lock(),
        std::io::stdout(),
        session,
        Duration::from_millis(*config.reply_delay_ms()),
    );
    console.run()?;
    info!("Game closed");
    Ok(())
}

/// Run unattended rounds and print the tally
fn run_autoplay(rounds: u32, difficulty: tictac_duel::Difficulty, seed: u64) -> Result<()> {
    let (score, draws) = autoplay(rounds, difficulty, seed)?;
    println!(
        "{} rounds on {}: Random: {} | AI: {} | Draws: {}",
        rounds,
        difficulty,
        score.player(),
        score.ai(),
        draws
    );
    Ok(())
}
