//! Unattended rounds against a random stand-in for the human.

use crate::ai::{Difficulty, MoveSelector};
use crate::games::tictactoe::{RoundOutcome, Score};
use crate::session::{GameError, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, instrument};

/// Plays `rounds` full rounds where the human side picks uniformly random
/// squares, and returns the final score.
///
/// The stand-in and the computer draw from separate streams seeded from
/// `seed`, so a given seed always yields the same score.
///
/// # Errors
///
/// Propagates a [`GameError`], which only happens if the turn sequencing
/// itself is broken.
#[instrument]
pub fn autoplay(rounds: u32, difficulty: Difficulty, seed: u64) -> Result<(Score, u32), GameError> {
    let mut session = Session::new("Random", difficulty, MoveSelector::seeded(seed));
    let mut stand_in = MoveSelector::with_rng(ChaCha20Rng::seed_from_u64(seed.wrapping_add(1)));
    let mut draws = 0;

    for round in 0..rounds {
        session.reset();
        let outcome = loop {
            let pos = stand_in.random_move(session.state().board())?;
            let outcome = session.play_human_move(pos.to_index())?;
            if outcome.is_terminal() {
                break outcome;
            }
            let (_, outcome) = session.play_computer_move()?;
            if outcome.is_terminal() {
                break outcome;
            }
        };
        if outcome == RoundOutcome::Draw {
            draws += 1;
        }
        debug!(round, ?outcome, "Round finished");
    }

    let score = session.state().score();
    info!(player = score.player(), ai = score.ai(), draws, "Autoplay finished");
    Ok((score, draws))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_round_is_counted() {
        let (score, draws) = autoplay(50, Difficulty::Medium, 9).unwrap();
        assert_eq!(score.player() + score.ai() + draws, 50);
    }

    #[test]
    fn test_same_seed_same_result() {
        assert_eq!(
            autoplay(20, Difficulty::Easy, 4).unwrap(),
            autoplay(20, Difficulty::Easy, 4).unwrap()
        );
    }

    #[test]
    fn test_hard_beats_easy_against_random_play() {
        let (easy, _) = autoplay(300, Difficulty::Easy, 21).unwrap();
        let (hard, _) = autoplay(300, Difficulty::Hard, 21).unwrap();
        assert!(hard.player() < easy.player());
    }
}
