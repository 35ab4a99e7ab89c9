//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: the board holds exactly the marks placed this round.
///
/// Replays the round's history onto an empty board; every placement must
/// land on an empty square and the result must equal the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for &(pos, mark) in state.history() {
            if reconstructed.get(pos) != Square::Empty {
                return false;
            }
            reconstructed.set(pos, Square::Occupied(mark));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
