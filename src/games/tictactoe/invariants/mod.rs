//! Invariants over game state.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are checked with `debug_assert!` after every move.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

pub mod monotonic_board;

pub use monotonic_board::MonotonicBoardInvariant;
