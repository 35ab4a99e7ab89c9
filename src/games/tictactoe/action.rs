//! Move rejection reasons.

use super::phases::Turn;
use super::position::Position;

/// A move that cannot be applied to the current round.
///
/// Every variant leaves the board unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index is not a board square (must be 0-8).
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round has finished; reset before playing again.
    #[display("Round is not active")]
    RoundInactive,

    /// A move arrived while the other side was to move.
    #[display("Not allowed during the {}", _0)]
    WrongTurn(Turn),
}

impl std::error::Error for InvalidMove {}
