//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square, WINNING_LINES};
use tracing::{instrument, trace};

/// Finds the first line in [`WINNING_LINES`] held entirely by `mark`.
///
/// Lines are scanned in table order and the scan stops at the first match.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    let owned = Square::Occupied(mark);
    let line = WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&pos| board.get(pos) == owned));
    if let Some(line) = line {
        trace!(?mark, ?line, "Line complete");
    }
    line
}

/// Would placing `mark` at `pos` give `mark` a complete line?
///
/// Evaluated on a copy of the board; `board` itself is never mutated.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    let hypothetical = board.with(pos, mark);
    winning_line(&hypothetical, mark).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Mark::X), None);
        assert_eq!(winning_line(&board, Mark::O), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X)
            .with(Position::TopRight, Mark::X);
        assert_eq!(
            winning_line(&board, Mark::X),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(winning_line(&board, Mark::O), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with(Position::TopRight, Mark::O)
            .with(Position::Center, Mark::O)
            .with(Position::BottomLeft, Mark::O);
        assert_eq!(
            winning_line(&board, Mark::O),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_first_line_in_table_order_wins() {
        // Top row and left column are both complete; the row comes first.
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X)
            .with(Position::TopRight, Mark::X)
            .with(Position::MiddleLeft, Mark::X)
            .with(Position::BottomLeft, Mark::X);
        assert_eq!(
            winning_line(&board, Mark::X),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X);
        assert_eq!(winning_line(&board, Mark::X), None);
    }

    #[test]
    fn test_completes_line_is_hypothetical() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X);
        assert!(completes_line(&board, Position::TopRight, Mark::X));
        assert!(!completes_line(&board, Position::TopRight, Mark::O));
        assert!(!completes_line(&board, Position::Center, Mark::X));
        assert!(board.is_empty(Position::TopRight));
    }
}
