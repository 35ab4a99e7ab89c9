//! Tests for the computer's move selection.

use tictac_duel::{Board, Difficulty, Mark, MoveSelector, Position, SelectError, select_computer_move};

fn board_from(marks: &[(usize, Mark)]) -> Board {
    marks
        .iter()
        .fold(Board::new(), |b, &(i, m)| b.with(Position::from_index(i).unwrap(), m))
}

/// Pearson chi-square statistic of `counts` against a uniform distribution.
fn chi_square(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn test_hard_blocks_open_row() {
    let board = board_from(&[(0, Mark::X), (1, Mark::X)]);
    assert_eq!(select_computer_move(&board, Difficulty::Hard), Ok(Position::TopRight));
}

#[test]
fn test_hard_wins_before_blocking() {
    let board = board_from(&[(0, Mark::O), (1, Mark::O), (3, Mark::X), (4, Mark::X)]);
    assert_eq!(select_computer_move(&board, Difficulty::Hard), Ok(Position::TopRight));
}

#[test]
fn test_hard_plays_for_given_mark() {
    // Same position seen from X: X wins at 5 rather than blocking at 2.
    let board = board_from(&[(0, Mark::O), (1, Mark::O), (3, Mark::X), (4, Mark::X)]);
    let mut selector = MoveSelector::seeded(0);
    assert_eq!(
        selector.select(&board, Difficulty::Hard, Mark::X),
        Ok(Position::MiddleRight)
    );
}

#[test]
fn test_full_board_reports_no_moves() {
    let board = board_from(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::X),
        (4, Mark::O),
        (5, Mark::O),
        (6, Mark::O),
        (7, Mark::X),
        (8, Mark::X),
    ]);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(
            select_computer_move(&board, difficulty),
            Err(SelectError::NoMovesAvailable)
        );
    }
}

#[test]
fn test_easy_uniform_on_empty_board() {
    let board = Board::new();
    let mut selector = MoveSelector::seeded(2024);
    let mut counts = [0usize; 9];
    for _ in 0..9000 {
        let pos = selector.select(&board, Difficulty::Easy, Mark::O).unwrap();
        counts[pos.to_index()] += 1;
    }
    // 8 degrees of freedom, p = 0.001
    let stat = chi_square(&counts);
    assert!(stat < 26.12, "chi-square {stat} for {counts:?}");
}

#[test]
fn test_easy_uniform_over_empty_squares_only() {
    let board = board_from(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
    let empty = board.empty_positions();
    let mut selector = MoveSelector::seeded(77);
    let mut counts = vec![0usize; empty.len()];
    for _ in 0..6000 {
        let pos = selector.select(&board, Difficulty::Easy, Mark::O).unwrap();
        let slot = empty
            .iter()
            .position(|&p| p == pos)
            .expect("selected an occupied square");
        counts[slot] += 1;
    }
    // 5 degrees of freedom, p = 0.001
    let stat = chi_square(&counts);
    assert!(stat < 20.52, "chi-square {stat} for {counts:?}");
}
