use super::board::Board;
use super::types::{Mark, Position};

/// Static score of a position: the sum over every row, column and both
/// diagonals of `humans² - computers²`. Mixed lines count too.
/// Positive favours the human, negative the computer.
pub fn evaluate_board(board: &Board) -> i32 {
    let size = board.size();
    let mut score = 0;

    for y in 0..size {
        score += line_score(board, (0..size).map(|x| Position::new(y, x)));
    }
    for x in 0..size {
        score += line_score(board, (0..size).map(|y| Position::new(y, x)));
    }
    score += line_score(board, (0..size).map(|i| Position::new(i, i)));
    score += line_score(board, (0..size).map(|i| Position::new(i, size - 1 - i)));

    score
}

#[inline(always)]
fn line_score(board: &Board, line: impl Iterator<Item = Position>) -> i32 {
    let mut human_count = 0i32;
    let mut computer_count = 0i32;

    for pos in line {
        match board.get(pos) {
            Mark::Human => human_count += 1,
            Mark::Computer => computer_count += 1,
            Mark::Empty => {}
        }
    }

    human_count * human_count - computer_count * computer_count
}
