use super::board::Board;
use super::types::{Player, Position};

pub fn has_won(board: &Board, player: Player) -> bool {
    check_rows(board, player)
        || check_columns(board, player)
        || check_main_diagonal(board, player)
        || check_anti_diagonal(board, player)
}

/// Returns the first player that owns a complete line, human checked first.
pub fn check_win(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| has_won(board, player))
}

fn check_rows(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    board
        .rows()
        .iter()
        .any(|row| row.iter().all(|&cell| cell == mark))
}

fn check_columns(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    let size = board.size();
    (0..size).any(|x| (0..size).all(|y| board.get(Position::new(y, x)) == mark))
}

fn check_main_diagonal(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    (0..board.size()).all(|i| board.get(Position::new(i, i)) == mark)
}

fn check_anti_diagonal(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    let size = board.size();
    (0..size).all(|i| board.get(Position::new(i, size - 1 - i)) == mark)
}
