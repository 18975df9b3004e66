use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::minimax::minimax;
use super::types::{Difficulty, Player, Position};

/// Picks the computer's next move. Returns `None` only when the board has no
/// empty cell left.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &mut Board,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty.search_depth() {
        None => calculate_random_move(board, rng),
        Some(depth) => calculate_minimax_move(board, depth),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(board: &mut Board, depth: usize) -> Option<Position> {
    if board.is_full() {
        return None;
    }

    let result = minimax(board, Player::Computer, depth);
    log!(
        "Minimax depth {} picked {:?} with score {}",
        depth,
        result.best_move,
        result.score
    );
    result.best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_symbols;
    use crate::games::tictactoe::types::Mark;
    use std::collections::HashMap;

    #[test]
    fn test_easy_picks_only_empty_cells() {
        let mut rng = SessionRng::new(7);
        let board = board_from_symbols(&["XO.", "X.O", ".OX"]);
        for _ in 0..50 {
            let mut search_board = board.clone();
            let pos = calculate_move(Difficulty::Easy, &mut search_board, &mut rng).unwrap();
            assert_eq!(board.get(pos), Mark::Empty);
        }
    }

    #[test]
    fn test_easy_covers_every_empty_cell() {
        let mut rng = SessionRng::new(42);
        let mut board = board_from_symbols(&["XO.", "X.O", ".OX"]);
        let mut counts: HashMap<Position, usize> = HashMap::new();
        for _ in 0..3000 {
            let pos = calculate_move(Difficulty::Easy, &mut board, &mut rng).unwrap();
            *counts.entry(pos).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
        for count in counts.values() {
            assert!(*count > 800, "skewed distribution: {:?}", counts);
        }
    }

    #[test]
    fn test_same_seed_same_easy_moves() {
        let mut board = Board::new(5);
        let mut first = SessionRng::new(99);
        let mut second = SessionRng::new(99);
        for _ in 0..20 {
            assert_eq!(
                calculate_move(Difficulty::Easy, &mut board, &mut first),
                calculate_move(Difficulty::Easy, &mut board, &mut second)
            );
        }
    }

    #[test]
    fn test_medium_and_hard_use_search() {
        let mut rng = SessionRng::new(1);
        let mut board = board_from_symbols(&["XOX", "XOO", "OX."]);
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let pos = calculate_move(difficulty, &mut board, &mut rng);
            assert_eq!(pos, Some(Position::new(2, 2)));
        }

        let mut board = Board::new(3);
        let expected = minimax(&mut board.clone(), Player::Computer, 2).best_move;
        assert_eq!(calculate_move(Difficulty::Medium, &mut board, &mut rng), expected);
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut rng = SessionRng::new(3);
        let mut board = board_from_symbols(&["XOX", "XOO", "OXX"]);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(calculate_move(difficulty, &mut board, &mut rng), None);
        }
    }
}
