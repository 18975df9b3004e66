use super::board::Board;
use super::evaluator::evaluate_board;
use super::types::{Player, SearchResult};
use super::win_detector::has_won;

/// Depth-limited minimax without pruning. The computer minimizes the
/// evaluator's score and the human maximizes it; on equal scores the first
/// empty cell in row-major order is kept.
///
/// The board is mutated while searching but every placement is undone
/// before returning, so the caller gets back exactly what it passed in.
pub fn minimax(board: &mut Board, turn: Player, depth: usize) -> SearchResult {
    if depth == 0
        || has_won(board, Player::Computer)
        || has_won(board, Player::Human)
        || board.is_full()
    {
        return SearchResult::terminal(evaluate_board(board));
    }

    let minimizing = turn == Player::Computer;
    let mut best: Option<SearchResult> = None;

    for pos in board.empty_cells() {
        let score = {
            let mut placed = board.place_scoped(pos, turn.mark());
            minimax(&mut placed, turn.opponent(), depth - 1).score
        };

        let improves = match best {
            None => true,
            Some(current) if minimizing => score < current.score,
            Some(current) => score > current.score,
        };

        if improves {
            best = Some(SearchResult {
                best_move: Some(pos),
                score,
            });
        }
    }

    best.unwrap_or_else(|| SearchResult::terminal(evaluate_board(board)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_symbols;
    use crate::games::tictactoe::types::{Mark, Position};

    #[test]
    fn test_depth_zero_is_terminal() {
        let mut board = board_from_symbols(&["X..", "...", "..."]);
        let result = minimax(&mut board, Player::Computer, 0);
        assert_eq!(result, SearchResult::terminal(3));
    }

    #[test]
    fn test_won_board_is_terminal() {
        let mut board = board_from_symbols(&["XXX", "OO.", "..."]);
        let expected = evaluate_board(&board);
        let result = minimax(&mut board, Player::Computer, 4);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, expected);
    }

    #[test]
    fn test_full_board_is_terminal() {
        let mut board = board_from_symbols(&["XOX", "XOO", "OXX"]);
        let result = minimax(&mut board, Player::Human, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate_board(&board));
    }

    #[test]
    fn test_single_empty_cell_is_always_chosen() {
        for player in [Player::Human, Player::Computer] {
            for depth in 1..=4 {
                let mut board = board_from_symbols(&["XOX", "XOO", "OX."]);
                let result = minimax(&mut board, player, depth);
                assert_eq!(result.best_move, Some(Position::new(2, 2)));
            }
        }
    }

    #[test]
    fn test_depth_one_prefers_centre() {
        let mut board = Board::new(3);
        let computer = minimax(&mut board, Player::Computer, 1);
        assert_eq!(computer.best_move, Some(Position::new(1, 1)));
        assert_eq!(computer.score, -4);

        let human = minimax(&mut board, Player::Human, 1);
        assert_eq!(human.best_move, Some(Position::new(1, 1)));
        assert_eq!(human.score, 4);
    }

    #[test]
    fn test_deep_search_moves_and_scores() {
        let cases = [
            (&["XX.", "OO.", "..."][..], Player::Computer, 2, Position::new(1, 2), -7),
            (&["XX.", "OO.", "..."][..], Player::Computer, 4, Position::new(0, 2), -9),
            (&["...", "...", "..."][..], Player::Computer, 4, Position::new(1, 1), -1),
            (&["X...", ".O..", "..X.", "...."][..], Player::Computer, 4, Position::new(1, 2), 7),
            (&["X...", ".O..", "..X.", "...."][..], Player::Human, 4, Position::new(0, 3), 7),
        ];

        for (rows, player, depth, expected_move, expected_score) in cases {
            let mut board = board_from_symbols(rows);
            let result = minimax(&mut board, player, depth);
            assert_eq!(
                result,
                SearchResult {
                    best_move: Some(expected_move),
                    score: expected_score,
                },
                "{:?} {:?} depth {}",
                rows,
                player,
                depth
            );
        }
    }

    #[test]
    fn test_ties_keep_first_cell() {
        // every free cell lies on exactly one row and one column and no diagonal,
        // so all four depth-one replies score the same
        let mut board = board_from_symbols(&["X.X", ".O.", "X.X"]);
        let result = minimax(&mut board, Player::Computer, 1);
        assert_eq!(result.best_move, Some(Position::new(0, 1)));
    }

    #[test]
    fn test_search_restores_board() {
        let original = board_from_symbols(&["X...", ".O..", "..X.", "...."]);
        let mut board = original.clone();
        minimax(&mut board, Player::Computer, 3);
        assert_eq!(board, original);
        minimax(&mut board, Player::Human, 2);
        assert_eq!(board, original);
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let boards = [
            Board::new(3),
            board_from_symbols(&["XX.", "OO.", "..."]),
            board_from_symbols(&["X.O", ".X.", "O.."]),
            board_from_symbols(&["X..O", ".O..", "..X.", "X..."]),
        ];
        for board in boards {
            for depth in [1, 2, 4] {
                let mut search_board = board.clone();
                let result = minimax(&mut search_board, Player::Computer, depth);
                let pos = result.best_move.unwrap();
                assert_eq!(board.get(pos), Mark::Empty);
            }
        }
    }

    #[test]
    fn test_hard_search_on_empty_board_returns_valid_cell() {
        let mut board = Board::new(3);
        let result = minimax(&mut board, Player::Computer, 4);
        let pos = result.best_move.unwrap();
        assert!(Board::new(3).is_valid_move(pos));
    }
}
