mod board;
mod bot_controller;
mod evaluator;
mod game_loop;
mod game_state;
mod input;
mod minimax;
mod render;
mod save_file;
mod types;
mod win_detector;

pub use board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE, ScopedMark};
pub use bot_controller::{calculate_minimax_move, calculate_move};
pub use evaluator::evaluate_board;
pub use game_loop::{GameError, GameEvent, GameFrontend, TicTacToeGame};
pub use game_state::TicTacToeGameState;
pub use input::{InputError, parse_board_size, parse_cell_index, parse_difficulty, parse_yes_no};
pub use minimax::minimax;
pub use render::{render_board, separator_line};
pub use save_file::{
    DEFAULT_SAVE_FILE, FileSaveGameStore, SaveGameError, SaveGameStore, parse_board,
};
pub use types::{Difficulty, GameStatus, Mark, Player, Position, SearchResult};
pub use win_detector::{check_win, has_won};
